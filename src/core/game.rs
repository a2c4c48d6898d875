//! Game module - the per-tick state machine
//!
//! Ties together the grid, the piece tables, and the pouch. One logic tick
//! runs row clear + collapse, then advances the phase machine:
//! spawn (`Pending`), descend one row (`Dropping`), or full reset (`Over`).
//! Input is applied synchronously between ticks and never mutates the grid
//! directly; it only repositions the active piece.

use crate::core::{get_shape, Grid, Pouch, SimpleRng};
use crate::types::{GameAction, Phase, PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Resolve the absolute cell set for the current kind and rotation
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut cells = get_shape(self.kind, self.rotation);
        for (dx, dy) in &mut cells {
            *dx += self.x;
            *dy += self.y;
        }
        cells
    }
}

/// Complete game state: grid, active piece, pouch, and phase.
///
/// Owned by the event loop; both the tick handler and the key handler run
/// on the same thread, so there is never concurrent mutation.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    active: Option<Piece>,
    pouch: Pouch,
    rng: SimpleRng,
    phase: Phase,
}

impl Game {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            pouch: Pouch::new(),
            rng: SimpleRng::new(seed),
            phase: Phase::Pending,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance one logic tick.
    ///
    /// Row clear and collapse always run first, so a row completed by the
    /// previous lock is gone before the next spawn or descent.
    pub fn tick(&mut self) {
        self.grid.clear_filled();
        self.grid.collapse();

        match self.phase {
            Phase::Pending => self.spawn(),
            Phase::Dropping => self.drop_step(),
            Phase::Over => self.reset(),
        }
    }

    /// Draw a kind from the pouch and place it at the spawn coordinate with
    /// a random rotation. There is no spawn-time validity check; a blocked
    /// spawn surfaces as game over on the following descent tick.
    fn spawn(&mut self) {
        let kind = self.pouch.draw(&mut self.rng);
        let rotation = self.rng.random_rotation();
        self.active = Some(Piece::new(kind, rotation));
        self.phase = Phase::Dropping;
    }

    /// Move the active piece down one row; on collision revert, then either
    /// lock it or flag game over if it never left the spawn row.
    fn drop_step(&mut self) {
        let Some(mut piece) = self.active else {
            // No piece to descend; respawn on the next tick.
            self.phase = Phase::Pending;
            return;
        };

        piece.y += 1;

        if self.grid.collides(&piece.cells()) {
            piece.y -= 1;

            if piece.y == SPAWN_Y {
                self.active = Some(piece);
                self.phase = Phase::Over;
            } else {
                self.grid.burn(&piece.cells(), piece.kind);
                self.active = None;
                self.phase = Phase::Pending;
            }
        } else {
            self.active = Some(piece);
        }
    }

    /// Full game reset: clear grid, refill pouch, back to `Pending`.
    /// `Over` is transient, so the game restarts by itself one tick later.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.pouch.refill();
        self.active = None;
        self.phase = Phase::Pending;
    }

    /// Apply a game action to the active piece.
    ///
    /// Returns true if the piece moved. Invalid moves are reverted rather
    /// than reported; there is no error taxonomy here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        match action {
            GameAction::MoveLeft => self.try_shift(piece, -1),
            GameAction::MoveRight => self.try_shift(piece, 1),
            GameAction::Rotate => self.try_rotate(piece),
            GameAction::HardDrop => {
                self.hard_drop(piece);
                true
            }
        }
    }

    /// Tentatively shift the piece one column; commit only if the target
    /// position is fully in bounds and collision-free.
    fn try_shift(&mut self, mut piece: Piece, dx: i8) -> bool {
        piece.x += dx;
        if self.grid.is_valid_pos(&piece.cells()) {
            self.active = Some(piece);
            return true;
        }
        false
    }

    /// Tentatively advance the rotation by a quarter turn; revert to the
    /// previous rotation if the recomputed cell set is invalid.
    fn try_rotate(&mut self, mut piece: Piece) -> bool {
        piece.rotation = piece.rotation.next();
        if self.grid.is_valid_pos(&piece.cells()) {
            self.active = Some(piece);
            return true;
        }
        false
    }

    /// Descend until the first colliding row, then back off one.
    ///
    /// The piece rests at its lowest legal row; the actual lock still
    /// happens on the next `Dropping` tick.
    fn hard_drop(&mut self, mut piece: Piece) {
        while !self.grid.collides(&piece.cells()) {
            piece.y += 1;
        }
        piece.y -= 1;
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
        self.phase = Phase::Dropping;
    }
}
