//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_WIDTH: u8 = 15;
pub const GRID_HEIGHT: u8 = 20;

/// Spawn coordinate for new pieces
pub const SPAWN_X: i8 = 7;
pub const SPAWN_Y: i8 = 0;

/// Frame pacing: redraw at 30 fps, advance game logic at 5 ticks/s
pub const TARGET_FPS: u64 = 30;
pub const LOGIC_FPS: u64 = 5;
pub const TICK_WAIT_FRAMES: u64 = TARGET_FPS / LOGIC_FPS;
pub const FRAME_INTERVAL_MS: u64 = 1000 / TARGET_FPS;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All seven kinds, in pouch refill order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Rotation states in quarter turns (R0 = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::R0,
        Rotation::R90,
        Rotation::R180,
        Rotation::R270,
    ];

    /// Advance by 90 degrees, wrapping 270 back to 0
    pub fn next(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }
}

/// Game actions triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    HardDrop,
}

/// Game phase, advanced once per logic tick
///
/// `Over` is transient: the tick after entering it resets the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Dropping,
    Over,
}

/// Cell on the grid (None = empty, Some = locked piece kind)
pub type Cell = Option<PieceKind>;
