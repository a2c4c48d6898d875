//! GameView: maps `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Each frame it paints one rectangle per
//! grid cell and then overlays the active piece in its own color without
//! touching grid state, mirroring the canvas drawing of the original.

use crate::core::Game;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Display color of a locked or falling piece.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(220, 60, 60),   // red
        PieceKind::T => Rgb::new(255, 165, 0),   // orange
        PieceKind::O => Rgb::new(240, 220, 80),  // yellow
        PieceKind::S => Rgb::new(120, 230, 80),  // lime
        PieceKind::Z => Rgb::new(80, 220, 220),  // cyan
        PieceKind::L => Rgb::new(80, 120, 220),  // blue
        PieceKind::J => Rgb::new(170, 80, 220),  // purple
    }
}

const EMPTY_BG: Rgb = Rgb::new(10, 10, 14);

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, &mut fb);
        fb
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(&self, game: &Game, fb: &mut FrameBuffer) {
        fb.clear(Default::default());

        let board_w = (GRID_WIDTH as u16) * self.cell_w;
        let board_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked grid cells.
        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                match game.grid().get(x, y).unwrap_or(None) {
                    Some(kind) => {
                        self.fill_cell(fb, start_x, start_y, x, y, piece_color(kind));
                    }
                    None => self.fill_empty(fb, start_x, start_y, x, y),
                }
            }
        }

        // Active piece overlay, drawn after the grid in the piece's color.
        if let Some(piece) = game.active() {
            let color = piece_color(piece.kind);
            for &(x, y) in piece.cells().iter() {
                self.fill_cell(fb, start_x, start_y, x, y, color);
            }
        }

        if game.phase() == Phase::Over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Paint one grid cell's rectangle in the given color.
    ///
    /// Out-of-grid coordinates (pieces partly above the ceiling) are
    /// clipped here rather than rejected upstream.
    fn fill_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, color: Rgb) {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return;
        }
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        let style = CellStyle::new(color, EMPTY_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn fill_empty(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8) {
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        let style = CellStyle::new(Rgb::new(60, 60, 70), EMPTY_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;
    use crate::types::Rotation;

    fn viewport() -> Viewport {
        Viewport::new(80, 30)
    }

    #[test]
    fn test_render_empty_game_draws_border() {
        let game = Game::new(1);
        let view = GameView::default();
        let fb = view.render(&game, viewport());

        let border_chars: usize = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| {
                matches!(
                    fb.get(x, y).map(|c| c.ch),
                    Some('┌' | '┐' | '└' | '┘' | '─' | '│')
                )
            })
            .count();
        assert!(border_chars > 0);
    }

    #[test]
    fn test_active_piece_is_painted() {
        let mut game = Game::new(1);
        game.tick(); // spawn

        let view = GameView::default();
        let fb = view.render(&game, viewport());

        let piece = game.active().unwrap();
        let color = piece_color(piece.kind);
        let painted: usize = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|c| c.style.fg) == Some(color))
            .count();

        // Each in-grid piece cell covers cell_w x cell_h terminal cells.
        let in_grid = piece
            .cells()
            .iter()
            .filter(|&&(x, y)| x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_HEIGHT as i8)
            .count();
        assert!(painted >= in_grid * 2);
    }

    #[test]
    fn test_cells_above_ceiling_are_clipped() {
        let mut game = Game::new(1);
        // An I piece at spawn extends to y = -2.
        game.set_active(Piece::new(PieceKind::I, Rotation::R0));

        let view = GameView::default();
        let fb = view.render(&game, viewport());

        // Only the two in-grid cells are painted.
        let color = piece_color(PieceKind::I);
        let painted: usize = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).map(|c| c.style.fg) == Some(color))
            .count();
        assert_eq!(painted, 2 * 2);
    }
}
