//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer of styled character cells, and the renderer flushes it to
//! the terminal with diffed updates. Keeping the view pure means the whole
//! drawing path short of actual terminal I/O is unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::TerminalRenderer;
