//! Core module - pure game logic with no external I/O
//!
//! This module contains all the game rules: the grid, the piece offset
//! tables, the pouch randomizer, the phase machine, and the frame clock.
//! It has zero dependencies on UI or terminal handling and is fully
//! deterministic given a seed.

pub mod clock;
pub mod game;
pub mod grid;
pub mod pieces;
pub mod rng;

// Re-export commonly used types
pub use clock::{Frame, FrameClock};
pub use game::{Game, Piece};
pub use grid::Grid;
pub use pieces::{get_shape, CellOffset, PieceShape};
pub use rng::{Pouch, SimpleRng};
