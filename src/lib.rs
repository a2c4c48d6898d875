//! pouchtris - a terminal falling-block game.
//!
//! The crate splits into deterministic game logic (`core`), the terminal
//! rendering layer (`term`), key mapping (`input`), and shared plain types
//! (`types`). The binary in `main.rs` wires them into a single-threaded
//! event loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
