//! FrameClock: frame-rate limiter and logic-tick divider.
//!
//! The host delivers monotonically increasing millisecond timestamps, one
//! per display refresh. A frame is accepted once the elapsed time since the
//! last accepted frame reaches 1000/targetFPS ms; leftover elapsed time is
//! carried over rather than dropped, so the accept rate stays close to the
//! target without catch-up bursts. Every Nth accepted frame also runs one
//! game-logic tick, decoupling render cadence from simulation cadence.
//!
//! This module is pure (no I/O) and can be unit-tested.

use crate::types::{FRAME_INTERVAL_MS, TICK_WAIT_FRAMES};

/// One accepted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Index of this frame since the clock was created.
    pub index: u64,
    /// Whether this frame carries a game-logic tick.
    pub run_logic: bool,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_accept_ms: u64,
    frame: u64,
}

impl FrameClock {
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_accept_ms: now_ms,
            frame: 0,
        }
    }

    /// Offer a timestamp to the clock.
    ///
    /// Returns `Some(frame)` if the frame is accepted (enough wall-clock
    /// time has passed), `None` otherwise. The caller redraws on every
    /// accepted frame and ticks the game only when `run_logic` is set.
    pub fn on_frame(&mut self, now_ms: u64) -> Option<Frame> {
        let elapsed = now_ms.saturating_sub(self.last_accept_ms);
        if elapsed < FRAME_INTERVAL_MS {
            return None;
        }

        // Carry leftover time so a late frame does not delay the next one.
        self.last_accept_ms = now_ms - (elapsed % FRAME_INTERVAL_MS);

        let frame = Frame {
            index: self.frame,
            run_logic: self.frame % TICK_WAIT_FRAMES == 0,
        };
        self.frame = self.frame.wrapping_add(1);
        Some(frame)
    }

    /// Milliseconds until the next frame could be accepted.
    pub fn time_to_next_frame_ms(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.last_accept_ms);
        FRAME_INTERVAL_MS.saturating_sub(elapsed)
    }
}
