//! Terminal pouchtris runner.
//!
//! Single-threaded event loop with two event sources: terminal key events
//! and the frame clock. Key events mutate the active piece synchronously;
//! accepted frames redraw, and every Nth accepted frame advances one game
//! tick. The grid, active piece, pouch, and phase are all owned here and
//! only ever touched from this loop.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use pouchtris::core::{FrameClock, Game};
use pouchtris::input::{handle_key_event, should_quit};
use pouchtris::term::{FrameBuffer, GameView, TerminalRenderer};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(clock_seed());
    let view = GameView::default();

    let epoch = Instant::now();
    let mut clock = FrameClock::new(0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);

    loop {
        // Input with timeout until the next frame is due.
        let now_ms = epoch.elapsed().as_millis() as u64;
        let timeout = Duration::from_millis(clock.time_to_next_frame_ms(now_ms));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(w, h) => {
                    fb.resize(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Frame: redraw every accepted frame, tick on logic frames.
        let now_ms = epoch.elapsed().as_millis() as u64;
        if let Some(frame) = clock.on_frame(now_ms) {
            if frame.run_logic {
                game.tick();
            }
            view.render_into(&game, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}

/// Seed from the wall clock, so every run deals a different sequence.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
