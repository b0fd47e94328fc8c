//! Terminal blockfall runner (default binary).
//!
//! Drives the board engine with keyboard commands and a 250 ms gravity
//! tick, re-rendering after every command.

use std::fs;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::TerminalRenderer;
use blockfall::types::{GameAction, BOARD_DUMP_PATH, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
        .wrapping_add(std::process::id());
    let mut game_state = GameState::new(seed);
    game_state.start();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        term.draw(&game_state)?;

        // Input with timeout until the next gravity tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::DumpBoard) => {
                            fs::write(BOARD_DUMP_PATH, game_state.board().to_text())
                                .with_context(|| {
                                    format!("writing board dump to {BOARD_DUMP_PATH}")
                                })?;
                        }
                        Some(action) => game_state.apply_action(action),
                        None => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game_state.tick();
        }
    }
}
