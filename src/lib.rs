//! Blockfall: a falling-block puzzle game for the terminal.
//!
//! `core` holds the deterministic board engine, `term` the crossterm
//! renderer, `input` the key mapping. The binary in `main.rs` wires them
//! together with a 250 ms gravity tick.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
