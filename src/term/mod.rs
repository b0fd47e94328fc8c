//! Terminal rendering module.
//!
//! Full-frame redraws only: the grid is 10x20, so there is nothing to gain
//! from diffing. The renderer owns raw mode / alternate screen setup and
//! teardown.

pub mod renderer;

pub use renderer::TerminalRenderer;
