//! Presentation layer handling terminal UI and user input.
//!
//! This module translates crossterm events into grid events, paints the
//! grid into the ratatui frame buffer and drives the event loop.

pub mod ui;
pub mod input;
pub mod terminal;

pub use ui::*;
pub use input::*;
pub use terminal::*;
