//! Application layer applying user input to the grid.
//!
//! This module sits between the domain layer and the terminal: it owns the
//! running state and turns discrete input events into grid mutations.

pub mod events;
pub mod state;

pub use events::*;
pub use state::*;
