//! Infrastructure layer providing external service integrations.
//!
//! Currently the system clipboard, which receives the exported grid.

pub mod clipboard;

pub use clipboard::*;
