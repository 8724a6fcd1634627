//! tzgrid - Terminal Timezone Grid Library
//!
//! A grid of civil times with one row per timezone and one column per
//! adjustable moment, rendered identically on screen and on the clipboard.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
