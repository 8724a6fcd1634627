use thiserror::Error;

/// Errors that prevent the grid from being built or displayed.
///
/// All of these are fatal at startup; nothing in the running event loop
/// produces a `GridError`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("A time grid needs at least one timezone and one column")]
    EmptyGrid,
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
