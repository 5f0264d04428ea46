/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
///
/// The roster operations themselves are total; this is the error surface of
/// the JSON helpers and of clock construction.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Timestamp parsing errors
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
