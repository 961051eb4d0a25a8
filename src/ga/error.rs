use thiserror::Error;

/// Errors produced by the eight queens GA.
#[derive(Debug, Error)]
pub enum GaError {
    /// A configuration parameter is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Externally supplied row data places a queen off the board.
    #[error("row {row} has column {column}, which is off the board")]
    ColumnOutOfRange { row: usize, column: usize },

    /// Writing a generation report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
