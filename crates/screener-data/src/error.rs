//! Error types for snapshot loading.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading or validating a snapshot.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot JSON could not be parsed
    #[error("Snapshot parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A symbol appears more than once in the snapshot
    #[error("Duplicate symbol in snapshot: {symbol}")]
    DuplicateSymbol {
        /// Symbol that was repeated
        symbol: String,
    },

    /// Invalid symbol
    #[error("Invalid symbol at record {index}: {reason}")]
    InvalidSymbol {
        /// Position of the record in the snapshot
        index: usize,
        /// Why the symbol was rejected
        reason: String,
    },
}
