//! Copy error types

use thiserror::Error;

/// Errors raised by the copy engine
///
/// Every variant is a contract violation by the caller; none is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    /// Destination cannot be cleared and repopulated in place
    #[error("cannot copy into a {0} destination")]
    UnsupportedDestination(&'static str),

    /// Source and destination are the same reference
    #[error("can't copy: source and destination are identical")]
    IdenticalSourceAndDestination,

    /// Array-like source with record-like destination, or the reverse
    #[error("cannot copy {source_type} into {destination_type}")]
    IncompatibleDestination {
        /// Source type name
        source_type: &'static str,
        /// Destination type name
        destination_type: &'static str,
    },

    /// Global execution context or scope object encountered
    #[error("can't copy {0}: making copies of global or scope objects is not supported")]
    RestrictedObject(&'static str),

    /// Internal invariant broken while rebuilding a value
    #[error("InternalError: {0}")]
    Internal(&'static str),
}

/// Result type for copy operations
pub type CopyResult<T> = std::result::Result<T, CopyError>;
