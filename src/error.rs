use thiserror::Error;

/// Errors returned by clustering primitives in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Positional access past the end of a cluster.
    #[error("position {position} out of range for cluster of size {len}")]
    OutOfRange {
        /// Requested position.
        position: usize,
        /// Number of members in the cluster.
        len: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
