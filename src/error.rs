//! Error types for wafers.

/// Errors that can occur when configuring a chunking operation.
///
/// All variants are parameter-validation failures raised before any work
/// happens; once parameters are accepted, chunking itself cannot fail.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size or item budget (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap must be strictly smaller than the chunk size, otherwise the
    /// scan cursor would never advance.
    #[error("overlap {overlap} must be smaller than chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },
}

/// Result type for wafers operations.
pub type Result<T> = std::result::Result<T, Error>;
