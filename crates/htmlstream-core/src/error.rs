//! Error type for the streaming pipeline.

/// Error type for chunked body streaming operations.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Chunk size must be at least one byte.
    #[error("Invalid chunk size: {0} (must be at least 1)")]
    InvalidChunkSize(usize),

    /// The underlying transport rejected a write or the connection dropped.
    /// Fatal to the response body being produced; no retry is attempted.
    #[error("Transport write failed: {0}")]
    Transport(String),

    /// An exclusive HTML value was consumed more than once. This is a caller
    /// programming error, surfaced as an internal error instead of streaming
    /// a reused value.
    #[error("HTML value already consumed")]
    ValueConsumed,
}
