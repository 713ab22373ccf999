//! Error taxonomy shared by every codec stage.
//!
//! Each stage validates its own contract and reports the most specific
//! variant. The pipeline propagates these untouched, so a caller can tell a
//! token decoded with the wrong configuration from a corrupt one.

/// Errors that can occur while encoding or decoding spectrum tokens
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input violates a structural precondition of an encoder
    #[error("Encoding range error: {0}")]
    EncodingRange(String),

    /// Token framing is broken (component count, stride, permutation shape)
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Token content could not be parsed at some stage
    #[error("Decode error: {0}")]
    Decode(String),

    /// Tagged token was produced by a different pipeline configuration
    #[error("Format mismatch: expected {expected}, found {found}")]
    FormatMismatch {
        /// Format identifier of the decoding pipeline
        expected: String,
        /// Format identifier carried by the token
        found: String,
    },

    /// I/O error while a compressor writes into its in-memory buffer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    pub(crate) fn range(msg: impl Into<String>) -> Self {
        Self::EncodingRange(msg.into())
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedToken(msg.into())
    }

    pub(crate) fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, CodecError>;
