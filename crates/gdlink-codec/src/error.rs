//! Error types for the codec layer.
//!
//! Only two things in this crate can actually fail: turning Base64 text
//! back into bytes, and inflating a compressed stream. The record parser
//! is total (it truncates instead of failing), and the cipher and checksum
//! functions cannot fail at all.

use crate::Framing;

/// Errors that can occur while decoding service payloads.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input was not valid Base64 for the expected alphabet.
    ///
    /// `#[from]` lets `?` convert a `base64::DecodeError` straight into
    /// this variant.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The compressed stream was corrupt or truncated.
    ///
    /// There is no partial-result recovery: whatever was inflated before
    /// the error is discarded.
    #[error("{framing} decompression failed: {source}")]
    Decompress {
        framing: Framing,
        #[source]
        source: std::io::Error,
    },
}
