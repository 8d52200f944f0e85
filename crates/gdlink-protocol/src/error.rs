//! Error types for the protocol layer.

use gdlink_codec::CodecError;

/// Errors that can occur while building requests or interpreting
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The service answered with a failure sentinel (`-1`, `-2`, …).
    ///
    /// What each code means depends on the endpoint; `-1` is the generic
    /// "no" and the only one every endpoint uses.
    #[error("server returned failure sentinel {0}")]
    Sentinel(i32),

    /// The service answered with an empty body.
    #[error("empty response body")]
    EmptyResponse,

    /// The body wasn't a sentinel but didn't match the endpoint's grammar.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A field the caller asked for isn't in the record.
    #[error("missing field {0}")]
    MissingField(&'static str),

    /// An endpoint class name with no secret behind it.
    #[error("unknown secret class: {0}")]
    UnknownSecretClass(String),

    /// Form serialization failed.
    #[error("encode failed: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// An embedded payload (Base64 text, compressed level data) failed to
    /// decode.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
