//! Unified error type for gdlink.

use gdlink_protocol::ProtocolError;
use gdlink_session::SessionError;
use gdlink_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates the `From` impls, so
/// `?` converts sub-crate errors automatically. Match on
/// [`GdlinkError::Session`] with [`SessionError::InvalidCredentials`] to
/// tell a bad password apart from a network problem.
#[derive(Debug, thiserror::Error)]
pub enum GdlinkError {
    /// The request never got a usable HTTP answer.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The answer was a sentinel or empty, or a field failed to decode.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Login failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl GdlinkError {
    /// The failure sentinel behind this error, if there is one.
    pub fn sentinel(&self) -> Option<i32> {
        match self {
            Self::Protocol(ProtocolError::Sentinel(code))
            | Self::Session(SessionError::Protocol(ProtocolError::Sentinel(code))) => Some(*code),
            Self::Session(SessionError::Rejected(code)) => Some(*code),
            Self::Session(SessionError::InvalidCredentials) => Some(-1),
            _ => None,
        }
    }
}
