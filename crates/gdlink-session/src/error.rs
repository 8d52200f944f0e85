//! Error types for the session layer.

use gdlink_protocol::ProtocolError;

/// Errors that can occur while logging in.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The service rejected the username/password pair (`-1`).
    ///
    /// This is the "bad credentials" case, distinct from anything the
    /// network or the protocol layer can report.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The service refused the login with another sentinel.
    ///
    /// `-12` is a disabled account, `-8` a username that doesn't meet
    /// the rules. Other codes show up occasionally and are passed through.
    #[error("login rejected with code {0}")]
    Rejected(i32),

    /// The login answer was empty or unreadable.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
