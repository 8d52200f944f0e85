//! The login exchange and the session it produces.
//!
//! ```text
//!   Anonymous ──(login_params → POST → complete_login)──→ Authenticated
//!       ↑                                                    │
//!       └──────────────(-1 / -N: stays anonymous)────────────┘
//! ```
//!
//! There is no refresh and no expiry on our side. A session stays valid
//! until the service decides otherwise, which only shows up as future
//! requests answering with sentinels.

use std::fmt;

use gdlink_codec::cipher;
use gdlink_protocol::secrets::{ACCOUNT_PASSWORD_KEY, DEVICE_ID};
use gdlink_protocol::{Endpoint, LoginResult, ProtocolError, RequestParams};

use crate::{Credentials, SessionError};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A logged-in identity.
///
/// Immutable once issued: fields are read-only and the type is cheap to
/// clone, so concurrent requests can all read the same session.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    account_id: u64,
    user_id: u64,
    username: String,
    gjp: String,
}

impl Session {
    /// Builds a session from its parts, deriving the password token.
    ///
    /// Useful when the ids are already known (saved from an earlier
    /// login), since the service never re-issues anything on login.
    pub fn new(account_id: u64, user_id: u64, credentials: &Credentials) -> Self {
        Self {
            account_id,
            user_id,
            username: credentials.username.clone(),
            gjp: cipher::encrypt(&credentials.password, ACCOUNT_PASSWORD_KEY),
        }
    }

    pub fn account_id(&self) -> u64 {
        self.account_id
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The obfuscated password token sent as `gjp`.
    pub fn gjp(&self) -> &str {
        &self.gjp
    }

    /// Adds `accountID` and `gjp` to `params`.
    pub fn attach<'a>(&self, params: &'a mut RequestParams) -> &'a mut RequestParams {
        params.set("accountID", self.account_id).set("gjp", self.gjp.as_str())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("user_id", &self.user_id)
            .field("username", &self.username)
            .field("gjp", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Login flow
// ---------------------------------------------------------------------------

/// The form body for the login endpoint.
///
/// Carries the plain password: the login call is the only place it
/// leaves the process.
pub fn login_params(credentials: &Credentials) -> RequestParams {
    let mut params = Endpoint::Login.params();
    params
        .set("userName", credentials.username.as_str())
        .set("password", credentials.password.as_str())
        .set("udid", DEVICE_ID);
    params
}

/// Interprets the login endpoint's answer.
///
/// # Errors
/// - [`SessionError::InvalidCredentials`] for `-1`
/// - [`SessionError::Rejected`] for any other negative code
/// - [`SessionError::Protocol`] for an empty or malformed answer
pub fn complete_login(body: &str, credentials: &Credentials) -> Result<Session, SessionError> {
    let login = LoginResult::parse(body).map_err(|err| match err {
        ProtocolError::Sentinel(-1) => SessionError::InvalidCredentials,
        ProtocolError::Sentinel(code) => SessionError::Rejected(code),
        other => SessionError::Protocol(other),
    })?;

    tracing::info!(
        account_id = login.account_id,
        user_id = login.user_id,
        username = %credentials.username,
        "logged in"
    );
    Ok(Session::new(login.account_id, login.user_id, credentials))
}

// =========================================================================
// Tests
// =========================================================================
