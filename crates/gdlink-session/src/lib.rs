//! Account sessions for gdlink.
//!
//! This crate handles the one stateful part of talking to the service:
//!
//! 1. **Login** — turning [`Credentials`] into a login request
//!    ([`login_params`]) and the answer into a [`Session`]
//!    ([`complete_login`])
//! 2. **Authenticated requests** — attaching the session to every
//!    request that needs one, plus the per-endpoint checksum for the
//!    mutating ones ([`requests`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Client layer (above)  ← Account<T> holds a Session and posts these params
//!     ↕
//! Session layer (this crate)  ← identity + request signing
//!     ↕
//! Protocol layer (below)  ← RequestParams, Endpoint, secrets, LoginResult
//! ```
//!
//! Nothing here performs I/O: the caller posts the params and hands the
//! response body back.

mod credentials;
mod error;
pub mod requests;
mod session;

pub use credentials::Credentials;
pub use error::SessionError;
pub use requests::LikeTarget;
pub use session::{Session, complete_login, login_params};
