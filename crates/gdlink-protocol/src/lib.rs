//! Request/response protocol for gdlink.
//!
//! This crate knows *what* the service expects, on top of the codec's
//! *how*:
//!
//! - **Parameters** ([`RequestParams`]) — the ordered form body every
//!   request is built from, pre-seeded with protocol version fields.
//! - **Secrets** ([`SecretClass`], [`secrets`]) — the fixed shared secrets,
//!   XOR keys and checksum recipes lifted from the official client.
//! - **Endpoints** ([`Endpoint`]) — path and secret class per operation.
//! - **Responses** ([`check_sentinel`] and the result types) — sentinel
//!   detection and one parser per endpoint, each returning exactly one
//!   result type.
//! - **Errors** ([`ProtocolError`]).
//!
//! # Architecture
//!
//! ```text
//! caller → RequestParams → (transport) → body → check_sentinel → XxxResult
//! ```
//!
//! Nothing here performs I/O.

mod endpoint;
mod error;
mod params;
mod response;
mod results;
pub mod secrets;

pub use endpoint::{CommentSort, Endpoint, SearchType};
pub use error::ProtocolError;
pub use params::{DEFAULT_FIELDS, ParamValue, RequestParams, SECRET_FIELD};
pub use response::{PageInfo, check_sentinel};
pub use results::{
    Acknowledged, CommentEntry, CommentResult, Copyable, Creator, LevelDownload, LoginResult,
    Message, MessageList, MessageSummary, PostedComment, SearchResult, UserInfo,
};
pub use secrets::SecretClass;
