//! # gdlink
//!
//! Typed async client for the Geometry Dash database API.
//!
//! The service speaks form-encoded POSTs and answers in delimited text
//! with its own obfuscation layered on top. gdlink hides all of that
//! behind two types:
//!
//! - [`Client`] for everything an anonymous player can do (profiles,
//!   level search and download, comments)
//! - [`Account`] for a logged-in player (posting, liking, messages)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gdlink::prelude::*;
//!
//! # async fn run() -> Result<(), GdlinkError> {
//! let client = Client::new(ClientConfig::default());
//!
//! let level = client.download_level(128).await?;
//! let geometry = client.decode_geometry(&level).await?;
//! println!("{} objects", geometry.objects.len());
//!
//! let account = client.login(&Credentials::new("player", "secret")).await?;
//! account.post_comment(128, "nice level", 100).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! | crate              | role                                            |
//! |--------------------|-------------------------------------------------|
//! | `gdlink-codec`     | Base64, XOR, checksums, inflate, record parsing |
//! | `gdlink-protocol`  | request params, secrets, endpoint table, result types |
//! | `gdlink-session`   | login flow and signed requests                  |
//! | `gdlink-transport` | the `Transport` trait and the HTTP implementation |

mod client;
mod config;
mod error;

pub use client::{Account, Client};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::GdlinkError;

pub use gdlink_codec::{LevelData, NumericRecord, PropertyValue, Record};
pub use gdlink_protocol::{
    Acknowledged, CommentEntry, CommentResult, CommentSort, Copyable, Creator, Endpoint,
    LevelDownload, Message, MessageList, MessageSummary, PageInfo, PostedComment, ProtocolError,
    SearchResult, SearchType, UserInfo,
};
pub use gdlink_session::{Credentials, LikeTarget, Session, SessionError};
pub use gdlink_transport::{HttpTransport, Transport, TransportError};

/// Convenience re-exports for the common case.
pub mod prelude {
    pub use crate::{
        Account, Client, ClientConfig, CommentSort, Credentials, GdlinkError, LikeTarget,
        SearchType,
    };
}
