//! `Client` and `Account`: the anonymous and logged-in halves of the API.
//!
//! The two types are the two states of the login state machine:
//!
//! ```text
//!   Client<T> ──(login ok)──→ Account<T>
//!       │
//!       └──(login fails)──→ Err(..), caller still holds the Client
//! ```
//!
//! Everything an anonymous player can do lives on [`Client`]. Actions
//! that need an account (posting, liking, messaging) only exist on
//! [`Account`], so there is no way to call them without a session.

use std::sync::Arc;

use gdlink_codec::LevelData;
use gdlink_protocol::{
    Acknowledged, CommentResult, CommentSort, Endpoint, LevelDownload, Message, MessageList,
    PostedComment, RequestParams, SearchResult, SearchType, UserInfo,
};
use gdlink_session::{Credentials, LikeTarget, Session, complete_login, login_params, requests};
use gdlink_transport::{HttpTransport, Transport};

use crate::{ClientConfig, GdlinkError};

/// State shared between a client and every account logged in through it.
struct Inner<T> {
    config: ClientConfig,
    transport: T,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// An anonymous connection to the database API.
///
/// Cheap to clone; clones share the transport.
///
/// ```rust,no_run
/// use gdlink::prelude::*;
///
/// # async fn run() -> Result<(), GdlinkError> {
/// let client = Client::new(ClientConfig::default());
/// let results = client.search_levels("bloodbath", SearchType::Query, 0).await?;
/// for level in &results.levels {
///     println!("{:?}", level.get("2"));
/// }
/// # Ok(())
/// # }
/// ```
pub struct Client<T: Transport = HttpTransport> {
    inner: Arc<Inner<T>>,
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Client<HttpTransport> {
    /// Creates a client that talks HTTP with default reqwest settings.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over a custom transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            inner: Arc::new(Inner { config, transport }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Serializes `params`, posts them to `endpoint`, returns the raw body.
    ///
    /// Sentinels are not interpreted here; the endpoint's result parser
    /// does that.
    pub async fn send(
        &self,
        endpoint: Endpoint,
        params: &RequestParams,
    ) -> Result<String, GdlinkError> {
        let url = self.inner.config.endpoint_url(endpoint);
        let body = params.serialize()?;
        tracing::debug!(%endpoint, bytes = body.len(), "sending request");
        let response = self.inner.transport.post_form(&url, body).await?;
        tracing::trace!(%endpoint, bytes = response.len(), "response received");
        Ok(response)
    }

    /// Logs in, turning this client into an [`Account`].
    ///
    /// # Errors
    /// [`SessionError::InvalidCredentials`](gdlink_session::SessionError::InvalidCredentials)
    /// (wrapped in [`GdlinkError::Session`]) when the service says no;
    /// transport errors are reported as [`GdlinkError::Transport`].
    pub async fn login(&self, credentials: &Credentials) -> Result<Account<T>, GdlinkError> {
        let body = self.send(Endpoint::Login, &login_params(credentials)).await?;
        let session = complete_login(&body, credentials)?;
        Ok(Account {
            client: self.clone(),
            session,
        })
    }

    /// Fetches a player profile by account id.
    pub async fn user_info(&self, account_id: u64) -> Result<UserInfo, GdlinkError> {
        let mut params = Endpoint::UserInfo.params();
        params.set("targetAccountID", account_id);
        let body = self.send(Endpoint::UserInfo, &params).await?;
        Ok(UserInfo::parse(&body)?)
    }

    /// Runs a level search. `page` is zero-based.
    pub async fn search_levels(
        &self,
        query: &str,
        kind: SearchType,
        page: u32,
    ) -> Result<SearchResult, GdlinkError> {
        let mut params = Endpoint::SearchLevels.params();
        params.set("str", query).set("type", kind.code()).set("page", page);
        let body = self.send(Endpoint::SearchLevels, &params).await?;
        Ok(SearchResult::parse(&body)?)
    }

    /// Downloads a full level, including its geometry blob.
    pub async fn download_level(&self, level_id: u64) -> Result<LevelDownload, GdlinkError> {
        let mut params = Endpoint::DownloadLevel.params();
        params.set("levelID", level_id);
        let body = self.send(Endpoint::DownloadLevel, &params).await?;
        Ok(LevelDownload::parse(&body)?)
    }

    /// Lists one page of comments under a level.
    pub async fn level_comments(
        &self,
        level_id: u64,
        sort: CommentSort,
        page: u32,
    ) -> Result<CommentResult, GdlinkError> {
        let mut params = Endpoint::LevelComments.params();
        params
            .set("levelID", level_id)
            .set("page", page)
            .set("mode", sort.code());
        let body = self.send(Endpoint::LevelComments, &params).await?;
        Ok(CommentResult::parse(&body)?)
    }

    /// Decodes a level's geometry, moving large blobs off this task.
    pub async fn decode_geometry(&self, level: &LevelDownload) -> Result<LevelData, GdlinkError> {
        Ok(level.geometry_async(self.inner.config.offload_threshold).await?)
    }
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A logged-in client.
///
/// Holds the [`Session`] issued at login and attaches it to every request.
/// Also gives access to everything the anonymous [`Client`] can do, via
/// [`client`](Self::client).
pub struct Account<T: Transport = HttpTransport> {
    client: Client<T>,
    session: Session,
}

impl<T: Transport> Clone for Account<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            session: self.session.clone(),
        }
    }
}

impl<T: Transport> Account<T> {
    /// Resumes a session without logging in again.
    pub fn from_session(client: Client<T>, session: Session) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &Client<T> {
        &self.client
    }

    /// Posts a comment under a level. Returns the new comment's id.
    pub async fn post_comment(
        &self,
        level_id: u64,
        text: &str,
        percent: u8,
    ) -> Result<PostedComment, GdlinkError> {
        let params = requests::post_comment(&self.session, level_id, text, percent);
        let body = self.client.send(Endpoint::UploadComment, &params).await?;
        Ok(PostedComment::parse(&body)?)
    }

    /// Likes (`like = true`) or dislikes a level or comment.
    pub async fn like(&self, target: LikeTarget, like: bool) -> Result<Acknowledged, GdlinkError> {
        let params = requests::like_item(&self.session, target, like);
        let body = self.client.send(Endpoint::LikeItem, &params).await?;
        Ok(Acknowledged::parse(&body)?)
    }

    /// Sends a private message.
    pub async fn send_message(
        &self,
        to_account_id: u64,
        subject: &str,
        text: &str,
    ) -> Result<Acknowledged, GdlinkError> {
        let params = requests::send_message(&self.session, to_account_id, subject, text);
        let body = self.client.send(Endpoint::UploadMessage, &params).await?;
        Ok(Acknowledged::parse(&body)?)
    }

    /// Lists one page of received (or, with `sent`, sent) messages.
    pub async fn messages(&self, page: u32, sent: bool) -> Result<MessageList, GdlinkError> {
        let params = requests::list_messages(&self.session, page, sent);
        let body = self.client.send(Endpoint::Messages, &params).await?;
        Ok(MessageList::parse(&body)?)
    }

    /// Downloads one message with its body decrypted.
    pub async fn read_message(
        &self,
        message_id: u64,
        is_sender: bool,
    ) -> Result<Message, GdlinkError> {
        let params = requests::read_message(&self.session, message_id, is_sender);
        let body = self.client.send(Endpoint::DownloadMessage, &params).await?;
        Ok(Message::parse(&body)?)
    }
}
