//! One result type per endpoint.
//!
//! Each type has a `parse(body)` constructor that screens the body with
//! [`check_sentinel`] first and then applies that endpoint's grammar.
//! Types keep the raw [`Record`] around so fields without a typed
//! accessor are still reachable.

use gdlink_codec::{
    Base64Flavor, LevelData, Record, cipher, decode_level, decode_level_async, encoding, parse,
};

use crate::secrets::{LEVEL_PASSWORD_KEY, MESSAGE_BODY_KEY};
use crate::{PageInfo, ProtocolError, check_sentinel};

fn decode_text(raw: &str) -> Result<String, ProtocolError> {
    Ok(encoding::decode_text(raw)?)
}

fn required<T: std::str::FromStr>(
    record: &Record,
    key: &str,
    name: &'static str,
) -> Result<T, ProtocolError> {
    record.parse_field(key).ok_or(ProtocolError::MissingField(name))
}

fn page_section(section: Option<&str>) -> Result<PageInfo, ProtocolError> {
    section
        .ok_or_else(|| ProtocolError::Malformed("missing page section".into()))?
        .parse()
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// `accountID,userID` from the login endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginResult {
    pub account_id: u64,
    pub user_id: u64,
}

impl LoginResult {
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let body = check_sentinel(body)?;
        let (account, user) = body
            .split_once(',')
            .ok_or_else(|| ProtocolError::Malformed(format!("login answer {body:?}")))?;
        let id = |raw: &str| {
            raw.trim()
                .parse::<u64>()
                .map_err(|_| ProtocolError::Malformed(format!("login answer {body:?}")))
        };
        Ok(Self {
            account_id: id(account)?,
            user_id: id(user)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A player profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub record: Record,
}

impl UserInfo {
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let body = check_sentinel(body)?;
        Ok(Self {
            record: parse(body, ":"),
        })
    }

    pub fn username(&self) -> Option<&str> {
        self.record.get("1")
    }

    pub fn user_id(&self) -> Option<u64> {
        self.record.parse_field("2")
    }

    pub fn account_id(&self) -> Option<u64> {
        self.record.parse_field("16")
    }

    pub fn stars(&self) -> Option<u64> {
        self.record.parse_field("3")
    }
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// A creator entry from a search response (`userID:name:accountID`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub user_id: u64,
    pub name: String,
    pub account_id: u64,
}

impl Creator {
    fn parse(entry: &str) -> Option<Self> {
        let mut fields = entry.split(':');
        let user_id = fields.next()?.parse().ok()?;
        let name = fields.next()?.to_owned();
        let account_id = fields.next()?.parse().ok()?;
        Some(Self {
            user_id,
            name,
            account_id,
        })
    }
}

/// One page of level search results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Level records, `:`-keyed.
    pub levels: Vec<Record>,
    pub creators: Vec<Creator>,
    /// Custom song records, `~|~`-keyed.
    pub songs: Vec<Record>,
    pub page: PageInfo,
}

impl SearchResult {
    /// Parses `levels#creators#songs#page[#hash]`.
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let body = check_sentinel(body)?;
        let mut sections = body.split('#');

        let levels = sections
            .next()
            .unwrap_or_default()
            .split('|')
            .filter(|level| !level.is_empty())
            .map(|level| parse(level, ":"))
            .collect();

        let creators = sections
            .next()
            .unwrap_or_default()
            .split('|')
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| {
                let creator = Creator::parse(entry);
                if creator.is_none() {
                    tracing::debug!(entry, "skipping unparseable creator");
                }
                creator
            })
            .collect();

        let songs = sections
            .next()
            .unwrap_or_default()
            .split("~:~")
            .filter(|song| !song.is_empty())
            .map(|song| parse(song, "~|~"))
            .collect();

        let page = page_section(sections.next())?;

        Ok(Self {
            levels,
            creators,
            songs,
            page,
        })
    }

    /// Looks up the creator of `level` by its player id (key `6`).
    pub fn creator_of(&self, level: &Record) -> Option<&Creator> {
        let user_id: u64 = level.parse_field("6")?;
        self.creators.iter().find(|c| c.user_id == user_id)
    }
}

/// Whether, and how, a level may be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Copyable {
    /// Not copyable.
    No,
    /// Free to copy.
    Free,
    /// Copyable with this password.
    Password(String),
}

/// A full level record from the download endpoint.
///
/// Search results that carry level data (key `4`) can be wrapped with
/// `LevelDownload::from(record)` to reach the same accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDownload {
    pub record: Record,
}

impl From<Record> for LevelDownload {
    fn from(record: Record) -> Self {
        Self { record }
    }
}

impl LevelDownload {
    /// Parses the level record, ignoring the trailing `#hash` sections.
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let body = check_sentinel(body)?;
        let level = body.split('#').next().unwrap_or_default();
        Ok(Self {
            record: parse(level, ":"),
        })
    }

    pub fn level_id(&self) -> Result<u64, ProtocolError> {
        required(&self.record, "1", "levelID")
    }

    pub fn name(&self) -> Option<&str> {
        self.record.get("2")
    }

    pub fn description(&self) -> Result<Option<String>, ProtocolError> {
        match self.record.get("3") {
            Some(raw) if !raw.is_empty() => decode_text(raw).map(Some),
            _ => Ok(None),
        }
    }

    /// The compressed geometry blob (key `4`).
    pub fn level_data(&self) -> Result<&str, ProtocolError> {
        self.record
            .get("4")
            .filter(|data| !data.is_empty())
            .ok_or(ProtocolError::MissingField("levelString"))
    }

    /// Decrypts the copy password (key `27`).
    ///
    /// The decrypted value is `0` for no copy, `1` for free copy, or `1`
    /// followed by the password.
    pub fn password(&self) -> Result<Copyable, ProtocolError> {
        let raw = match self.record.get("27") {
            None | Some("" | "0") => return Ok(Copyable::No),
            Some(raw) => raw,
        };
        let plain = cipher::decrypt_text(raw, LEVEL_PASSWORD_KEY)?;
        Ok(match plain.as_str() {
            "0" => Copyable::No,
            "1" => Copyable::Free,
            other => Copyable::Password(other.strip_prefix('1').unwrap_or(other).to_owned()),
        })
    }

    /// Decodes the geometry blob on the calling thread.
    pub fn geometry(&self) -> Result<LevelData, ProtocolError> {
        Ok(decode_level(self.level_data()?, Base64Flavor::Service)?)
    }

    /// [`geometry`](Self::geometry), inflating large blobs on the blocking
    /// pool.
    pub async fn geometry_async(
        &self,
        offload_threshold: usize,
    ) -> Result<LevelData, ProtocolError> {
        let data = self.level_data()?;
        Ok(decode_level_async(data, Base64Flavor::Service, offload_threshold).await?)
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// One comment with its author record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    /// The `~` comment record.
    pub comment: Record,
    /// The `~` author record.
    pub author: Record,
}

impl CommentEntry {
    /// The comment text, decoded from Base64.
    pub fn text(&self) -> Result<String, ProtocolError> {
        decode_text(self.comment.get("2").unwrap_or_default())
    }

    pub fn comment_id(&self) -> Option<u64> {
        self.comment.parse_field("6")
    }

    /// Likes minus dislikes; can be negative.
    pub fn likes(&self) -> Option<i64> {
        self.comment.parse_field("4")
    }

    pub fn percent(&self) -> Option<u8> {
        self.comment.parse_field("10")
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author.get("1")
    }

    pub fn author_account_id(&self) -> Option<u64> {
        self.author.parse_field("16")
    }
}

/// One page of level comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentResult {
    pub comments: Vec<CommentEntry>,
    pub page: PageInfo,
}

impl CommentResult {
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let body = check_sentinel(body)?;
        let (entries, page) = body
            .rsplit_once('#')
            .ok_or_else(|| ProtocolError::Malformed("missing page section".into()))?;
        let comments = entries
            .split('|')
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (comment, author) = entry.split_once(':').unwrap_or((entry, ""));
                CommentEntry {
                    comment: parse(comment, "~"),
                    author: parse(author, "~"),
                }
            })
            .collect();
        Ok(Self {
            comments,
            page: page.parse()?,
        })
    }
}

/// The id the service assigned to a freshly posted comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostedComment {
    pub comment_id: u64,
}

impl PostedComment {
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let body = check_sentinel(body)?;
        let comment_id = body
            .parse()
            .map_err(|_| ProtocolError::Malformed(format!("comment upload answer {body:?}")))?;
        Ok(Self { comment_id })
    }
}

/// A plain `1` success answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledged;

impl Acknowledged {
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        check_sentinel(body)?;
        Ok(Self)
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// A message header from the inbox or outbox listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSummary {
    pub record: Record,
}

impl MessageSummary {
    pub fn message_id(&self) -> Result<u64, ProtocolError> {
        required(&self.record, "1", "messageID")
    }

    /// Account id of the other party.
    pub fn account_id(&self) -> Option<u64> {
        self.record.parse_field("2")
    }

    /// Username of the other party.
    pub fn username(&self) -> Option<&str> {
        self.record.get("6")
    }

    pub fn subject(&self) -> Result<String, ProtocolError> {
        decode_text(self.record.get("4").unwrap_or_default())
    }

    pub fn is_read(&self) -> bool {
        self.record.get("8") == Some("1")
    }

    pub fn age(&self) -> Option<&str> {
        self.record.get("7")
    }
}

/// One page of messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageList {
    pub messages: Vec<MessageSummary>,
    pub page: PageInfo,
}

impl MessageList {
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let body = check_sentinel(body)?;
        let (entries, page) = body
            .rsplit_once('#')
            .ok_or_else(|| ProtocolError::Malformed("missing page section".into()))?;
        let messages = entries
            .split('|')
            .filter(|entry| !entry.is_empty())
            .map(|entry| MessageSummary {
                record: parse(entry, ":"),
            })
            .collect();
        Ok(Self {
            messages,
            page: page.parse()?,
        })
    }
}

/// A full message with its decrypted body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub summary: MessageSummary,
    pub body: String,
}

impl Message {
    pub fn parse(body: &str) -> Result<Self, ProtocolError> {
        let body = check_sentinel(body)?;
        let record = parse(body, ":");
        let encrypted = record
            .get("5")
            .ok_or(ProtocolError::MissingField("body"))?;
        Ok(Self {
            body: cipher::decrypt_text(encrypted, MESSAGE_BODY_KEY)?,
            summary: MessageSummary { record },
        })
    }
}
