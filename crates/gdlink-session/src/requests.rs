//! Form bodies for endpoints that need a logged-in account.
//!
//! Each builder starts from the endpoint's authorized params, attaches the
//! session, and, for comment and like requests, computes the `chk`
//! checksum over that endpoint's fields in the order the service expects.

use gdlink_codec::{cipher, encoding};
use gdlink_protocol::secrets::{COMMENT_CHECKSUM, DEVICE_ID, LIKE_CHECKSUM, MESSAGE_BODY_KEY};
use gdlink_protocol::{Endpoint, RequestParams};
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::Session;

/// Length of the random `rs` nonce on like requests.
const NONCE_LEN: usize = 10;

/// What a like or dislike is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Level(u64),
    /// A comment under a level.
    LevelComment { comment_id: u64, level_id: u64 },
    /// A comment on an account profile.
    AccountComment { comment_id: u64, account_id: u64 },
}

impl LikeTarget {
    fn item_id(self) -> u64 {
        match self {
            Self::Level(id) => id,
            Self::LevelComment { comment_id, .. } | Self::AccountComment { comment_id, .. } => {
                comment_id
            }
        }
    }

    fn type_code(self) -> u8 {
        match self {
            Self::Level(_) => 1,
            Self::LevelComment { .. } => 2,
            Self::AccountComment { .. } => 3,
        }
    }

    fn special(self) -> u64 {
        match self {
            Self::Level(_) => 0,
            Self::LevelComment { level_id, .. } => level_id,
            Self::AccountComment { account_id, .. } => account_id,
        }
    }
}

/// Generates the random alphanumeric `rs` nonce.
pub fn nonce() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// Posts `text` under level `level_id`, claiming `percent` progress.
pub fn post_comment(session: &Session, level_id: u64, text: &str, percent: u8) -> RequestParams {
    let comment = encoding::encode(text);
    let level = level_id.to_string();
    let progress = percent.to_string();
    let chk = COMMENT_CHECKSUM.compute([
        session.username(),
        comment.as_str(),
        level.as_str(),
        progress.as_str(),
        "0",
    ]);

    let mut params = Endpoint::UploadComment.params();
    session.attach(&mut params);
    params
        .set("userName", session.username())
        .set("comment", comment)
        .set("levelID", level_id)
        .set("percent", percent)
        .set("chk", chk);
    params
}

/// Likes (`like = true`) or dislikes `target`, with a fresh nonce.
pub fn like_item(session: &Session, target: LikeTarget, like: bool) -> RequestParams {
    like_item_with_nonce(session, target, like, DEVICE_ID, &nonce())
}

/// [`like_item`] with an explicit device id and nonce.
pub fn like_item_with_nonce(
    session: &Session,
    target: LikeTarget,
    like: bool,
    udid: &str,
    rs: &str,
) -> RequestParams {
    let item = target.item_id().to_string();
    let kind = target.type_code().to_string();
    let special = target.special().to_string();
    let account = session.account_id().to_string();
    let uuid = session.user_id().to_string();
    let like_flag = if like { "1" } else { "0" };
    let chk = LIKE_CHECKSUM.compute([
        special.as_str(),
        item.as_str(),
        like_flag,
        kind.as_str(),
        rs,
        account.as_str(),
        udid,
        uuid.as_str(),
    ]);

    let mut params = Endpoint::LikeItem.params();
    params
        .set("itemID", item)
        .set("like", like)
        .set("type", kind)
        .set("special", special)
        .set("rs", rs)
        .set("chk", chk);
    session.attach(&mut params);
    params.set("udid", udid).set("uuid", uuid);
    params
}

/// Sends a private message to `to_account_id`.
pub fn send_message(
    session: &Session,
    to_account_id: u64,
    subject: &str,
    body: &str,
) -> RequestParams {
    let mut params = Endpoint::UploadMessage.params();
    session.attach(&mut params);
    params
        .set("toAccountID", to_account_id)
        .set("subject", encoding::encode(subject))
        .set("body", cipher::encrypt(body, MESSAGE_BODY_KEY));
    params
}

/// Lists one page of the inbox, or of sent messages.
pub fn list_messages(session: &Session, page: u32, sent: bool) -> RequestParams {
    let mut params = Endpoint::Messages.params();
    session.attach(&mut params);
    params.set("page", page).set("getSent", sent);
    params
}

/// Downloads one message. `is_sender` must match the box it came from.
pub fn read_message(session: &Session, message_id: u64, is_sender: bool) -> RequestParams {
    let mut params = Endpoint::DownloadMessage.params();
    session.attach(&mut params);
    params.set("messageID", message_id).set("isSender", is_sender);
    params
}
