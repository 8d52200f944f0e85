//! The endpoint table: where each operation lives and which secret it
//! wants.

use std::fmt;

use crate::{RequestParams, SecretClass};

/// Every remote operation this client knows how to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    UserInfo,
    SearchLevels,
    DownloadLevel,
    LevelComments,
    UploadComment,
    LikeItem,
    UploadMessage,
    Messages,
    DownloadMessage,
}

impl Endpoint {
    /// Path relative to the database base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "accounts/loginGJAccount.php",
            Self::UserInfo => "getGJUserInfo20.php",
            Self::SearchLevels => "getGJLevels21.php",
            Self::DownloadLevel => "downloadGJLevel22.php",
            Self::LevelComments => "getGJComments21.php",
            Self::UploadComment => "uploadGJComment21.php",
            Self::LikeItem => "likeGJItem211.php",
            Self::UploadMessage => "uploadGJMessage20.php",
            Self::Messages => "getGJMessages20.php",
            Self::DownloadMessage => "downloadGJMessage20.php",
        }
    }

    /// The shared secret this endpoint checks.
    pub const fn secret_class(self) -> SecretClass {
        match self {
            Self::Login => SecretClass::Account,
            _ => SecretClass::Db,
        }
    }

    /// A fresh, authorized parameter set for this endpoint.
    pub fn params(self) -> RequestParams {
        let mut params = RequestParams::new();
        params.authorize(self.secret_class());
        params
    }
}

/// The `type` field of a level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// Free-text search on `str`.
    #[default]
    Query,
    MostDownloaded,
    MostLiked,
    Trending,
    Recent,
    /// Levels by the player whose user id is in `str`.
    ByUser,
    Featured,
    Magic,
    Awarded,
    HallOfFame,
}

impl SearchType {
    pub const fn code(self) -> u8 {
        match self {
            Self::Query => 0,
            Self::MostDownloaded => 1,
            Self::MostLiked => 2,
            Self::Trending => 3,
            Self::Recent => 4,
            Self::ByUser => 5,
            Self::Featured => 6,
            Self::Magic => 7,
            Self::Awarded => 11,
            Self::HallOfFame => 16,
        }
    }
}

/// The `mode` field of a comment listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommentSort {
    #[default]
    Recent,
    MostLiked,
}

impl CommentSort {
    pub const fn code(self) -> u8 {
        match self {
            Self::Recent => 0,
            Self::MostLiked => 1,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
