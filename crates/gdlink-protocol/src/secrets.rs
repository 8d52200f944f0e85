//! Fixed values lifted from the official client.
//!
//! None of these are configurable: the service checks them against its
//! own copies, so changing one just gets every request rejected.

use std::fmt;
use std::str::FromStr;

use gdlink_codec::checksum;

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Shared secrets
// ---------------------------------------------------------------------------

/// Which shared secret an endpoint expects in its `secret` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretClass {
    /// Regular database endpoints (levels, users, comments, …).
    Db,
    /// Account-server endpoints (login, registration, backup).
    Account,
    /// Moderator actions.
    Moderator,
}

/// The secret table, one row per class, in discriminant order.
static SECRETS: [(SecretClass, &str, &str); 3] = [
    (SecretClass::Db, "db", "Wmfd2893gb7"),
    (SecretClass::Account, "account", "Wmfv3899gc9"),
    (SecretClass::Moderator, "moderator", "Wmfp3879gc3"),
];

impl SecretClass {
    fn row(self) -> &'static (SecretClass, &'static str, &'static str) {
        &SECRETS[self as usize]
    }

    /// The literal secret sent on the wire.
    pub fn value(self) -> &'static str {
        self.row().2
    }

    /// The class name used to look the secret up.
    pub fn name(self) -> &'static str {
        self.row().1
    }
}

impl fmt::Display for SecretClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SecretClass {
    type Err = ProtocolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SECRETS
            .iter()
            .find(|(_, row_name, _)| *row_name == name)
            .map(|(class, _, _)| *class)
            .ok_or_else(|| ProtocolError::UnknownSecretClass(name.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// XOR keys
// ---------------------------------------------------------------------------

/// Key for the obfuscated password token (`gjp`).
pub const ACCOUNT_PASSWORD_KEY: &str = "37526";

/// Key for private message bodies.
pub const MESSAGE_BODY_KEY: &str = "14251";

/// Key for level copy passwords.
pub const LEVEL_PASSWORD_KEY: &str = "26364";

/// Device identifier sent where the service wants a `udid`.
pub const DEVICE_ID: &str = "S15212718371240313241627151326316";

// ---------------------------------------------------------------------------
// Checksums
// ---------------------------------------------------------------------------

/// Salt and XOR key for one endpoint's `chk` field.
///
/// The field list (and its order) is part of the contract too, but it
/// depends on request values, so it lives with the code that builds each
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumRecipe {
    pub salt: &'static str,
    pub key: &'static str,
}

impl ChecksumRecipe {
    /// Runs the recipe over `fields`, in order.
    pub fn compute<I, S>(&self, fields: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        checksum::checksum(fields, self.salt, self.key)
    }
}

/// Level comment upload:
/// `userName, comment, levelID, percent, "0"`.
pub const COMMENT_CHECKSUM: ChecksumRecipe = ChecksumRecipe {
    salt: "xPT6iUrtws0J",
    key: "29481",
};

/// Like / dislike:
/// `special, itemID, like, type, rs, accountID, udid, uuid`.
pub const LIKE_CHECKSUM: ChecksumRecipe = ChecksumRecipe {
    salt: "ysg6pUrtjn0J",
    key: "58281",
};
