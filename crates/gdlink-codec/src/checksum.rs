//! Salted SHA-1 integrity tokens.
//!
//! Mutating endpoints want a `chk` field proving the request came from a
//! real client. The recipe is always the same:
//!
//! ```text
//! chk = encrypt( sha1_hex( fields.join("") + salt ), key )
//! ```
//!
//! Only the fields, their order, the salt and the key vary per endpoint.
//! Those are fixed contracts owned by the protocol crate; this module just
//! does the arithmetic.

use sha1::{Digest, Sha1};

use crate::cipher;

/// Lowercase hex SHA-1 of the concatenation of `parts`.
pub fn sha1_hex<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part.as_ref());
    }
    hex::encode(hasher.finalize())
}

/// Computes a checksum over `fields` (in order) plus `salt`, obfuscated
/// with `key`.
///
/// ```rust
/// use gdlink_codec::checksum::checksum;
///
/// let a = checksum(["128", "1"], "salt", "58281");
/// let b = checksum(["128", "1"], "salt", "58281");
/// assert_eq!(a, b);
/// ```
pub fn checksum<I, S>(fields: I, salt: &str, key: impl AsRef<[u8]>) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let digest = sha1_hex(
        fields
            .into_iter()
            .map(|field| field.as_ref().to_owned())
            .chain(std::iter::once(salt.to_owned())),
    );
    cipher::encrypt(digest, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &str = "xPT6iUrtws0J";
    const KEY: &str = "29481";

    fn fields() -> Vec<&'static str> {
        vec!["Robtop", "bmljZSBsZXZlbA==", "128", "0", "0"]
    }

    #[test]
    fn test_sha1_hex_known_vector() {
        assert_eq!(
            sha1_hex(["abc"]),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn test_sha1_hex_concatenates_parts() {
        assert_eq!(sha1_hex(["a", "bc"]), sha1_hex(["abc"]));
    }

    #[test]
    fn test_checksum_comment_fixture() {
        // Pinned by fixture: captured from the comment-upload recipe,
        // not derivable from first principles.
        assert_eq!(
            checksum(fields(), SALT, KEY),
            "AVtSWVMCD1IICAQABw4GBloNXAYLAQ0BVAIKAgoCCwEDClMHC1JaUg=="
        );
    }

    #[test]
    fn test_checksum_is_deterministic() {
        assert_eq!(checksum(fields(), SALT, KEY), checksum(fields(), SALT, KEY));
    }

    #[test]
    fn test_checksum_changes_with_any_field() {
        let base = checksum(fields(), SALT, KEY);
        for i in 0..fields().len() {
            let mut changed = fields();
            changed[i] = "x";
            assert_ne!(checksum(changed, SALT, KEY), base, "field {i}");
        }
    }

    #[test]
    fn test_checksum_changes_with_salt_and_key() {
        let base = checksum(fields(), SALT, KEY);
        assert_ne!(checksum(fields(), "other-salt", KEY), base);
        assert_ne!(checksum(fields(), SALT, "58281"), base);
    }

    #[test]
    fn test_checksum_decrypts_to_hex_digest() {
        let chk = checksum(fields(), SALT, KEY);
        let digest = cipher::decrypt_text(&chk, KEY).unwrap();
        assert_eq!(digest, "3bfab06f09693674c9d79899e036239872b52fbc");
    }
}
