//! Repeating-key XOR, optionally wrapped in service Base64.
//!
//! `output[i] = input[i] ^ key[i % key.len()]`. Applying it twice with the
//! same key gives the input back, which is the whole point: the service
//! uses it for reversible obfuscation (account passwords, message bodies,
//! level passwords) and as the last step of every checksum.
//!
//! Text goes in and comes out as UTF-8: `encrypt("café", k)` XORs the
//! UTF-8 bytes, and [`decrypt_text`] reads them back as UTF-8. Use
//! [`decrypt`] when the plaintext is arbitrary bytes.

use crate::{CodecError, encoding};

/// XORs `data` against `key`, repeating the key as needed.
///
/// An empty key leaves the data unchanged rather than dividing by zero.
pub fn xor(data: &[u8], key: impl AsRef<[u8]>) -> Vec<u8> {
    let key = key.as_ref();
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(byte, k)| byte ^ k)
        .collect()
}

/// `encode(xor(data, key))`.
///
/// ```rust
/// use gdlink_codec::cipher;
///
/// // The account-password key turns "hunter2" into this session token.
/// assert_eq!(cipher::encrypt("hunter2", "37526"), "W0JbRlNBBQ==");
/// ```
pub fn encrypt(data: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> String {
    encoding::encode(xor(data.as_ref(), key))
}

/// `xor(decode(data), key)`.
///
/// # Errors
/// Returns [`CodecError::Base64`] if `data` is not service Base64. Unlike
/// the official client, which happily XORs whatever garbage the decoder
/// produced, malformed input is reported here.
pub fn decrypt(data: &str, key: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    Ok(xor(&encoding::decode(data)?, key))
}

/// [`decrypt`], reading the plaintext as UTF-8.
///
/// Inverts `encrypt(text, key)` exactly for any `&str`. Bytes that aren't
/// valid UTF-8 (a wrong key, or a token not made from text) become
/// U+FFFD.
///
/// # Errors
/// Same as [`decrypt`].
pub fn decrypt_text(data: &str, key: impl AsRef<[u8]>) -> Result<String, CodecError> {
    decrypt(data, key).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xor_is_involution() {
        let once = xor(b"hello world", "key");
        assert_ne!(once, b"hello world");
        assert_eq!(xor(&once, "key"), b"hello world");
    }

    #[test]
    fn test_xor_key_wraps_around() {
        // 'a' ^ '1' = 0x50, 'b' ^ '2' = 0x50, 'c' ^ '1' = 0x52
        assert_eq!(xor(b"abc", "12"), vec![0x50, 0x50, 0x52]);
    }

    #[test]
    fn test_xor_empty_key_is_identity() {
        assert_eq!(xor(b"data", ""), b"data");
    }

    #[test]
    fn test_encrypt_account_password_fixture() {
        assert_eq!(encrypt("hunter2", "37526"), "W0JbRlNBBQ==");
        assert_eq!(encrypt("password123", "37526"), "Q1ZGQUFcRVEDBAA=");
    }

    #[test]
    fn test_decrypt_reverses_encrypt() {
        assert_eq!(decrypt("W0JbRlNBBQ==", "37526").unwrap(), b"hunter2");
    }

    #[test]
    fn test_decrypt_text_message_body_fixture() {
        let body = decrypt_text("QlFXFUheQRJBWVRGVw==", "14251").unwrap();
        assert_eq!(body, "see you there");
    }

    #[test]
    fn test_decrypt_text_non_ascii_round_trips() {
        let token = encrypt("café", "37526");
        assert_eq!(token, "UFZT8Z8=");
        assert_eq!(decrypt_text(&token, "37526").unwrap(), "café");
    }

    #[test]
    fn test_decrypt_malformed_returns_error() {
        assert!(decrypt("###", "37526").is_err());
    }
}
