//! Byte-preserving string conversion.
//!
//! Decompressed payloads are further delimited text, but nothing
//! guarantees they are valid UTF-8. Mapping each byte to the char with
//! the same code point keeps every byte recoverable and never fails.
//!
//! This is for byte payloads only. It is not the inverse of
//! `str::as_bytes`: text goes through [`encoding::decode_text`] or
//! [`cipher::decrypt_text`] instead.
//!
//! [`encoding::decode_text`]: crate::encoding::decode_text
//! [`cipher::decrypt_text`]: crate::cipher::decrypt_text

/// Maps each byte to the `char` with the same code point (U+0000..=U+00FF).
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
