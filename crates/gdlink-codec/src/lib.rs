//! Wire-level codec for gdlink.
//!
//! The game service speaks an odd dialect: request tokens are XOR'd and
//! Base64'd, integrity values are salted SHA-1 digests pushed through the
//! same cipher, and responses are flat delimited strings, sometimes with a
//! compressed blob tucked inside one of the fields. This crate handles all
//! of that and nothing else:
//!
//! - **Encoding** ([`encoding`]) — the service Base64 variant
//!   (`+` → `-`, `/` → `_`) and the platform-standard one.
//! - **Cipher** ([`cipher`]) — the repeating-key XOR used for passwords,
//!   message bodies and checksums.
//! - **Checksum** ([`checksum`]) — salted SHA-1 integrity tokens.
//! - **Decompression** ([`decompress`]) — gzip / zlib / raw-deflate
//!   auto-detection.
//! - **Records** ([`Record`], [`NumericRecord`]) — the delimited
//!   key/value mini-grammar.
//! - **Level data** ([`LevelData`]) — the decoded geometry blob.
//!
//! # Architecture
//!
//! Everything here is a pure function over bytes or strings. There is no
//! I/O and no knowledge of endpoints: the protocol crate decides which key
//! or salt applies where, this crate just applies it.
//!
//! ```text
//! Transport (text) → Codec (bytes, records) → Protocol (typed results)
//! ```

// ---------------------------------------------------------------------------
// Module declarations
// ---------------------------------------------------------------------------

pub mod checksum;
pub mod cipher;
pub mod decompress;
pub mod encoding;
mod error;
pub mod latin1;
mod level;
mod record;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use decompress::Framing;
pub use encoding::Base64Flavor;
pub use error::CodecError;
pub use level::{
    COLOR_TABLE_KEY, LevelData, decode_level, decode_level_async, parse_level_string,
};
pub use record::{NumericRecord, PropertyValue, Record, parse, parse_numeric};
