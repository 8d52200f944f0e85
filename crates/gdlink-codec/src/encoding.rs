//! Base64 flavors used on the wire.
//!
//! The service's own variant is the URL-safe alphabet: standard Base64
//! with `+` replaced by `-` and `/` replaced by `_`. Encoding always emits
//! `=` padding (the official client does); decoding accepts input with or
//! without it, because level blobs frequently arrive unpadded.
//!
//! [`encode`] and [`decode`] work on raw bytes: a byte `0xFB` goes in and
//! comes back out as `0xFB`. Human text (comments, subjects) is UTF-8 on
//! both sides; [`decode_text`] is the inverse of `encode(text)`.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::CodecError;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const SERVICE_ENGINE: GeneralPurpose =
    GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

const STANDARD_ENGINE: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Which Base64 alphabet a payload uses.
///
/// Most endpoints use [`Base64Flavor::Service`]. A few sources (saved
/// data exported by other tools, some legacy fields) use the
/// platform-standard alphabet, so callers have to say which one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base64Flavor {
    /// `-` and `_` in place of `+` and `/`.
    #[default]
    Service,
    /// RFC 4648 standard alphabet.
    Standard,
}

impl Base64Flavor {
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::Service => &SERVICE_ENGINE,
            Self::Standard => &STANDARD_ENGINE,
        }
    }

    /// Encodes bytes with this flavor's alphabet (padded).
    pub fn encode(self, data: impl AsRef<[u8]>) -> String {
        self.engine().encode(data)
    }

    /// Decodes text with this flavor's alphabet.
    ///
    /// Surrounding whitespace is ignored; padding is optional.
    ///
    /// # Errors
    /// Returns [`CodecError::Base64`] on characters outside the alphabet
    /// or an impossible length.
    pub fn decode(self, data: &str) -> Result<Vec<u8>, CodecError> {
        Ok(self.engine().decode(data.trim())?)
    }
}

/// Encodes bytes with the service alphabet.
pub fn encode(data: impl AsRef<[u8]>) -> String {
    Base64Flavor::Service.encode(data)
}

/// Decodes service-alphabet Base64.
///
/// # Errors
/// Returns [`CodecError::Base64`] if `data` is not well-formed.
pub fn decode(data: &str) -> Result<Vec<u8>, CodecError> {
    Base64Flavor::Service.decode(data)
}

/// Decodes service-alphabet Base64 holding UTF-8 text.
///
/// Invalid UTF-8 becomes U+FFFD rather than an error.
///
/// # Errors
/// Returns [`CodecError::Base64`] if `data` is not well-formed.
pub fn decode_text(data: &str) -> Result<String, CodecError> {
    decode(data).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
