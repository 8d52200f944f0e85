//! Level geometry: the compressed blob inside a level record.
//!
//! Decoded, a level is one long `;`-separated string. The first chunk is
//! the level header (a `,` record with keys like `kA13` and `kS38`), every
//! chunk after it is one object:
//!
//! ```text
//! kS38,<colors>,kA13,0,…;1,1,2,15,3,15;1,8,2,45,3,15;
//! └──── header ────────┘ └─ object ──┘ └─ object ──┘
//! ```
//!
//! The header's `kS38` value is itself a `|`-separated list of color
//! channels, each an `_` record (`6` = channel id, `1`/`2`/`3` = RGB).

use crate::{
    Base64Flavor, CodecError, NumericRecord, Record, decompress, latin1, parse, parse_numeric,
};

/// Header key holding the color-channel table.
pub const COLOR_TABLE_KEY: &str = "kS38";

/// A decoded level: header plus object records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelData {
    /// Level-wide settings (`kA*`, `kS*` keys).
    pub header: Record,
    /// One record per placed object, in file order.
    pub objects: Vec<NumericRecord>,
}

impl LevelData {
    /// Parses the color table out of the header.
    ///
    /// Empty when the header has no `kS38` key (very old levels store
    /// colors under separate `kS1`…`kS20` keys instead).
    pub fn color_channels(&self) -> Vec<Record> {
        self.header
            .get(COLOR_TABLE_KEY)
            .map(|table| {
                table
                    .split('|')
                    .filter(|channel| !channel.is_empty())
                    .map(|channel| parse(channel, "_"))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Parses an already-decompressed level string.
///
/// Empty object chunks (the trailing `;`) are skipped.
pub fn parse_level_string(level: &str) -> LevelData {
    let mut chunks = level.split(';');
    let header = chunks
        .next()
        .map(|h| parse(h, ","))
        .unwrap_or_default();
    let objects = chunks
        .filter(|chunk| !chunk.is_empty())
        .map(parse_numeric)
        .collect();
    LevelData { header, objects }
}

/// Base64-decodes, inflates and parses a level blob.
///
/// # Errors
/// - [`CodecError::Base64`] if the outer layer isn't valid for `flavor`
/// - [`CodecError::Decompress`] if the inflated stream is corrupt
pub fn decode_level(encoded: &str, flavor: Base64Flavor) -> Result<LevelData, CodecError> {
    let compressed = flavor.decode(encoded)?;
    let raw = decompress::decompress(&compressed)?;
    Ok(parse_level_string(&latin1::decode(&raw)))
}

/// [`decode_level`], inflating on the blocking pool for payloads of at
/// least `offload_threshold` bytes. See [`decompress::decompress_async`].
///
/// # Errors
/// Same as [`decode_level`].
pub async fn decode_level_async(
    encoded: &str,
    flavor: Base64Flavor,
    offload_threshold: usize,
) -> Result<LevelData, CodecError> {
    let compressed = flavor.decode(encoded)?;
    let raw = decompress::decompress_async(compressed, offload_threshold).await?;
    Ok(parse_level_string(&latin1::decode(&raw)))
}
