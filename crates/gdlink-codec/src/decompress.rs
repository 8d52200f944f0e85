//! Compression framing detection and inflate.
//!
//! Compressed payloads come in three framings, and the service never says
//! which one it used. We sniff the leading bytes in a fixed order:
//!
//! 1. `1F 8B 08` → gzip.
//! 2. The first two bytes fail the zlib header test → raw deflate.
//!    A zlib header has compression method 8 in the low nibble of byte 0,
//!    a window size ≤ 7 in the high nibble, and `(b0 << 8 | b1) % 31 == 0`.
//! 3. Otherwise → zlib-wrapped deflate.
//!
//! The zlib test is a heuristic (a raw deflate stream can pass it by
//! accident), but it is the order the service's own client uses, so the
//! order is kept exactly.
//!
//! Inflating is CPU-bound. [`decompress_async`] moves large payloads onto
//! tokio's blocking pool and falls back to inflating in place when that
//! dispatch fails.

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};

use crate::CodecError;

const GZIP_MAGIC: [u8; 3] = [0x1F, 0x8B, 0x08];

/// Payloads at or above this many bytes are inflated off the async
/// executor by default.
pub const DEFAULT_OFFLOAD_THRESHOLD: usize = 64 * 1024;

/// The compression framing detected on a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// RFC 1952 gzip member.
    Gzip,
    /// RFC 1951 deflate with no wrapper.
    RawDeflate,
    /// RFC 1950 zlib-wrapped deflate.
    Zlib,
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gzip => f.write_str("gzip"),
            Self::RawDeflate => f.write_str("raw deflate"),
            Self::Zlib => f.write_str("zlib"),
        }
    }
}

/// Picks a framing from the first bytes of `buf`.
///
/// Buffers shorter than two bytes can't carry a zlib header and are
/// treated as raw deflate.
pub fn detect_framing(buf: &[u8]) -> Framing {
    if buf.starts_with(&GZIP_MAGIC) {
        return Framing::Gzip;
    }
    let [b0, b1, ..] = *buf else {
        return Framing::RawDeflate;
    };
    let header = (u16::from(b0) << 8) | u16::from(b1);
    if b0 & 0x0F != 8 || b0 >> 4 > 7 || header % 31 != 0 {
        Framing::RawDeflate
    } else {
        Framing::Zlib
    }
}

/// Inflates `buf` with an explicit framing.
///
/// # Errors
/// Returns [`CodecError::Decompress`] if the stream is corrupt.
pub fn inflate(buf: &[u8], framing: Framing) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    let result = match framing {
        Framing::Gzip => GzDecoder::new(buf).read_to_end(&mut out),
        Framing::RawDeflate => DeflateDecoder::new(buf).read_to_end(&mut out),
        Framing::Zlib => ZlibDecoder::new(buf).read_to_end(&mut out),
    };
    result.map_err(|source| CodecError::Decompress { framing, source })?;
    Ok(out)
}

/// Detects the framing of `buf` and inflates it.
///
/// # Errors
/// Returns [`CodecError::Decompress`] if the stream is corrupt.
pub fn decompress(buf: &[u8]) -> Result<Vec<u8>, CodecError> {
    let framing = detect_framing(buf);
    tracing::trace!(%framing, len = buf.len(), "inflating payload");
    inflate(buf, framing)
}

/// [`decompress`], run on tokio's blocking pool when `buf` is at least
/// `threshold` bytes.
///
/// One blocking task per call; there is no persistent worker. If the
/// task can't be dispatched (no runtime on this thread) or dies before
/// returning (panic, runtime shutdown), the payload is inflated
/// synchronously instead. Corrupt streams are NOT retried: a
/// [`CodecError::Decompress`] coming back from the task is returned as-is.
///
/// # Errors
/// Returns [`CodecError::Decompress`] if the stream is corrupt.
pub async fn decompress_async(
    buf: Vec<u8>,
    threshold: usize,
) -> Result<Vec<u8>, CodecError> {
    if buf.len() < threshold {
        return decompress(&buf);
    }

    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        tracing::warn!(len = buf.len(), "no tokio runtime, inflating inline");
        return decompress(&buf);
    };

    inflate_on_pool(&handle, buf.into(), decompress).await
}

/// Runs `job` on `handle`'s blocking pool, inflating inline with
/// [`decompress`] if the task never comes back.
async fn inflate_on_pool(
    handle: &tokio::runtime::Handle,
    shared: Arc<[u8]>,
    job: fn(&[u8]) -> Result<Vec<u8>, CodecError>,
) -> Result<Vec<u8>, CodecError> {
    let worker = Arc::clone(&shared);

    match handle.spawn_blocking(move || job(&worker)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(
                error = %e,
                len = shared.len(),
                "inflate task failed, retrying inline"
            );
            decompress(&shared)
        }
    }
}
