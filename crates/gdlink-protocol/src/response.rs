//! Helpers shared by every response parser.

use std::str::FromStr;

use crate::ProtocolError;

/// Screens a raw body for the service's failure conventions.
///
/// Returns the trimmed body when it is a real payload.
///
/// # Errors
/// - [`ProtocolError::EmptyResponse`] for an empty (or all-whitespace) body
/// - [`ProtocolError::Sentinel`] when the whole body is a negative integer
pub fn check_sentinel(body: &str) -> Result<&str, ProtocolError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ProtocolError::EmptyResponse);
    }
    if let Ok(code) = body.parse::<i32>() {
        if code < 0 {
            tracing::debug!(code, "service returned failure sentinel");
            return Err(ProtocolError::Sentinel(code));
        }
    }
    Ok(body)
}

/// The `total:offset:amount` trailer on list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Items matching the query across all pages.
    pub total: u64,
    /// Index of the first item on this page.
    pub offset: u64,
    /// Page size the service used.
    pub amount: u64,
}

impl PageInfo {
    /// Zero-based page number implied by `offset` and `amount`.
    pub fn page(&self) -> u64 {
        self.offset.checked_div(self.amount).unwrap_or(0)
    }

    /// Whether another page exists after this one.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.amount) < self.total
    }
}

impl FromStr for PageInfo {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':').map(str::parse::<u64>);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(total)), Some(Ok(offset)), Some(Ok(amount)), None) => Ok(Self {
                total,
                offset,
                amount,
            }),
            _ => Err(ProtocolError::Malformed(format!("bad page trailer {s:?}"))),
        }
    }
}
