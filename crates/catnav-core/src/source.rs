//! Contract for the external category data source.

use std::fmt;

use crate::record::CategoryRecord;

/// Why a category fetch produced no records.
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure reported by the host RPC layer.
    Transport(String),
    /// The payload arrived but could not be decoded.
    Payload(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "category fetch failed: {msg}"),
            Self::Payload(err) => write!(f, "category payload could not be decoded: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(_) => None,
            Self::Payload(err) => Some(err),
        }
    }
}

/// Read access to the full category list with per-category counts.
///
/// Implemented by the host over whatever transport it owns; the sidebar
/// issues exactly one call per activation and never retries.
pub trait CategorySource {
    /// Fetch every category, flattened, with counts already computed.
    fn fetch_categories_with_counts(&self) -> Result<Vec<CategoryRecord>, FetchError>;
}

/// Decode a raw JSON payload into category records.
///
/// Accepts all parent-reference wire shapes (absent, `false`, bare id,
/// `[id, label]` pair).
pub fn parse_category_payload(payload: &str) -> Result<Vec<CategoryRecord>, FetchError> {
    serde_json::from_str(payload).map_err(FetchError::Payload)
}
