//! Currency metadata records.

use serde::{Deserialize, Serialize};

/// One row of the currency metadata table.
///
/// Records are value objects rebuilt on every run, either from the registry
/// XML or from the CSV snapshot. Only the snapshot persists across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// Human-readable currency name (may be empty)
    pub name: String,
    /// Three-letter alphabetic ISO code; unique within a snapshot
    pub code: String,
    /// ISO numeric code as a digit string (may be empty)
    pub num: String,
    /// Minor-unit decimal places as a digit string
    pub scale: String,
}
