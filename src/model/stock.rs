use serde::{Deserialize, Deserializer, Serialize};

use super::ProductId;

/// Available quantity for a product, fetched from `GET stock/{id}`.
///
/// Owned by the remote catalog. Never cached: every quantity-increasing
/// mutation reads it fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    #[serde(deserialize_with = "non_negative_amount")]
    pub amount: u32,
}

impl Stock {
    pub fn new(id: ProductId, amount: u32) -> Self {
        Self { id, amount }
    }
}

/// Negative stock counts as none, so it fails the stock check instead of decoding.
fn non_negative_amount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(u32::try_from(raw.max(0)).unwrap_or(u32::MAX))
}
