//! Review records as served by the `/reviews` endpoint.

use serde::{Deserialize, Deserializer, Serialize};

pub type ReviewId = u64;

/// Highest rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// One user-submitted rating/comment for an app.
///
/// Text fields sent as `null` decode as empty strings; rows whose app lookup
/// failed upstream still show up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(deserialize_with = "null_as_empty")]
    pub app_name: String,
    pub rating: u8,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub author: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Review {
    /// Rating clamped into `0..=MAX_RATING`.
    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }
}
