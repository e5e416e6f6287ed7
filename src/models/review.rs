// src/models/review.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lenient UTC timestamp codec
/// DOCUMENTATION: The backend stringifies timestamps as
/// "YYYY-MM-DD HH:MM:SS.ffffff" rather than RFC 3339; accept both on the way
/// in, emit RFC 3339 on the way out.
pub(crate) mod lenient_utc {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

/// User review of a breed
/// DOCUMENTATION: Append-only from this crate's perspective - reviews are
/// created through the submission sink and never edited or deleted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub breed_id: i64,
    pub user_name: String,
    /// Star rating in [1,5]
    pub rating: u8,
    pub review_text: String,
    #[serde(with = "lenient_utc")]
    pub created_at: DateTime<Utc>,
}

/// Request to submit a new review
/// DOCUMENTATION: Mirrors the POST body of the reviews backend.
/// Validated client-side before the sink is called.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitReviewRequest {
    pub breed_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub user_name: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: u8,

    #[serde(default)]
    pub review_text: String,
}

/// Outcome reported by the review submission sink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewResponse {
    pub success: bool,
    pub review_id: i64,
}
