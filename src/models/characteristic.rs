// src/models/characteristic.rs

use serde::{Deserialize, Serialize};

/// Rated breed characteristic (intelligence, trainability, shedding, ...)
/// DOCUMENTATION: Ratings are integers in [1,5]. Names are not guaranteed
/// unique within a breed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Characteristic {
    pub id: i64,
    pub breed_id: i64,
    #[serde(rename = "characteristic_name")]
    pub name: String,
    pub rating: u8,
    /// Optional free-text elaboration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
