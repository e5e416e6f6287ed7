// src/models/breed.rs
// DOCUMENTATION: Core data structures for dog breeds
// PURPOSE: Defines all serialization/deserialization models for breed records

use serde::{Deserialize, Deserializer, Serialize};

use super::{Characteristic, Photo, PhotoRef, Review};

/// Accept the average rating as a JSON number or a stringified decimal
/// DOCUMENTATION: The backend serializes its SQL decimals as strings
/// ("4.5"); locally built summaries carry plain numbers.
fn de_avg_rating<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f32),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Represents a complete breed record from the backend catalog
/// DOCUMENTATION: This struct maps directly to the breeds payload of the
/// backend API. Used for snapshot storage and all query operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breed {
    /// Unique identifier, stable across reloads
    pub id: i64,

    /// Display name in the catalog's source language - required field
    pub name: String,

    /// English name, when the catalog carries one alongside the localized name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,

    /// Free-text description
    pub description: String,

    /// Country or region of origin
    pub origin: String,

    /// Size class - one of a small closed set of localized strings
    /// (e.g. Small/Medium/Large/Giant in the catalog language)
    pub size: String,

    /// Free-text temperament summary
    pub temperament: String,

    /// Care/grooming level - closed set: Low/Medium/High
    pub care_level: String,

    /// Activity/energy level - closed set: Low/Medium/High/VeryHigh
    pub activity_level: String,

    /// Life expectancy as a free-text range (e.g. "10-12 years")
    pub lifespan: String,

    /// Weight as a free-text range - no arithmetic is performed on it
    pub weight: String,

    /// Height as a free-text range
    pub height: String,
}

/// Listing DTO: breed plus derived aggregates and its primary photo
/// DOCUMENTATION: Matches the list payload of the backend API, which joins
/// each breed with its review aggregates and main photo. Built locally by the
/// service layer when working from a raw snapshot; both paths agree on
/// rounding and sentinel semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedSummary {
    #[serde(flatten)]
    pub breed: Breed,

    /// Mean review rating rounded to one decimal; 0 means "no reviews yet"
    /// (a real average always lies in [1.0, 5.0])
    #[serde(deserialize_with = "de_avg_rating")]
    pub avg_rating: f32,

    /// Number of reviews behind avg_rating
    pub review_count: usize,

    /// Main catalog photo, absent when none is flagged primary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_photo: Option<PhotoRef>,
}

/// Detail DTO: breed with all related collections and aggregates
/// DOCUMENTATION: Matches the single-breed payload of the backend API
/// (GET ?id=). Photos come primary-first, reviews newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedDetail {
    #[serde(flatten)]
    pub breed: Breed,

    #[serde(deserialize_with = "de_avg_rating")]
    pub avg_rating: f32,
    pub review_count: usize,

    #[serde(default)]
    pub photos: Vec<Photo>,

    #[serde(default)]
    pub characteristics: Vec<Characteristic>,

    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Breed {
    /// Case-insensitive substring match against either name field
    /// DOCUMENTATION: Used by the text-search predicate. An empty needle
    /// matches every breed.
    pub fn name_matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        if self.name.to_lowercase().contains(&needle) {
            return true;
        }
        self.name_en
            .as_deref()
            .map(|en| en.to_lowercase().contains(&needle))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breed(name: &str, name_en: Option<&str>) -> Breed {
        Breed {
            id: 1,
            name: name.to_string(),
            name_en: name_en.map(|s| s.to_string()),
            description: String::new(),
            origin: String::new(),
            size: "Large".to_string(),
            temperament: String::new(),
            care_level: "Medium".to_string(),
            activity_level: "High".to_string(),
            lifespan: String::new(),
            weight: String::new(),
            height: String::new(),
        }
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let b = breed("Labrador Retriever", None);
        assert!(b.name_matches("lab"));
        assert!(b.name_matches("RETRIEVER"));
        assert!(!b.name_matches("beagle"));
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let b = breed("Beagle", None);
        assert!(b.name_matches(""));
    }

    #[test]
    fn test_english_name_is_searched_too() {
        let b = breed("Немецкая овчарка", Some("German Shepherd"));
        assert!(b.name_matches("shepherd"));
        assert!(b.name_matches("овчарка"));
    }

    #[test]
    fn test_summary_accepts_stringified_rating() {
        let json = r#"{
            "id": 1, "name": "Beagle", "description": "", "origin": "England",
            "size": "Medium", "temperament": "", "care_level": "Low",
            "activity_level": "High", "lifespan": "", "weight": "", "height": "",
            "avg_rating": "4.5", "review_count": 2
        }"#;
        let summary: BreedSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.avg_rating, 4.5);
        assert_eq!(summary.review_count, 2);
        assert!(summary.primary_photo.is_none());
    }
}
