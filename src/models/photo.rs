// src/models/photo.rs

use serde::{Deserialize, Serialize};

/// Breed photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub breed_id: i64,
    pub photo_url: String,
    pub caption: String,
    /// At most one photo per breed should carry this flag; when the backend
    /// ships duplicates, the first one in collection order wins.
    /// The backend column is named is_main, so both spellings are accepted.
    #[serde(default, alias = "is_main")]
    pub is_primary: bool,
}

/// Lightweight photo reference embedded in listing payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoRef {
    pub photo_url: String,
    pub caption: String,
}

impl Photo {
    /// Trim a full photo down to the listing reference
    pub fn to_ref(&self) -> PhotoRef {
        PhotoRef {
            photo_url: self.photo_url.clone(),
            caption: self.caption.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_parses_backend_is_main_flag() {
        let json = r#"{
            "id": 11,
            "breed_id": 1,
            "photo_url": "https://images.example.com/labrador-1.jpg",
            "caption": "Labrador portrait",
            "is_main": true
        }"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        assert!(photo.is_primary);
    }

    #[test]
    fn test_photo_parses_documented_is_primary_name() {
        let json = r#"{
            "id": 12,
            "breed_id": 1,
            "photo_url": "https://images.example.com/labrador-2.jpg",
            "caption": "Labrador in the field",
            "is_primary": true
        }"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        assert!(photo.is_primary);
    }

    #[test]
    fn test_photo_missing_flag_defaults_to_false() {
        let json = r#"{
            "id": 13,
            "breed_id": 1,
            "photo_url": "https://images.example.com/labrador-3.jpg",
            "caption": "Puppy"
        }"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        assert!(!photo.is_primary);
    }
}
