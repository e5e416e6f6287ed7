// src/catalog/snapshot.rs
// DOCUMENTATION: Immutable catalog snapshot and per-breed lookups
// PURPOSE: One consistent view of all four collections for the query core

use crate::models::{Breed, Characteristic, Photo, Review};

/// One fully-loaded view of the catalog
/// DOCUMENTATION: Owns all four collections for the lifetime of one load.
/// Treated as immutable once constructed: the repository replaces snapshots
/// wholesale, it never patches them in place, so every query observes a
/// consistent state. All lookups are pure and total - an unknown breed_id
/// yields an empty result, never an error.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub breeds: Vec<Breed>,
    pub photos: Vec<Photo>,
    pub characteristics: Vec<Characteristic>,
    pub reviews: Vec<Review>,
}

impl CatalogSnapshot {
    /// Build a snapshot from all four collections
    pub fn new(
        breeds: Vec<Breed>,
        photos: Vec<Photo>,
        characteristics: Vec<Characteristic>,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            breeds,
            photos,
            characteristics,
            reviews,
        }
    }

    /// Single-entity mode: a snapshot holding only the breed collection
    /// DOCUMENTATION: Some views filter over breeds alone; the related
    /// collections stay empty and every lookup simply returns nothing.
    pub fn from_breeds(breeds: Vec<Breed>) -> Self {
        Self {
            breeds,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Find a breed by id
    pub fn breed_by_id(&self, breed_id: i64) -> Option<&Breed> {
        self.breeds.iter().find(|b| b.id == breed_id)
    }

    /// All photos of a breed, in collection order
    pub fn photos_for_breed(&self, breed_id: i64) -> Vec<&Photo> {
        self.photos
            .iter()
            .filter(|p| p.breed_id == breed_id)
            .collect()
    }

    /// All characteristics of a breed, in collection order
    pub fn characteristics_for_breed(&self, breed_id: i64) -> Vec<&Characteristic> {
        self.characteristics
            .iter()
            .filter(|c| c.breed_id == breed_id)
            .collect()
    }

    /// All reviews of a breed, in collection order
    pub fn reviews_for_breed(&self, breed_id: i64) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.breed_id == breed_id)
            .collect()
    }

    /// The breed's primary photo, if any
    /// DOCUMENTATION: First photo in collection order with is_primary set.
    /// Duplicate primaries are tolerated - first match wins, matching the
    /// backend's LIMIT 1 behavior.
    pub fn primary_photo(&self, breed_id: i64) -> Option<&Photo> {
        self.photos
            .iter()
            .find(|p| p.breed_id == breed_id && p.is_primary)
    }
}
