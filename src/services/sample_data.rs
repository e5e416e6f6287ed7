// src/services/sample_data.rs
// DOCUMENTATION: Built-in sample catalog and static provider
// PURPOSE: Offline data source - the same breeds the first iteration of the
// app shipped hard-coded, usable by tests and by callers without a backend

use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use crate::catalog::{filter_breeds, BreedQuery, CatalogSnapshot};
use crate::errors::CatalogError;
use crate::models::{
    Breed, BreedDetail, BreedSummary, Characteristic, Photo, Review, SubmitReviewRequest,
    SubmitReviewResponse,
};
use crate::services::{BreedDataProvider, BreedService, ReviewSink};

/// In-memory provider over the built-in sample catalog
/// DOCUMENTATION: Implements both external seams. Submitted reviews are
/// appended to its own snapshot, so a repository reload after submission
/// observes them - the same contract the HTTP backend offers.
pub struct StaticBreedProvider {
    snapshot: RwLock<CatalogSnapshot>,
}

impl StaticBreedProvider {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(sample_snapshot()),
        }
    }

    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }
}

impl Default for StaticBreedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl BreedDataProvider for StaticBreedProvider {
    async fn list_breeds(&self, query: &BreedQuery) -> Result<Vec<BreedSummary>, CatalogError> {
        let snapshot = self.snapshot.read().await;
        let mut summaries: Vec<BreedSummary> = filter_breeds(&snapshot, query)
            .iter()
            .map(|b| BreedService::build_summary(&snapshot, b))
            .collect();
        summaries.sort_by(|a, b| a.breed.name.cmp(&b.breed.name));
        Ok(summaries)
    }

    async fn get_breed(&self, breed_id: i64) -> Result<Option<BreedDetail>, CatalogError> {
        let snapshot = self.snapshot.read().await;
        Ok(BreedService::build_detail(&snapshot, breed_id))
    }

    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, CatalogError> {
        Ok(self.snapshot.read().await.clone())
    }
}

impl ReviewSink for StaticBreedProvider {
    async fn submit_review(
        &self,
        request: &SubmitReviewRequest,
    ) -> Result<SubmitReviewResponse, CatalogError> {
        let mut snapshot = self.snapshot.write().await;
        if snapshot.breed_by_id(request.breed_id).is_none() {
            return Err(CatalogError::NotFound(request.breed_id));
        }

        let review_id = snapshot.reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        snapshot.reviews.push(Review {
            id: review_id,
            breed_id: request.breed_id,
            user_name: request.user_name.clone(),
            rating: request.rating,
            review_text: request.review_text.clone(),
            created_at: Utc::now(),
        });
        log::debug!(
            "Appended review {} for breed {} to sample catalog",
            review_id,
            request.breed_id
        );

        Ok(SubmitReviewResponse {
            success: true,
            review_id,
        })
    }
}

/// The built-in sample catalog
pub fn sample_snapshot() -> CatalogSnapshot {
    CatalogSnapshot::new(
        sample_breeds(),
        sample_photos(),
        sample_characteristics(),
        sample_reviews(),
    )
}

fn breed(
    id: i64,
    name: &str,
    name_en: Option<&str>,
    origin: &str,
    size: &str,
    temperament: &str,
    care: &str,
    activity: &str,
    lifespan: &str,
    weight: &str,
    height: &str,
) -> Breed {
    Breed {
        id,
        name: name.to_string(),
        name_en: name_en.map(|s| s.to_string()),
        description: format!("{} - {}", name, temperament),
        origin: origin.to_string(),
        size: size.to_string(),
        temperament: temperament.to_string(),
        care_level: care.to_string(),
        activity_level: activity.to_string(),
        lifespan: lifespan.to_string(),
        weight: weight.to_string(),
        height: height.to_string(),
    }
}

fn sample_breeds() -> Vec<Breed> {
    vec![
        breed(
            1,
            "Labrador Retriever",
            None,
            "Canada",
            "Large",
            "Friendly, active",
            "Medium",
            "High",
            "10-12 years",
            "25-36 kg",
            "54-57 cm",
        ),
        breed(
            2,
            "Немецкая овчарка",
            Some("German Shepherd"),
            "Germany",
            "Large",
            "Smart, loyal",
            "Medium",
            "VeryHigh",
            "9-13 years",
            "30-40 kg",
            "55-65 cm",
        ),
        breed(
            3,
            "Golden Retriever",
            None,
            "Scotland",
            "Large",
            "Gentle, friendly",
            "High",
            "High",
            "10-12 years",
            "25-34 kg",
            "51-61 cm",
        ),
        breed(
            4,
            "Beagle",
            None,
            "England",
            "Medium",
            "Cheerful, curious",
            "Low",
            "High",
            "12-15 years",
            "9-11 kg",
            "33-41 cm",
        ),
        breed(
            5,
            "Poodle",
            None,
            "France",
            "Medium",
            "Smart, elegant",
            "High",
            "Medium",
            "12-15 years",
            "20-32 kg",
            "45-60 cm",
        ),
        breed(
            6,
            "Yorkshire Terrier",
            None,
            "England",
            "Small",
            "Bold, affectionate",
            "High",
            "Low",
            "13-16 years",
            "2-3 kg",
            "18-23 cm",
        ),
    ]
}

fn photo(id: i64, breed_id: i64, url: &str, caption: &str, is_primary: bool) -> Photo {
    Photo {
        id,
        breed_id,
        photo_url: url.to_string(),
        caption: caption.to_string(),
        is_primary,
    }
}

fn sample_photos() -> Vec<Photo> {
    vec![
        photo(11, 1, "https://images.example.com/labrador-1.jpg", "Labrador portrait", true),
        photo(12, 1, "https://images.example.com/labrador-2.jpg", "Labrador in the field", false),
        photo(21, 2, "https://images.example.com/shepherd-1.jpg", "German Shepherd portrait", true),
        photo(31, 3, "https://images.example.com/golden-1.jpg", "Golden Retriever portrait", true),
        photo(41, 4, "https://images.example.com/beagle-1.jpg", "Beagle portrait", true),
        photo(51, 5, "https://images.example.com/poodle-1.jpg", "Poodle portrait", true),
        photo(61, 6, "https://images.example.com/yorkie-1.jpg", "Yorkshire Terrier portrait", true),
    ]
}

fn characteristic(id: i64, breed_id: i64, name: &str, rating: u8) -> Characteristic {
    Characteristic {
        id,
        breed_id,
        name: name.to_string(),
        rating,
        notes: None,
    }
}

fn sample_characteristics() -> Vec<Characteristic> {
    vec![
        characteristic(101, 1, "Intelligence", 5),
        characteristic(102, 1, "Trainability", 5),
        characteristic(103, 1, "Child friendly", 5),
        characteristic(104, 1, "Dog friendly", 4),
        characteristic(105, 1, "Shedding", 4),
        characteristic(106, 1, "Grooming needs", 2),
        characteristic(111, 2, "Intelligence", 5),
        characteristic(112, 2, "Trainability", 5),
        characteristic(113, 2, "Child friendly", 4),
        characteristic(114, 2, "Dog friendly", 3),
        characteristic(115, 2, "Shedding", 4),
        characteristic(116, 2, "Grooming needs", 3),
        characteristic(121, 3, "Intelligence", 5),
        characteristic(122, 3, "Trainability", 5),
        characteristic(123, 3, "Child friendly", 5),
        characteristic(124, 3, "Dog friendly", 5),
        characteristic(125, 3, "Shedding", 4),
        characteristic(126, 3, "Grooming needs", 3),
        // the sample backend only scored two traits for the Beagle
        characteristic(131, 4, "Intelligence", 4),
        characteristic(132, 4, "Child friendly", 5),
    ]
}

fn review(id: i64, breed_id: i64, user: &str, rating: u8, text: &str, day: u32) -> Review {
    Review {
        id,
        breed_id,
        user_name: user.to_string(),
        rating,
        review_text: text.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap(),
    }
}

fn sample_reviews() -> Vec<Review> {
    vec![
        review(201, 1, "Anna", 5, "Best family dog we ever had", 1),
        review(202, 1, "Pavel", 4, "Energetic, needs long walks", 5),
        review(203, 2, "Maria", 5, "Incredibly loyal and trainable", 3),
        review(204, 3, "Igor", 5, "Gentle with the kids", 8),
        review(205, 3, "Elena", 4, "Sheds a lot but worth it", 10),
        review(206, 4, "Dmitry", 5, "Happy little hound", 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_breeds_applies_filters() {
        let provider = StaticBreedProvider::new();
        let query = BreedQuery {
            size: "Small".to_string(),
            ..Default::default()
        };
        let listing = provider.list_breeds(&query).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].breed.name, "Yorkshire Terrier");
    }

    #[tokio::test]
    async fn test_list_breeds_search_covers_english_name() {
        let provider = StaticBreedProvider::new();
        let query = BreedQuery {
            search_text: "shepherd".to_string(),
            ..Default::default()
        };
        let listing = provider.list_breeds(&query).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].breed.id, 2);
    }

    #[tokio::test]
    async fn test_get_breed_includes_aggregates() {
        let provider = StaticBreedProvider::new();
        let detail = provider.get_breed(1).await.unwrap().unwrap();
        // ratings 5 and 4 average to 4.5
        assert_eq!(detail.avg_rating, 4.5);
        assert_eq!(detail.review_count, 2);
        assert!(!detail.photos.is_empty());
    }

    #[tokio::test]
    async fn test_get_breed_unknown_is_none() {
        let provider = StaticBreedProvider::new();
        assert!(provider.get_breed(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_submit_review_appends() {
        let provider = StaticBreedProvider::new();
        let request = SubmitReviewRequest {
            breed_id: 5,
            user_name: "Sveta".to_string(),
            rating: 4,
            review_text: "Clever and calm".to_string(),
        };
        let response = provider.submit_review(&request).await.unwrap();
        assert!(response.success);

        let detail = provider.get_breed(5).await.unwrap().unwrap();
        assert_eq!(detail.review_count, 1);
        assert_eq!(detail.reviews[0].id, response.review_id);
    }

    #[tokio::test]
    async fn test_submit_review_unknown_breed_fails() {
        let provider = StaticBreedProvider::new();
        let request = SubmitReviewRequest {
            breed_id: 9999,
            user_name: "Sveta".to_string(),
            rating: 4,
            review_text: String::new(),
        };
        let result = provider.submit_review(&request).await;
        assert!(matches!(result, Err(CatalogError::NotFound(9999))));
    }
}
