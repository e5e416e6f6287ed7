// src/services/breed_service.rs
// DOCUMENTATION: Business logic for the breed catalog
// PURPOSE: Intermediary between the presentation layer and the repository,
// applies the pure query core and the backend's ordering conventions

use validator::Validate;

use crate::catalog::{
    average_rating, compare_breeds, display_rating, filter_breeds, BreedComparison, BreedQuery,
    CatalogSnapshot,
};
use crate::errors::CatalogError;
use crate::models::{Breed, BreedDetail, BreedSummary, SubmitReviewRequest, SubmitReviewResponse};
use crate::services::{BreedDataProvider, ReviewSink};
use crate::store::BreedRepository;

pub struct BreedService;

impl BreedService {
    /// Catalog listing: filter, then order by name and attach aggregates
    /// DOCUMENTATION: Mirrors the backend list endpoint, which orders by
    /// breed name and joins each breed with its review aggregates and main
    /// photo. The filter itself stays order-preserving; the name ordering is
    /// applied here.
    pub async fn catalog(repository: &BreedRepository, query: &BreedQuery) -> Vec<BreedSummary> {
        let snapshot = repository.snapshot().await;
        let mut summaries: Vec<BreedSummary> = filter_breeds(&snapshot, query)
            .iter()
            .map(|b| Self::build_summary(&snapshot, b))
            .collect();
        summaries.sort_by(|a, b| a.breed.name.cmp(&b.breed.name));
        summaries
    }

    /// Full detail for one breed; None when the id is unknown
    pub async fn breed_detail(repository: &BreedRepository, breed_id: i64) -> Option<BreedDetail> {
        let snapshot = repository.snapshot().await;
        Self::build_detail(&snapshot, breed_id)
    }

    /// Side-by-side comparison of two breeds; None when either is unknown
    pub async fn compare(
        repository: &BreedRepository,
        first_id: i64,
        second_id: i64,
    ) -> Option<BreedComparison> {
        let snapshot = repository.snapshot().await;
        compare_breeds(&snapshot, first_id, second_id)
    }

    /// Validate and submit a review, then reload the catalog on success
    /// DOCUMENTATION: No optimistic insertion - the fresh aggregates come
    /// from the provider, exactly as the original flow re-fetches the breed
    /// after posting.
    pub async fn submit_review<S, P>(
        repository: &BreedRepository,
        sink: &S,
        provider: &P,
        request: &SubmitReviewRequest,
    ) -> Result<SubmitReviewResponse, CatalogError>
    where
        S: ReviewSink,
        P: BreedDataProvider,
    {
        request.validate()?;

        let response = sink.submit_review(request).await?;
        if response.success {
            log::info!(
                "Review {} accepted for breed {}, reloading catalog",
                response.review_id,
                request.breed_id
            );
            repository.reload(provider).await?;
        } else {
            log::warn!("Review for breed {} was not accepted", request.breed_id);
        }
        Ok(response)
    }

    /// Assemble a listing summary from the raw collections
    /// DOCUMENTATION: Must agree with the backend's pre-aggregated payload:
    /// same one-decimal rounding, same 0 sentinel for "no reviews", same
    /// first-match primary photo.
    pub fn build_summary(snapshot: &CatalogSnapshot, breed: &Breed) -> BreedSummary {
        let reviews = snapshot.reviews_for_breed(breed.id);
        BreedSummary {
            breed: breed.clone(),
            avg_rating: display_rating(average_rating(&reviews)),
            review_count: reviews.len(),
            primary_photo: snapshot.primary_photo(breed.id).map(|p| p.to_ref()),
        }
    }

    /// Assemble a detail payload from the raw collections
    /// DOCUMENTATION: Ordering follows the backend detail endpoint: photos
    /// primary-first then by id, characteristics by name, reviews newest
    /// first.
    pub fn build_detail(snapshot: &CatalogSnapshot, breed_id: i64) -> Option<BreedDetail> {
        let breed = snapshot.breed_by_id(breed_id)?;
        let reviews_ref = snapshot.reviews_for_breed(breed_id);
        let avg_rating = display_rating(average_rating(&reviews_ref));
        let review_count = reviews_ref.len();

        let mut photos: Vec<_> = snapshot
            .photos_for_breed(breed_id)
            .into_iter()
            .cloned()
            .collect();
        photos.sort_by(|a, b| b.is_primary.cmp(&a.is_primary).then(a.id.cmp(&b.id)));

        let mut characteristics: Vec<_> = snapshot
            .characteristics_for_breed(breed_id)
            .into_iter()
            .cloned()
            .collect();
        characteristics.sort_by(|a, b| a.name.cmp(&b.name));

        let mut reviews: Vec<_> = reviews_ref.into_iter().cloned().collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Some(BreedDetail {
            breed: breed.clone(),
            avg_rating,
            review_count,
            photos,
            characteristics,
            reviews,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_data::{sample_snapshot, StaticBreedProvider};

    #[tokio::test]
    async fn test_catalog_is_ordered_by_name() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        let listing = BreedService::catalog(&repo, &BreedQuery::all()).await;
        let names: Vec<&str> = listing.iter().map(|s| s.breed.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[tokio::test]
    async fn test_catalog_filters_before_summarizing() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        let query = BreedQuery {
            size: "Large".to_string(),
            ..Default::default()
        };
        let listing = BreedService::catalog(&repo, &query).await;
        assert!(!listing.is_empty());
        assert!(listing.iter().all(|s| s.breed.size == "Large"));
    }

    #[tokio::test]
    async fn test_detail_orders_photos_primary_first() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        let detail = BreedService::breed_detail(&repo, 1).await.unwrap();
        assert!(detail.photos[0].is_primary);
        // non-primary photos follow in id order
        let tail_ids: Vec<i64> = detail
            .photos
            .iter()
            .skip_while(|p| p.is_primary)
            .map(|p| p.id)
            .collect();
        let mut sorted = tail_ids.clone();
        sorted.sort_unstable();
        assert_eq!(tail_ids, sorted);
    }

    #[tokio::test]
    async fn test_detail_orders_reviews_newest_first() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        let detail = BreedService::breed_detail(&repo, 1).await.unwrap();
        for pair in detail.reviews.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_detail_unknown_breed_is_none() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        assert!(BreedService::breed_detail(&repo, 9999).await.is_none());
    }

    #[tokio::test]
    async fn test_summary_aggregates_match_detail() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        let listing = BreedService::catalog(&repo, &BreedQuery::all()).await;
        for summary in listing {
            let detail = BreedService::breed_detail(&repo, summary.breed.id)
                .await
                .unwrap();
            assert_eq!(summary.avg_rating, detail.avg_rating);
            assert_eq!(summary.review_count, detail.review_count);
        }
    }

    #[tokio::test]
    async fn test_submit_review_reloads_catalog() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        let provider = StaticBreedProvider::new();
        let before = BreedService::breed_detail(&repo, 1).await.unwrap();

        let request = SubmitReviewRequest {
            breed_id: 1,
            user_name: "Olga".to_string(),
            rating: 5,
            review_text: "Wonderful with children".to_string(),
        };
        let response = BreedService::submit_review(&repo, &provider, &provider, &request)
            .await
            .unwrap();
        assert!(response.success);

        let after = BreedService::breed_detail(&repo, 1).await.unwrap();
        assert_eq!(after.review_count, before.review_count + 1);
    }

    #[tokio::test]
    async fn test_submit_review_rejects_invalid_rating() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        let provider = StaticBreedProvider::new();
        let request = SubmitReviewRequest {
            breed_id: 1,
            user_name: "Olga".to_string(),
            rating: 0,
            review_text: String::new(),
        };
        let result = BreedService::submit_review(&repo, &provider, &provider, &request).await;
        assert!(matches!(result, Err(CatalogError::ValidationError(_))));
    }
}
