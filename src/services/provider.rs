// src/services/provider.rs
// DOCUMENTATION: External collaborator seams
// PURPOSE: The two interfaces the catalog core consumes - breed data in,
// review submissions out

use crate::catalog::{BreedQuery, CatalogSnapshot};
use crate::errors::CatalogError;
use crate::models::{BreedDetail, BreedSummary, SubmitReviewRequest, SubmitReviewResponse};

/// Source of breed data
/// DOCUMENTATION: Implemented by the HTTP backend client and by the static
/// in-memory provider. Fetching is the provider's business - retry, timeout
/// and cancellation policy live behind this seam, never in the core.
#[allow(async_fn_in_trait)]
pub trait BreedDataProvider {
    /// List breed summaries, already filtered per the query
    async fn list_breeds(&self, query: &BreedQuery) -> Result<Vec<BreedSummary>, CatalogError>;

    /// One breed with its nested collections; None when the id is unknown
    async fn get_breed(&self, breed_id: i64) -> Result<Option<BreedDetail>, CatalogError>;

    /// The raw collections for a wholesale repository reload
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, CatalogError>;
}

/// Destination for new reviews
/// DOCUMENTATION: Append-only. On success the caller reloads the affected
/// breed's data from the provider; nothing here patches cached aggregates.
#[allow(async_fn_in_trait)]
pub trait ReviewSink {
    async fn submit_review(
        &self,
        request: &SubmitReviewRequest,
    ) -> Result<SubmitReviewResponse, CatalogError>;
}
