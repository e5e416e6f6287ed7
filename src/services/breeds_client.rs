// src/services/breeds_client.rs
// DOCUMENTATION: HTTP client for the breeds/reviews backend
// PURPOSE: Handle communication with the remote catalog API - the concrete
// data provider and review sink

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::catalog::{BreedQuery, CatalogSnapshot, FILTER_ALL};
use crate::config::Config;
use crate::errors::CatalogError;
use crate::models::{
    BreedDetail, BreedSummary, Review, SubmitReviewRequest, SubmitReviewResponse,
};
use crate::services::{BreedDataProvider, ReviewSink};

/// Client for the breeds backend
/// DOCUMENTATION: The breeds endpoint serves the listing (with optional
/// size/activity/care parameters) and the detail view (?id=); the reviews
/// endpoint serves per-breed review lists and accepts new submissions.
pub struct BreedsApiClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL of the breeds endpoint
    breeds_url: String,
    /// Base URL of the reviews endpoint
    reviews_url: String,
}

/// Listing payload from the breeds endpoint
#[derive(Debug, Deserialize)]
struct BreedsResponse {
    breeds: Vec<BreedSummary>,
}

/// Per-breed payload from the reviews endpoint
#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    reviews: Vec<Review>,
}

/// Submission payload, tolerating both backend shapes
/// DOCUMENTATION: The documented contract is {success, review_id}; the
/// current backend answers 201 with the created review row instead, so the
/// created id is also accepted.
#[derive(Debug, Deserialize)]
struct SubmitPayload {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    review_id: Option<i64>,
    #[serde(default)]
    id: Option<i64>,
}

impl BreedsApiClient {
    /// Create a new client for the given endpoints
    pub fn new(breeds_url: String, reviews_url: String) -> Self {
        Self {
            client: Client::new(),
            breeds_url,
            reviews_url,
        }
    }

    /// Create a client from the application configuration
    /// DOCUMENTATION: Config::validate only warns about missing endpoint
    /// URLs (the crate works offline without them); building an HTTP client
    /// without them is an error here.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        if config.breeds_api_url.is_empty() {
            return Err(CatalogError::InvalidInput(
                "BREEDS_API_URL is not configured".to_string(),
            ));
        }
        if config.reviews_api_url.is_empty() {
            return Err(CatalogError::InvalidInput(
                "REVIEWS_API_URL is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| CatalogError::ExternalApiError(format!("Client build failed: {}", e)))?;
        Ok(Self {
            client,
            breeds_url: config.breeds_api_url.clone(),
            reviews_url: config.reviews_api_url.clone(),
        })
    }

    /// Reviews of one breed, newest first as the backend orders them
    pub async fn reviews_for_breed(&self, breed_id: i64) -> Result<Vec<Review>, CatalogError> {
        log::debug!("Fetching reviews for breed {}", breed_id);

        let response = self
            .client
            .get(&self.reviews_url)
            .query(&[("breed_id", breed_id.to_string())])
            .send()
            .await
            .map_err(|e| {
                log::error!("Reviews request failed: {}", e);
                CatalogError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Reviews API error {}: {}", status, body);
            return Err(CatalogError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let payload: ReviewsResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse reviews response: {}", e);
            CatalogError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        Ok(payload.reviews)
    }
}

/// Query-string pairs for the listing request
/// DOCUMENTATION: The "all" sentinel means "parameter omitted", exactly as
/// the original frontend builds its request. The text search never goes over
/// the wire - it is applied locally after the fetch.
fn filter_params(query: &BreedQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if query.size != FILTER_ALL {
        params.push(("size", query.size.clone()));
    }
    if query.activity_level != FILTER_ALL {
        params.push(("activity", query.activity_level.clone()));
    }
    if query.care_level != FILTER_ALL {
        params.push(("care", query.care_level.clone()));
    }
    params
}

impl BreedDataProvider for BreedsApiClient {
    /// List breeds, with categorical filtering server-side and text search
    /// applied locally
    async fn list_breeds(&self, query: &BreedQuery) -> Result<Vec<BreedSummary>, CatalogError> {
        let params = filter_params(query);
        log::debug!("Listing breeds with {} active filter(s)", params.len());

        let response = self
            .client
            .get(&self.breeds_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Breeds list request failed: {}", e);
                CatalogError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Breeds API error {}: {}", status, body);
            return Err(CatalogError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let payload: BreedsResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse breeds response: {}", e);
            CatalogError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        let mut breeds = payload.breeds;
        if !query.search_text.is_empty() {
            breeds.retain(|s| s.breed.name_matches(&query.search_text));
        }
        log::info!("Breeds list returned {} result(s)", breeds.len());
        Ok(breeds)
    }

    /// Fetch one breed with nested photos, characteristics and reviews
    async fn get_breed(&self, breed_id: i64) -> Result<Option<BreedDetail>, CatalogError> {
        log::debug!("Fetching breed detail: id={}", breed_id);

        let response = self
            .client
            .get(&self.breeds_url)
            .query(&[("id", breed_id.to_string())])
            .send()
            .await
            .map_err(|e| {
                log::error!("Breed detail request failed: {}", e);
                CatalogError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Breed detail API error {}: {}", status, body);
            return Err(CatalogError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let detail: BreedDetail = response.json().await.map_err(|e| {
            log::error!("Failed to parse breed detail: {}", e);
            CatalogError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        Ok(Some(detail))
    }

    /// Pull the raw collections for a wholesale snapshot replacement
    /// DOCUMENTATION: The backend has no bulk export, so the catalog is
    /// assembled from the listing plus one detail fetch per breed. The
    /// corpus is small (hundreds of records), so this stays cheap.
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, CatalogError> {
        let listing = self.list_breeds(&BreedQuery::all()).await?;

        let mut snapshot = CatalogSnapshot::default();
        for summary in &listing {
            match self.get_breed(summary.breed.id).await? {
                Some(detail) => {
                    snapshot.breeds.push(detail.breed);
                    snapshot.photos.extend(detail.photos);
                    snapshot.characteristics.extend(detail.characteristics);
                    snapshot.reviews.extend(detail.reviews);
                }
                None => {
                    // listed but gone by the time we fetched the detail
                    log::warn!("Breed {} vanished during catalog fetch", summary.breed.id);
                }
            }
        }

        log::info!(
            "Fetched catalog: {} breeds, {} reviews",
            snapshot.breeds.len(),
            snapshot.reviews.len()
        );
        Ok(snapshot)
    }
}

impl ReviewSink for BreedsApiClient {
    async fn submit_review(
        &self,
        request: &SubmitReviewRequest,
    ) -> Result<SubmitReviewResponse, CatalogError> {
        log::debug!("Submitting review for breed {}", request.breed_id);

        let response = self
            .client
            .post(&self.reviews_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Review submission failed: {}", e);
                CatalogError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Review submission rejected {}: {}", status, body);
            return Err(CatalogError::SubmissionRejected(format!(
                "{}: {}",
                status, body
            )));
        }

        let payload: SubmitPayload = response.json().await.map_err(|e| {
            log::error!("Failed to parse submission response: {}", e);
            CatalogError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        Ok(SubmitReviewResponse {
            success: payload.success.unwrap_or(true),
            review_id: payload.review_id.or(payload.id).unwrap_or_default(),
        })
    }
}
