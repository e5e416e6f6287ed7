// src/errors.rs
// DOCUMENTATION: Custom error types
// PURPOSE: Centralized error handling for the catalog crate

use thiserror::Error;

/// Catalog-specific error types
/// DOCUMENTATION: Errors only occur at the service/client boundary.
/// The pure query functions never fail: missing data yields empty results.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Breed not found with id: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Review submission rejected: {0}")]
    SubmissionRejected(String),
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CatalogError::ValidationError(errors.to_string())
    }
}
