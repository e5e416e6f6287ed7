// src/lib.rs
// DOCUMENTATION: Crate entry point
// PURPOSE: Expose the breed catalog core to the presentation layer

//! Breed catalog core: an in-memory repository of dog breed records plus a
//! pure query/filter/aggregate engine over it.
//!
//! Data flows in from a [`services::BreedDataProvider`] (the HTTP backend
//! client or the built-in sample provider), is held as an immutable
//! [`catalog::CatalogSnapshot`] inside the [`store::BreedRepository`], and is
//! served to whatever view layer sits on top through [`services::BreedService`].
//! Review submissions flow the other way through a [`services::ReviewSink`],
//! followed by a wholesale catalog reload.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;

pub use catalog::{
    average_rating, compare_breeds, display_rating, filter_breeds, BreedComparison, BreedQuery,
    CatalogSnapshot,
};
pub use config::Config;
pub use errors::CatalogError;
pub use models::{
    Breed, BreedDetail, BreedSummary, Characteristic, Photo, Review, SubmitReviewRequest,
    SubmitReviewResponse,
};
pub use services::{BreedDataProvider, BreedService, BreedsApiClient, ReviewSink};
pub use store::BreedRepository;
