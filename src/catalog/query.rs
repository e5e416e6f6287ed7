// src/catalog/query.rs
// DOCUMENTATION: Breed filtering - the query core
// PURPOSE: Pure, stable predicate composition over a catalog snapshot

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSnapshot;
use crate::models::Breed;

/// Sentinel meaning "filter disabled" for the categorical filters
pub const FILTER_ALL: &str = "all";

/// Breed search/filter parameters
/// DOCUMENTATION: All fields default to the inactive state, so
/// BreedQuery::default() selects the whole catalog. Categorical values are
/// compared by exact (case-sensitive) string equality, matching the backend's
/// data convention; the text search is a case-insensitive substring match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedQuery {
    /// Free-text search against the breed name(s); empty means "match all"
    #[serde(default)]
    pub search_text: String,

    /// Size filter, or "all"
    #[serde(default = "default_all")]
    pub size: String,

    /// Activity-level filter, or "all"
    #[serde(default = "default_all")]
    pub activity_level: String,

    /// Care-level filter, or "all"
    #[serde(default = "default_all")]
    pub care_level: String,
}

fn default_all() -> String {
    FILTER_ALL.to_string()
}

impl Default for BreedQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            size: default_all(),
            activity_level: default_all(),
            care_level: default_all(),
        }
    }
}

impl BreedQuery {
    /// Query that matches every breed
    pub fn all() -> Self {
        Self::default()
    }

    /// True when no predicate is active
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.size == FILTER_ALL
            && self.activity_level == FILTER_ALL
            && self.care_level == FILTER_ALL
    }

    /// Whether a single breed satisfies every active predicate (logical AND)
    pub fn matches(&self, breed: &Breed) -> bool {
        breed.name_matches(&self.search_text)
            && categorical_matches(&self.size, &breed.size)
            && categorical_matches(&self.activity_level, &breed.activity_level)
            && categorical_matches(&self.care_level, &breed.care_level)
    }
}

/// A categorical filter matches when disabled ("all") or exactly equal
fn categorical_matches(filter: &str, value: &str) -> bool {
    filter == FILTER_ALL || filter == value
}

/// Select the breeds matching a query
/// DOCUMENTATION: Stable filter - the result preserves the snapshot's
/// relative order, introduces no re-sorting, and is a fresh, fully
/// materialized list recomputed on every call. Never fails: an empty
/// snapshot or an unmatched filter value yields an empty result.
pub fn filter_breeds(snapshot: &CatalogSnapshot, query: &BreedQuery) -> Vec<Breed> {
    snapshot
        .breeds
        .iter()
        .filter(|b| query.matches(b))
        .cloned()
        .collect()
}
