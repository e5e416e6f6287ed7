// src/store/repository.rs
// DOCUMENTATION: In-memory breed repository
// PURPOSE: Own the current catalog snapshot; replace it wholesale on reload

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::CatalogSnapshot;
use crate::errors::CatalogError;
use crate::services::BreedDataProvider;

/// Holds the current catalog snapshot behind a read/write lock
/// DOCUMENTATION: Readers grab an Arc to the snapshot and keep a consistent
/// view for the whole query, even across a concurrent reload. Reloads build
/// the next snapshot off-lock and swap it in atomically, so no reader ever
/// observes a torn update.
pub struct BreedRepository {
    snapshot: RwLock<Arc<CatalogSnapshot>>,
}

impl BreedRepository {
    /// Create an empty repository (nothing loaded yet)
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(CatalogSnapshot::default())),
        }
    }

    /// Create a repository pre-loaded with a snapshot
    pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Current snapshot (cheap Arc clone)
    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Replace the snapshot wholesale
    pub async fn replace(&self, snapshot: CatalogSnapshot) {
        let mut guard = self.snapshot.write().await;
        *guard = Arc::new(snapshot);
        log::debug!(
            "Replaced catalog snapshot: {} breeds, {} photos, {} characteristics, {} reviews",
            guard.breeds.len(),
            guard.photos.len(),
            guard.characteristics.len(),
            guard.reviews.len()
        );
    }

    /// Reload everything from the data provider
    /// DOCUMENTATION: The old snapshot stays in place if the fetch fails;
    /// only a fully successful fetch replaces it.
    pub async fn reload<P: BreedDataProvider>(&self, provider: &P) -> Result<(), CatalogError> {
        let next = provider.fetch_catalog().await?;
        log::info!("Reloaded catalog: {} breeds", next.breeds.len());
        self.replace(next).await;
        Ok(())
    }
}

impl Default for BreedRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_data::{sample_snapshot, StaticBreedProvider};

    #[tokio::test]
    async fn test_new_repository_is_empty() {
        let repo = BreedRepository::new();
        assert!(repo.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_is_wholesale() {
        let repo = BreedRepository::with_snapshot(sample_snapshot());
        let held = repo.snapshot().await;
        let before = held.breeds.len();
        assert!(before > 0);

        repo.replace(CatalogSnapshot::default()).await;

        // the held Arc still sees the old, consistent view
        assert_eq!(held.breeds.len(), before);
        // new readers see the replacement
        assert!(repo.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_reload_from_provider() {
        let _ = env_logger::builder().is_test(true).try_init();

        let repo = BreedRepository::new();
        let provider = StaticBreedProvider::new();
        repo.reload(&provider).await.unwrap();

        let snapshot = repo.snapshot().await;
        assert!(!snapshot.is_empty());
        assert!(snapshot.breed_by_id(1).is_some());
    }
}
