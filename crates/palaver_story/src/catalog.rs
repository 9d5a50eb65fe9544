//! Candidate catalog: where intents, actions and responses come from.

use async_trait::async_trait;
use palaver_core::{Candidate, StepKind};
use palaver_error::PalaverResult;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Backend lookup of entities that can be appended as steps.
#[async_trait]
pub trait StepCatalog: Send + Sync {
    /// Returns up to `limit` candidates of `kind` matching `query`.
    async fn search(
        &self,
        kind: StepKind,
        query: &str,
        limit: usize,
    ) -> PalaverResult<Vec<Candidate>>;

    /// Display name for a referenced entity, `None` if the backend does not
    /// know it.
    async fn display_name(
        &self,
        kind: StepKind,
        reference_id: &str,
    ) -> PalaverResult<Option<String>>;
}

#[async_trait]
impl<T: StepCatalog + ?Sized> StepCatalog for Arc<T> {
    async fn search(
        &self,
        kind: StepKind,
        query: &str,
        limit: usize,
    ) -> PalaverResult<Vec<Candidate>> {
        (**self).search(kind, query, limit).await
    }

    async fn display_name(
        &self,
        kind: StepKind,
        reference_id: &str,
    ) -> PalaverResult<Option<String>> {
        (**self).display_name(kind, reference_id).await
    }
}

/// Catalog held in memory.
///
/// Matches case-insensitively on reference id or display name. Useful for
/// tests and for the command line harness.
///
/// # Example
/// ```
/// use palaver_core::{Candidate, StepKind};
/// use palaver_story::{InMemoryCatalog, StepCatalog};
///
/// # #[tokio::main]
/// # async fn main() -> palaver_error::PalaverResult<()> {
/// let catalog = InMemoryCatalog::from_candidates([
///     Candidate::new(StepKind::Intent, "greet", "Greet"),
///     Candidate::new(StepKind::Intent, "goodbye", "Goodbye"),
/// ]);
/// let found = catalog.search(StepKind::Intent, "GRE", 10).await?;
/// assert_eq!(found.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    candidates: Arc<RwLock<Vec<Candidate>>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-filled with candidates.
    pub fn from_candidates(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        Self {
            candidates: Arc::new(RwLock::new(candidates.into_iter().collect())),
        }
    }

    /// Adds a candidate.
    pub async fn insert(&self, candidate: Candidate) {
        self.candidates.write().await.push(candidate);
    }

    /// All candidates of `kind`.
    pub async fn of_kind(&self, kind: StepKind) -> Vec<Candidate> {
        self.candidates
            .read()
            .await
            .iter()
            .filter(|c| *c.kind() == kind)
            .cloned()
            .collect()
    }

    /// Number of stored candidates.
    pub async fn len(&self) -> usize {
        self.candidates.read().await.len()
    }

    /// Whether the catalog is empty.
    pub async fn is_empty(&self) -> bool {
        self.candidates.read().await.is_empty()
    }
}

#[async_trait]
impl StepCatalog for InMemoryCatalog {
    #[instrument(skip(self))]
    async fn search(
        &self,
        kind: StepKind,
        query: &str,
        limit: usize,
    ) -> PalaverResult<Vec<Candidate>> {
        let needle = query.to_lowercase();
        let found: Vec<Candidate> = self
            .candidates
            .read()
            .await
            .iter()
            .filter(|c| *c.kind() == kind)
            .filter(|c| {
                c.reference_id().to_lowercase().contains(&needle)
                    || c.display_name().to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect();
        debug!(found = found.len(), "In-memory search complete");
        Ok(found)
    }

    async fn display_name(
        &self,
        kind: StepKind,
        reference_id: &str,
    ) -> PalaverResult<Option<String>> {
        Ok(self
            .candidates
            .read()
            .await
            .iter()
            .find(|c| *c.kind() == kind && c.reference_id() == reference_id)
            .map(|c| c.display_name().clone()))
    }
}
