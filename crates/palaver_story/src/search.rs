//! Debounced, last-request-wins candidate search.

use crate::{SearchConfig, StepCatalog};
use palaver_core::{Candidate, StepKind};
use palaver_error::PalaverResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Result of one search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results of the newest request
    Fresh(Vec<Candidate>),
    /// A newer request started before this one finished; results discarded
    Stale,
}

impl SearchOutcome {
    /// Candidates if fresh.
    pub fn into_fresh(self) -> Option<Vec<Candidate>> {
        match self {
            SearchOutcome::Fresh(candidates) => Some(candidates),
            SearchOutcome::Stale => None,
        }
    }

    /// Whether this outcome was superseded.
    pub fn is_stale(&self) -> bool {
        matches!(self, SearchOutcome::Stale)
    }
}

/// Search-as-you-type against a [`StepCatalog`].
///
/// Every call bumps a generation counter and waits out the debounce window.
/// A request that is no longer the newest after the wait is abandoned
/// without touching the catalog; one that is overtaken while the catalog
/// answers has its results discarded. Ordering is by request generation,
/// never by completion order.
///
/// # Example
/// ```
/// use palaver_core::{Candidate, StepKind};
/// use palaver_story::{CandidateSearch, InMemoryCatalog, SearchConfig, SearchOutcome};
///
/// # #[tokio::main]
/// # async fn main() -> palaver_error::PalaverResult<()> {
/// let catalog = InMemoryCatalog::from_candidates([
///     Candidate::new(StepKind::Action, "action_weather", "Weather lookup"),
/// ]);
/// let search = CandidateSearch::new(catalog, SearchConfig::default().with_debounce_ms(0));
/// let outcome = search.search(StepKind::Action, "weather").await?;
/// assert!(matches!(outcome, SearchOutcome::Fresh(ref c) if c.len() == 1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CandidateSearch<C> {
    catalog: C,
    config: SearchConfig,
    generation: AtomicU64,
}

impl<C: StepCatalog> CandidateSearch<C> {
    /// Creates a search front for `catalog`.
    pub fn new(catalog: C, config: SearchConfig) -> Self {
        debug!(
            debounce_ms = config.debounce_ms(),
            min_query_len = config.min_query_len(),
            limit = config.limit(),
            "Creating CandidateSearch"
        );
        Self {
            catalog,
            config,
            generation: AtomicU64::new(0),
        }
    }

    /// The wrapped catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Generation of the newest request issued so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether `generation` is still the newest request.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation() == generation
    }

    /// Marks every in-flight request as stale.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Searches for candidates of `kind`, superseding earlier requests.
    ///
    /// # Errors
    ///
    /// Returns the catalog error if the request is still the newest when it
    /// fails. Failures of superseded requests are reported as
    /// [`SearchOutcome::Stale`].
    #[instrument(skip(self))]
    pub async fn search(&self, kind: StepKind, query: &str) -> PalaverResult<SearchOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let debounce = Duration::from_millis(*self.config.debounce_ms());
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }
        if !self.is_current(generation) {
            debug!(generation, "Superseded during debounce");
            return Ok(SearchOutcome::Stale);
        }

        let query = query.trim();
        if query.chars().count() < *self.config.min_query_len() {
            debug!(generation, "Query below minimum length");
            return Ok(SearchOutcome::Fresh(Vec::new()));
        }

        let result = self.catalog.search(kind, query, *self.config.limit()).await;
        if !self.is_current(generation) {
            warn!(generation, current = self.generation(), "Discarding stale search results");
            return Ok(SearchOutcome::Stale);
        }

        let candidates = result?;
        debug!(generation, found = candidates.len(), "Search complete");
        Ok(SearchOutcome::Fresh(candidates))
    }
}
