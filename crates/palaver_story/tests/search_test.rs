//! Debounced candidate search: last request wins by generation.

use async_trait::async_trait;
use palaver_core::{Candidate, StepKind};
use palaver_error::{CatalogError, CatalogErrorKind, PalaverResult};
use palaver_story::{CandidateSearch, InMemoryCatalog, SearchConfig, SearchOutcome, StepCatalog};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_candidates([
        Candidate::new(StepKind::Intent, "greet", "Greet"),
        Candidate::new(StepKind::Intent, "goodbye", "Say goodbye"),
        Candidate::new(StepKind::Action, "action_greet", "Greet back"),
        Candidate::new(StepKind::Response, "utter_greet", "Greeting"),
    ])
}

/// Catalog whose latency depends on the query, counting calls.
struct SlowCatalog {
    inner: InMemoryCatalog,
    calls: AtomicUsize,
}

#[async_trait]
impl StepCatalog for SlowCatalog {
    async fn search(
        &self,
        kind: StepKind,
        query: &str,
        limit: usize,
    ) -> PalaverResult<Vec<Candidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = if query.starts_with("slow") { 1_000 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if query.contains("fail") {
            Err(CatalogError::new(CatalogErrorKind::Unavailable("boom".into())))?
        }
        let query = query.trim_start_matches("slow").trim_start_matches("fail");
        self.inner.search(kind, query, limit).await
    }

    async fn display_name(
        &self,
        kind: StepKind,
        reference_id: &str,
    ) -> PalaverResult<Option<String>> {
        self.inner.display_name(kind, reference_id).await
    }
}

fn slow() -> SlowCatalog {
    SlowCatalog {
        inner: catalog(),
        calls: AtomicUsize::new(0),
    }
}

#[tokio::test(start_paused = true)]
async fn single_search_returns_matches_of_kind() {
    let search = CandidateSearch::new(catalog(), SearchConfig::default());
    let outcome = search.search(StepKind::Intent, "greet").await.unwrap();
    let found = outcome.into_fresh().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].reference_id(), "greet");
}

#[tokio::test(start_paused = true)]
async fn keystrokes_within_debounce_only_query_once() {
    let search = CandidateSearch::new(slow(), SearchConfig::default());

    let (first, second, third) = tokio::join!(
        search.search(StepKind::Intent, "g"),
        search.search(StepKind::Intent, "gr"),
        search.search(StepKind::Intent, "gre"),
    );

    assert!(first.unwrap().is_stale());
    assert!(second.unwrap().is_stale());
    assert_eq!(third.unwrap().into_fresh().unwrap().len(), 1);
    assert_eq!(search.catalog().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn late_response_of_older_request_is_discarded() {
    let search = CandidateSearch::new(slow(), SearchConfig::default().with_debounce_ms(50));

    let older = search.search(StepKind::Intent, "slowgoodbye");
    let newer = async {
        // Let the older request clear its debounce window first.
        tokio::time::sleep(Duration::from_millis(100)).await;
        search.search(StepKind::Intent, "greet").await
    };
    let (older, newer) = tokio::join!(older, newer);

    assert_eq!(older.unwrap(), SearchOutcome::Stale);
    let fresh = newer.unwrap().into_fresh().unwrap();
    assert_eq!(fresh[0].reference_id(), "greet");
    assert_eq!(search.catalog().calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn failure_of_current_request_is_reported() {
    let search = CandidateSearch::new(slow(), SearchConfig::default());
    assert!(search.search(StepKind::Intent, "failgreet").await.is_err());
}

#[tokio::test(start_paused = true)]
async fn failure_of_superseded_request_is_stale() {
    let search = CandidateSearch::new(slow(), SearchConfig::default().with_debounce_ms(0));

    let older = search.search(StepKind::Intent, "slowfail");
    let newer = async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        search.search(StepKind::Intent, "greet").await
    };
    let (older, newer) = tokio::join!(older, newer);

    assert!(older.unwrap().is_stale());
    assert!(newer.is_ok());
}

#[tokio::test(start_paused = true)]
async fn short_queries_skip_the_catalog() {
    let config = SearchConfig::default().with_min_query_len(3);
    let search = CandidateSearch::new(slow(), config);

    let outcome = search.search(StepKind::Intent, " gr ").await.unwrap();
    assert_eq!(outcome, SearchOutcome::Fresh(Vec::new()));
    assert_eq!(search.catalog().calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn invalidate_discards_in_flight_request() {
    let search = CandidateSearch::new(catalog(), SearchConfig::default());
    let pending = search.search(StepKind::Intent, "greet");
    let cancel = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        search.invalidate();
    };
    let (outcome, ()) = tokio::join!(pending, cancel);
    assert!(outcome.unwrap().is_stale());
}

#[tokio::test]
async fn limit_caps_results() {
    let config = SearchConfig::default()
        .with_debounce_ms(0)
        .with_limit(1);
    let search = CandidateSearch::new(catalog(), config);
    let found = search
        .search(StepKind::Intent, "")
        .await
        .unwrap()
        .into_fresh()
        .unwrap();
    assert_eq!(found.len(), 1);
}
