//! Search Pipeline Controller
//!
//! Owns the background driver that turns a stream of query-text edits into published
//! result lists.
//!
//! ## Lifecycle
//! 1. **Loading**: the corpus loader and the index build run once on the blocking pool.
//!    Query text that arrives meanwhile is held in the channel (only the latest value).
//! 2. **Debounce**: every edit restarts the quiescence window; only a value that survives
//!    the whole window is searched (switch-latest, not a queue).
//! 3. **Searching**: the settled query runs on the blocking pool with `is_searching` set.
//! 4. **Published**: results, the query and the search generation are published together.
//!
//! An edit that arrives while a search is in flight supersedes it: the driver stops awaiting
//! the old job and its result is dropped on arrival. Publications are also tagged with a
//! generation so an older search can never overwrite a newer one.

use super::types::{QueryEdit, SearchConfig, SearchState};
use crate::corpus::catalog::HymnCatalog;
use crate::corpus::types::Hymn;
use crate::search::engine::search;
use crate::search::index::SearchIndex;
use crate::search::types::SearchResult;

use anyhow::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle to a running search pipeline. Dropping it stops the driver.
pub struct SearchController {
    query_tx: watch::Sender<QueryEdit>,
    state_rx: watch::Receiver<SearchState>,
    catalog: Arc<OnceLock<Arc<HymnCatalog>>>,
    searches: Arc<AtomicU64>,
    driver: JoinHandle<()>,
}

impl SearchController {
    /// Starts the pipeline on the current tokio runtime.
    ///
    /// `loader` runs once on the blocking pool. If it fails, the error is logged and the
    /// pipeline continues with an empty corpus.
    pub fn spawn<L>(loader: L, config: SearchConfig) -> Self
    where
        L: FnOnce() -> Result<Vec<Hymn>> + Send + 'static,
    {
        let (query_tx, query_rx) = watch::channel(QueryEdit::default());
        let (state_tx, state_rx) = watch::channel(SearchState::default());
        let catalog = Arc::new(OnceLock::new());
        let searches = Arc::new(AtomicU64::new(0));

        tracing::info!(
            "Starting search pipeline (debounce {:?}, min query length {})",
            config.debounce,
            config.min_query_len
        );

        let driver = SearchDriver {
            config,
            query_rx,
            state_tx,
            catalog: catalog.clone(),
            searches: searches.clone(),
            generation: 0,
        };
        let driver = tokio::spawn(driver.run(loader));

        Self {
            query_tx,
            state_rx,
            catalog,
            searches,
            driver,
        }
    }

    /// Replaces the current query text. This is the only input of the pipeline.
    ///
    /// # Returns
    /// The sequence number of this edit, to be passed to [`Self::wait_for_edit`].
    pub fn set_query_text(&self, text: impl Into<String>) -> u64 {
        let text = text.into();
        let mut seq = 0;
        self.query_tx.send_modify(|edit| {
            edit.seq += 1;
            edit.text = text;
            seq = edit.seq;
        });
        seq
    }

    pub fn is_loading(&self) -> bool {
        self.state_rx.borrow().is_loading
    }

    pub fn is_searching(&self) -> bool {
        self.state_rx.borrow().is_searching
    }

    pub fn results(&self) -> Arc<Vec<SearchResult>> {
        self.state_rx.borrow().results.clone()
    }

    pub fn state(&self) -> SearchState {
        self.state_rx.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state_rx.clone()
    }

    /// The loaded corpus, once loading has finished.
    pub fn catalog(&self) -> Option<Arc<HymnCatalog>> {
        self.catalog.get().cloned()
    }

    /// Number of searches dispatched to the index so far, including superseded ones.
    pub fn search_count(&self) -> u64 {
        self.searches.load(Ordering::SeqCst)
    }

    /// Waits for the corpus and index to be ready and returns the catalog.
    pub async fn wait_until_ready(&self) -> Arc<HymnCatalog> {
        let mut rx = self.state_rx.clone();
        if rx.wait_for(|state| !state.is_loading).await.is_err() {
            tracing::warn!("Search pipeline stopped before the index was ready");
        }
        self.catalog().unwrap_or_default()
    }

    /// Waits until the edit numbered `edit`, or a later one, has been answered.
    ///
    /// Edits superseded inside the debounce window are answered by the edit that replaced them.
    pub async fn wait_for_edit(&self, edit: u64) -> Result<SearchState> {
        let mut rx = self.state_rx.clone();
        let state = rx
            .wait_for(|state| !state.is_loading && !state.is_searching && state.edit >= edit)
            .await
            .map_err(|_| anyhow::anyhow!("Search pipeline stopped before answering edit {}", edit))?;
        Ok(state.clone())
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

/// What happened to a settled query.
enum Outcome {
    Published,
    Superseded,
    Closed,
}

/// The background half of the pipeline; the only writer of `SearchState`.
struct SearchDriver {
    config: SearchConfig,
    query_rx: watch::Receiver<QueryEdit>,
    state_tx: watch::Sender<SearchState>,
    catalog: Arc<OnceLock<Arc<HymnCatalog>>>,
    searches: Arc<AtomicU64>,
    generation: u64,
}

impl SearchDriver {
    async fn run<L>(mut self, loader: L)
    where
        L: FnOnce() -> Result<Vec<Hymn>> + Send + 'static,
    {
        let index = self.prepare(loader).await;

        // Text typed while loading is still in the channel; debounce it like any other edit.
        let held = self.query_rx.borrow_and_update().clone();
        let mut next = if held.seq == 0 {
            None
        } else {
            tracing::debug!("Evaluating query {:?} received during loading", held.text);
            self.settle().await
        };

        loop {
            let query = match next.take() {
                Some(query) => query,
                None => match self.next_settled().await {
                    Some(query) => query,
                    None => break,
                },
            };

            match self.execute(&index, query).await {
                Outcome::Published => {}
                Outcome::Superseded => match self.settle().await {
                    Some(query) => next = Some(query),
                    None => break,
                },
                Outcome::Closed => break,
            }
        }

        tracing::info!("Search pipeline stopped");
    }

    /// Loads the corpus and builds the index on the blocking pool.
    async fn prepare<L>(&mut self, loader: L) -> Arc<SearchIndex>
    where
        L: FnOnce() -> Result<Vec<Hymn>> + Send + 'static,
    {
        let started = Instant::now();

        let built = tokio::task::spawn_blocking(move || {
            let hymns = loader().unwrap_or_else(|e| {
                tracing::error!("Corpus unavailable, continuing with no hymns: {:#}", e);
                Vec::new()
            });
            let catalog = HymnCatalog::new(hymns);
            let index = SearchIndex::build(catalog.hymns());
            (catalog, index)
        })
        .await;

        let (catalog, index) = match built {
            Ok(built) => built,
            Err(e) => {
                tracing::error!("Index build failed, continuing with no hymns: {}", e);
                (HymnCatalog::default(), SearchIndex::default())
            }
        };

        tracing::info!(
            "Index ready: {} hymns, {} tokens in {:?}",
            catalog.len(),
            index.token_count(),
            started.elapsed()
        );

        // The catalog must be visible before `is_loading` flips.
        let _ = self.catalog.set(Arc::new(catalog));
        self.state_tx.send_modify(|state| state.is_loading = false);

        Arc::new(index)
    }

    /// Waits for the next edit, then for it to settle.
    async fn next_settled(&mut self) -> Option<QueryEdit> {
        self.query_rx.changed().await.ok()?;
        self.settle().await
    }

    /// Restarts the debounce window on every edit and returns the value that survives it.
    ///
    /// Returns `None` once the controller handle is gone.
    async fn settle(&mut self) -> Option<QueryEdit> {
        loop {
            tokio::select! {
                changed = self.query_rx.changed() => {
                    changed.ok()?;
                    tracing::trace!("Query edited, restarting debounce window");
                }
                _ = tokio::time::sleep(self.config.debounce) => {
                    return Some(self.query_rx.borrow_and_update().clone());
                }
            }
        }
    }

    async fn execute(&mut self, index: &Arc<SearchIndex>, edit: QueryEdit) -> Outcome {
        let QueryEdit { seq, text: query } = edit;

        if query.trim().chars().count() < self.config.min_query_len {
            tracing::debug!("Query {:?} below minimum length, clearing results", query);
            self.state_tx.send_modify(|state| {
                state.is_searching = false;
                state.results = Arc::new(Vec::new());
                state.query = query;
                state.edit = seq;
            });
            return Outcome::Published;
        }

        self.generation += 1;
        let generation = self.generation;
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.state_tx.send_modify(|state| state.is_searching = true);

        tracing::debug!("Search #{} for {:?} dispatched", generation, query);

        let job = {
            let index = index.clone();
            let query = query.clone();
            tokio::task::spawn_blocking(move || search(&query, &index))
        };

        tokio::select! {
            biased;
            changed = self.query_rx.changed() => {
                if changed.is_err() {
                    return Outcome::Closed;
                }
                // The job keeps running detached; its result is dropped when it lands.
                tracing::debug!("Search #{} for {:?} superseded", generation, query);
                Outcome::Superseded
            }
            joined = job => {
                let results = match joined {
                    Ok(results) => results,
                    Err(e) => {
                        tracing::error!("Search #{} for {:?} failed: {}", generation, query, e);
                        Vec::new()
                    }
                };
                self.publish(generation, seq, query, results);
                Outcome::Published
            }
        }
    }

    fn publish(&self, generation: u64, edit: u64, query: String, results: Vec<SearchResult>) {
        let count = results.len();
        let published = self.state_tx.send_if_modified(|state| {
            if generation < state.generation {
                return false;
            }
            state.is_searching = false;
            state.results = Arc::new(results);
            state.query = query;
            state.generation = generation;
            state.edit = edit;
            true
        });

        if published {
            tracing::debug!("Search #{} published {} results", generation, count);
        } else {
            tracing::debug!("Search #{} discarded as stale", generation);
        }
    }
}
