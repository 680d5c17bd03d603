//! Asset list state — pagination, debounced search, change notifications.
//!
//! The app owns an [`AssetListStore`] for the lifetime of the list screen.
//! Every list mutation goes through the store's operations, and subscribers
//! are told after each successful replace or append. Failed fetches are logged
//! and leave the current list untouched.
//!
//! Requires a running tokio runtime: the search debounce timer is a spawned task.

use super::wire::AssetQuery;
use super::Asset;
use crate::error::FetchError;
use crate::network::DEFAULT_SEARCH_DEBOUNCE;

use async_lock::RwLock;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Anything that can answer an asset listing query.
#[async_trait]
pub trait AssetSource: Send + Sync + 'static {
    async fn fetch_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, FetchError>;
}

#[async_trait]
impl<T: AssetSource + ?Sized> AssetSource for Arc<T> {
    async fn fetch_assets(&self, query: &AssetQuery) -> Result<Vec<Asset>, FetchError> {
        (**self).fetch_assets(query).await
    }
}

/// Emitted after a successful list mutation. Subscribers re-read the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A page-0 response replaced the whole list.
    Replaced { count: usize },
    /// A later page was appended.
    Appended { added: usize, total: usize },
}

#[derive(Default)]
struct StoreState {
    page: u32,
    assets: Vec<Asset>,
    /// Text of the active (or pending) search; empty when unfiltered.
    search_text: String,
    debounce: Option<JoinHandle<()>>,
    /// Bumped by every page-0 load. Responses tagged with an older value are dropped.
    generation: u64,
    last_error: Option<String>,
}

struct Inner<S> {
    source: S,
    debounce: Duration,
    state: RwLock<StoreState>,
    events: broadcast::Sender<StoreEvent>,
}

impl<S> Drop for Inner<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.state.get_mut().debounce.take() {
            handle.abort();
        }
    }
}

/// Paginated, searchable asset list.
///
/// Cloning is cheap and yields a handle to the same list.
pub struct AssetListStore<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for AssetListStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: AssetSource> AssetListStore<S> {
    /// Store with the default 800 ms search debounce.
    pub fn new(source: S) -> Self {
        AssetListStoreBuilder::default().build(source)
    }

    /// Initial unfiltered load of the first page.
    pub async fn start(&self) {
        self.load_page(0).await;
    }

    /// Fetch `page` of the unfiltered listing. Page 0 replaces the list,
    /// any other page is appended to it.
    pub async fn load_page(&self, page: u32) {
        self.load(AssetQuery::page(page)).await;
    }

    /// Filter the list by symbol or name.
    ///
    /// Cancels any pending search. Empty text reloads the unfiltered first page
    /// immediately; anything else is sent once the debounce delay passes without
    /// another call. Either way the page index goes back to 0.
    pub async fn search(&self, text: &str) {
        let mut state = self.inner.state.write().await;
        if let Some(pending) = state.debounce.take() {
            pending.abort();
        }
        state.page = 0;

        if text.is_empty() {
            state.search_text.clear();
            drop(state);
            self.load(AssetQuery::page(0)).await;
            return;
        }

        state.search_text = text.to_string();
        let query = AssetQuery::search(text, 0);
        let delay = self.inner.debounce;
        let weak = Arc::downgrade(&self.inner);

        state.debounce = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // Detached so that a later search cancels only the timer, never the request.
            tokio::spawn(async move {
                let store = AssetListStore { inner };
                store.load(query).await;
            });
        }));
    }

    /// Advance the page index without fetching. Returns the new index.
    pub async fn next_page(&self) -> u32 {
        let mut state = self.inner.state.write().await;
        state.page += 1;
        state.page
    }

    pub async fn reset_page(&self) {
        self.inner.state.write().await.page = 0;
    }

    /// Advance the page index, then fetch and append that page.
    pub async fn load_next_page(&self) {
        let page = self.next_page().await;
        self.load_page(page).await;
    }

    /// Pull-to-refresh: re-run the active search (debounced), or reload page 0.
    pub async fn refresh(&self) {
        let text = self.inner.state.read().await.search_text.clone();
        if text.is_empty() {
            self.reset_page().await;
            self.load_page(0).await;
        } else {
            self.search(&text).await;
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub async fn page(&self) -> u32 {
        self.inner.state.read().await.page
    }

    /// Snapshot of the current list.
    pub async fn assets(&self) -> Vec<Asset> {
        self.inner.state.read().await.assets.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.state.read().await.assets.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.state.read().await.assets.is_empty()
    }

    pub async fn is_searching(&self) -> bool {
        !self.inner.state.read().await.search_text.is_empty()
    }

    pub async fn search_text(&self) -> String {
        self.inner.state.read().await.search_text.clone()
    }

    /// Message of the most recent failed fetch, cleared by the next success.
    pub async fn last_error(&self) -> Option<String> {
        self.inner.state.read().await.last_error.clone()
    }

    /// New receiver for list change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn load(&self, query: AssetQuery) {
        let generation = {
            let mut state = self.inner.state.write().await;
            if query.page == 0 {
                state.generation += 1;
            }
            state.generation
        };

        tracing::debug!(
            search = %query.search,
            page = query.page,
            generation,
            "Loading assets"
        );

        match self.inner.source.fetch_assets(&query).await {
            Ok(assets) => self.apply(generation, query.page, assets).await,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    search = %query.search,
                    page = query.page,
                    "Asset fetch failed, keeping current list"
                );
                let mut state = self.inner.state.write().await;
                if state.generation == generation {
                    state.last_error = Some(e.to_string());
                }
            }
        }
    }

    async fn apply(&self, generation: u64, page: u32, assets: Vec<Asset>) {
        let event = {
            let mut state = self.inner.state.write().await;
            if state.generation != generation {
                tracing::debug!(
                    page,
                    generation,
                    current = state.generation,
                    "Discarding stale asset response"
                );
                return;
            }

            state.last_error = None;
            if page == 0 {
                state.assets = assets;
                StoreEvent::Replaced {
                    count: state.assets.len(),
                }
            } else {
                let added = assets.len();
                state.assets.extend(assets);
                StoreEvent::Appended {
                    added,
                    total: state.assets.len(),
                }
            }
        };

        // No subscribers is fine.
        let _ = self.inner.events.send(event);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AssetListStoreBuilder {
    debounce: Duration,
    event_capacity: usize,
}

impl Default for AssetListStoreBuilder {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_SEARCH_DEBOUNCE,
            event_capacity: 64,
        }
    }
}

impl AssetListStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quiet period before a non-empty search is sent.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    /// Buffered events per subscriber before slow receivers start lagging.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    pub fn build<S: AssetSource>(self, source: S) -> AssetListStore<S> {
        let (events, _) = broadcast::channel(self.event_capacity.max(1));
        AssetListStore {
            inner: Arc::new(Inner {
                source,
                debounce: self.debounce,
                state: RwLock::new(StoreState::default()),
                events,
            }),
        }
    }
}
