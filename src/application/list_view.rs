// Fetch, filter and paginate state for one list screen
use crate::application::filter_engine;
use crate::application::pagination::{PageState, PageWindow};
use crate::application::view_state::{Loadable, RequestToken, ViewState};
use crate::domain::maintenance::MaintenanceRecord;
use crate::error::{FetchError, ViewFailure};
use crate::infrastructure::cache_store::{CacheKey, CacheStore};
use crate::infrastructure::config::ViewSettings;

/// Projects the field a list view filters on.
pub type KeyExtractor = fn(&MaintenanceRecord) -> Option<&str>;

/// Why a ready list shows no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    NoRecords,
    NoMatches { query: String },
}

/// Dataset, filter query, candidate keys and page position of one list.
///
/// The dataset is replaced wholesale on every load. Replacing it or changing
/// the query always puts the list back on page 1.
#[derive(Debug, Clone)]
pub struct ListView {
    records: Loadable<Vec<MaintenanceRecord>>,
    key: KeyExtractor,
    query: String,
    candidate_keys: Vec<String>,
    page: PageState,
}

impl ListView {
    pub fn new(key: KeyExtractor, settings: ViewSettings) -> Self {
        Self {
            records: Loadable::new(),
            key,
            query: String::new(),
            candidate_keys: Vec::new(),
            page: PageState::new(settings.page_size, settings.max_visible_buttons),
        }
    }

    pub fn state(&self) -> &ViewState<Vec<MaintenanceRecord>> {
        self.records.state()
    }

    pub fn records(&self) -> &[MaintenanceRecord] {
        self.records.state().data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Distinct filter keys of the current dataset, for a picker.
    pub fn candidate_keys(&self) -> &[String] {
        &self.candidate_keys
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.records.begin()
    }

    /// Apply a fetch outcome. Returns the dataset when it was accepted, for write-through.
    pub fn complete(
        &mut self,
        request: RequestToken,
        result: Result<Vec<MaintenanceRecord>, FetchError>,
    ) -> Option<&Vec<MaintenanceRecord>> {
        if self.records.state().in_flight() != Some(request) {
            self.records.complete(request, result);
            return None;
        }
        let accepted = self.records.complete(request, result).is_some();
        self.dataset_replaced();
        if !accepted {
            return None;
        }
        tracing::info!("List ready with {} records", self.records().len());
        self.records.state().data()
    }

    pub fn show(&mut self, records: Vec<MaintenanceRecord>) {
        self.records.show(records);
        self.dataset_replaced();
    }

    pub fn fail(&mut self, failure: ViewFailure) {
        tracing::error!("List failed: {}", failure);
        self.records.fail(failure);
        self.dataset_replaced();
    }

    /// Forget the dataset and the user's query; an in-flight load becomes stale.
    pub fn unmount(&mut self) {
        self.records.reset();
        self.query.clear();
        self.dataset_replaced();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page.reset();
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    pub fn filtered(&self) -> Vec<&MaintenanceRecord> {
        filter_engine::apply(self.records(), &self.query, self.key)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.filtered_count())
    }

    pub fn current_page_records(&self) -> Vec<&MaintenanceRecord> {
        let filtered = self.filtered();
        self.page.slice(&filtered).to_vec()
    }

    pub fn page_window(&self) -> PageWindow {
        self.page.window(self.filtered_count())
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        let count = self.filtered_count();
        self.page.go_to(page, count)
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.page.current_page().saturating_sub(1))
    }

    /// Only meaningful once ready: distinguishes an empty dataset from a filter with no hits.
    pub fn empty_state(&self) -> Option<EmptyState> {
        let records = self.records.state().data()?;
        if records.is_empty() {
            Some(EmptyState::NoRecords)
        } else if self.filtered_count() == 0 {
            Some(EmptyState::NoMatches {
                query: self.query.clone(),
            })
        } else {
            None
        }
    }

    fn dataset_replaced(&mut self) {
        self.candidate_keys = filter_engine::distinct_keys(self.records(), self.key);
        self.page.reset();
    }
}

/// A [`ListView`] backed by one fixed session-cache key.
#[derive(Debug, Clone)]
pub struct CachedList {
    key: CacheKey,
    cache: CacheStore,
    list: ListView,
}

impl CachedList {
    pub fn new(key: CacheKey, cache: CacheStore, list: ListView) -> Self {
        Self { key, cache, list }
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }

    /// Serve from cache when possible. Returns a token only when a fetch is needed.
    pub fn begin_mount(&mut self) -> Option<RequestToken> {
        if let Some(records) = self.cache.get::<Vec<MaintenanceRecord>>(self.key) {
            self.list.show(records);
            return None;
        }
        tracing::debug!("Cache miss for {}, fetching", self.key);
        Some(self.list.begin_load())
    }

    /// Apply a fetch outcome and write accepted datasets through to the cache.
    pub fn complete(
        &mut self,
        request: RequestToken,
        result: Result<Vec<MaintenanceRecord>, FetchError>,
    ) {
        if let Some(records) = self.list.complete(request, result) {
            self.cache.put(self.key, records);
        }
    }

    pub fn unmount(&mut self) {
        self.list.unmount();
    }
}
