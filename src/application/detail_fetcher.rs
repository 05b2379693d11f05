// On-demand single-device lookup, independent of any list state
use crate::application::maintenance_backend::MaintenanceBackend;
use crate::application::view_state::RequestToken;
use crate::domain::maintenance::{DetailQuery, MaintenanceRecord};
use crate::error::FetchError;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Closed,
    Loading {
        query: DetailQuery,
        request: RequestToken,
    },
    Shown {
        query: DetailQuery,
        record: MaintenanceRecord,
    },
    Failed {
        query: DetailQuery,
        error: FetchError,
    },
}

/// Opens immediately, then resolves to the device detail or an error.
///
/// Nothing is cached; every open hits the backend. Closing drops whatever was
/// loaded so a later open never shows the previous device.
pub struct DetailFetcher {
    backend: Arc<dyn MaintenanceBackend>,
    state: DetailState,
    issued: u64,
}

impl DetailFetcher {
    pub fn new(backend: Arc<dyn MaintenanceBackend>) -> Self {
        Self {
            backend,
            state: DetailState::Closed,
            issued: 0,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading { .. })
    }

    pub fn record(&self) -> Option<&MaintenanceRecord> {
        match &self.state {
            DetailState::Shown { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            DetailState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Open and load in one step.
    pub async fn show(&mut self, query: DetailQuery) {
        let request = self.open(query.clone());
        let result = self.backend.device_info(&query).await;
        self.resolve(request, result);
    }

    /// Become visible in `Loading` before any network traffic.
    pub fn open(&mut self, query: DetailQuery) -> RequestToken {
        self.issued += 1;
        let request = RequestToken::from_sequence(self.issued);
        tracing::debug!(
            "Opening detail for room {} {}",
            query.room_number,
            query.device_name
        );
        self.state = DetailState::Loading { query, request };
        request
    }

    /// Apply the lookup result if `request` is still the open one.
    pub fn resolve(&mut self, request: RequestToken, result: Result<MaintenanceRecord, FetchError>) {
        let query = match &self.state {
            DetailState::Loading {
                query,
                request: current,
            } if *current == request => query.clone(),
            _ => {
                tracing::warn!("Discarding detail response for closed or replaced request");
                return;
            }
        };
        self.state = match result {
            Ok(record) => DetailState::Shown { query, record },
            Err(error) => {
                tracing::error!("Detail lookup failed: {}", error);
                DetailState::Failed { query, error }
            }
        };
    }

    pub fn close(&mut self) {
        self.state = DetailState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FakeBackend, room_device};

    fn query(room: i64, name: &str) -> DetailQuery {
        DetailQuery::new(room, name.to_string())
    }

    #[test]
    fn open_is_visible_before_resolution() {
        let mut fetcher = DetailFetcher::new(Arc::new(FakeBackend::default()));
        assert!(!fetcher.is_open());

        fetcher.open(query(101, "AC"));

        assert!(fetcher.is_open());
        assert!(fetcher.is_loading());
        assert!(fetcher.record().is_none());
    }

    #[tokio::test]
    async fn shows_the_requested_device() {
        let backend = Arc::new(FakeBackend::default().with_detail(room_device(101, "AC")));
        let mut fetcher = DetailFetcher::new(backend.clone());

        fetcher.show(query(101, "AC")).await;

        assert_eq!(fetcher.record(), Some(&room_device(101, "AC")));
        assert_eq!(backend.calls("device_info"), 1);
    }

    #[tokio::test]
    async fn failure_is_reported_and_cleared_on_close() {
        let backend = Arc::new(FakeBackend::default().failing("device_info", 404, "Device not found."));
        let mut fetcher = DetailFetcher::new(backend);

        fetcher.show(query(1, "Fan")).await;
        assert!(matches!(
            fetcher.error(),
            Some(FetchError::Status { status: 404, .. })
        ));

        fetcher.close();
        assert_eq!(fetcher.state(), &DetailState::Closed);
        assert!(fetcher.error().is_none());
    }

    #[test]
    fn reopening_never_shows_previous_device() {
        let mut fetcher = DetailFetcher::new(Arc::new(FakeBackend::default()));
        let first = fetcher.open(query(1, "AC"));
        fetcher.resolve(first, Ok(room_device(1, "AC")));
        fetcher.close();

        fetcher.open(query(2, "Kettle"));

        assert!(fetcher.is_loading());
        assert!(fetcher.record().is_none());
    }

    #[test]
    fn response_for_a_closed_detail_is_dropped() {
        let mut fetcher = DetailFetcher::new(Arc::new(FakeBackend::default()));
        let request = fetcher.open(query(1, "AC"));
        fetcher.close();

        fetcher.resolve(request, Ok(room_device(1, "AC")));

        assert!(!fetcher.is_open());
    }

    #[test]
    fn superseded_open_ignores_older_response() {
        let mut fetcher = DetailFetcher::new(Arc::new(FakeBackend::default()));
        let older = fetcher.open(query(1, "AC"));
        let newer = fetcher.open(query(2, "Kettle"));

        fetcher.resolve(older, Ok(room_device(1, "AC")));
        assert!(fetcher.is_loading());

        fetcher.resolve(newer, Ok(room_device(2, "Kettle")));
        assert_eq!(fetcher.record().map(|r| r.label()), Some("Kettle"));
    }
}
