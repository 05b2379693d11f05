// Dashboard screen: aggregate counts plus the AI weekly maintenance list
use crate::application::detail_fetcher::DetailFetcher;
use crate::application::list_view::{CachedList, ListView};
use crate::application::maintenance_backend::MaintenanceBackend;
use crate::application::view_state::{Loadable, RequestToken, ViewState};
use crate::domain::dashboard::DashboardSummary;
use crate::domain::maintenance::{DetailQuery, MaintenanceRecord};
use crate::error::FetchError;
use crate::infrastructure::cache_store::{CacheKey, CacheStore};
use crate::infrastructure::config::ViewSettings;
use std::sync::Arc;

/// Tokens for the fetches a dashboard mount still has to make. `None` means
/// that half was served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardRequests {
    pub summary: Option<RequestToken>,
    pub weekly: Option<RequestToken>,
}

/// The summary and the weekly list load and fail independently of each other.
pub struct DashboardView {
    backend: Arc<dyn MaintenanceBackend>,
    cache: CacheStore,
    summary: Loadable<DashboardSummary>,
    weekly: CachedList,
    detail: DetailFetcher,
}

impl DashboardView {
    pub fn new(
        backend: Arc<dyn MaintenanceBackend>,
        cache: CacheStore,
        settings: ViewSettings,
    ) -> Self {
        let list = ListView::new(MaintenanceRecord::device_name, settings);
        Self {
            detail: DetailFetcher::new(backend.clone()),
            weekly: CachedList::new(CacheKey::WeeklyAi, cache.clone(), list),
            summary: Loadable::new(),
            cache,
            backend,
        }
    }

    /// Load both halves, fetching whatever the cache misses concurrently.
    pub async fn mount(&mut self) {
        let requests = self.begin_mount();
        let backend = self.backend.clone();

        let summary = async {
            match requests.summary {
                Some(request) => Some((request, backend.dashboard().await)),
                None => None,
            }
        };
        let weekly = async {
            match requests.weekly {
                Some(request) => Some((request, backend.weekly_maintenance().await)),
                None => None,
            }
        };
        let (summary, weekly) = tokio::join!(summary, weekly);

        if let Some((request, result)) = summary {
            self.complete_summary(request, result);
        }
        if let Some((request, result)) = weekly {
            self.complete_weekly(request, result);
        }
    }

    pub fn begin_mount(&mut self) -> DashboardRequests {
        let summary = match self.cache.get::<DashboardSummary>(CacheKey::Dashboard) {
            Some(cached) => {
                self.summary.show(cached);
                None
            }
            None => {
                tracing::debug!("Cache miss for {}, fetching", CacheKey::Dashboard);
                Some(self.summary.begin())
            }
        };
        DashboardRequests {
            summary,
            weekly: self.weekly.begin_mount(),
        }
    }

    pub fn complete_summary(
        &mut self,
        request: RequestToken,
        result: Result<DashboardSummary, FetchError>,
    ) {
        if let Some(summary) = self.summary.complete(request, result) {
            tracing::info!(
                "Dashboard ready: {} devices, {} pending",
                summary.total_devices,
                summary.pending_maintenance.len()
            );
            self.cache.put(CacheKey::Dashboard, summary);
        }
    }

    pub fn complete_weekly(
        &mut self,
        request: RequestToken,
        result: Result<Vec<MaintenanceRecord>, FetchError>,
    ) {
        self.weekly.complete(request, result);
    }

    pub fn unmount(&mut self) {
        self.summary.reset();
        self.weekly.unmount();
        self.detail.close();
    }

    pub fn summary(&self) -> &ViewState<DashboardSummary> {
        self.summary.state()
    }

    pub fn weekly(&self) -> &ListView {
        self.weekly.list()
    }

    pub fn weekly_mut(&mut self) -> &mut ListView {
        self.weekly.list_mut()
    }

    pub fn detail(&self) -> &DetailFetcher {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut DetailFetcher {
        &mut self.detail
    }

    /// Show one device's detail; the weekly list is left exactly as it was.
    pub async fn open_detail(&mut self, query: DetailQuery) {
        self.detail.show(query).await;
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }
}
