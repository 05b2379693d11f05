// Application session: owns the cache and hands out view-controllers
use crate::application::dashboard_view::DashboardView;
use crate::application::detail_fetcher::DetailFetcher;
use crate::application::maintenance_backend::MaintenanceBackend;
use crate::application::room_search_view::RoomSearchView;
use crate::application::scheduled_view::ScheduledView;
use crate::application::upcoming_view::UpcomingView;
use crate::domain::service_status::{HotelSelection, ServiceStatus};
use crate::error::FetchError;
use crate::infrastructure::cache_store::CacheStore;
use crate::infrastructure::config::ViewSettings;
use std::sync::Arc;

/// Every controller built from one session shares its cache, so a dataset
/// fetched by one mount is reused by the next mount of the same view.
#[derive(Clone)]
pub struct MaintenanceSession {
    backend: Arc<dyn MaintenanceBackend>,
    cache: CacheStore,
    views: ViewSettings,
}

impl MaintenanceSession {
    pub fn new(backend: Arc<dyn MaintenanceBackend>, views: ViewSettings) -> Self {
        Self {
            backend,
            cache: CacheStore::new(),
            views,
        }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn backend(&self) -> &Arc<dyn MaintenanceBackend> {
        &self.backend
    }

    pub fn view_settings(&self) -> ViewSettings {
        self.views
    }

    pub fn dashboard_view(&self) -> DashboardView {
        DashboardView::new(self.backend.clone(), self.cache.clone(), self.views)
    }

    pub fn scheduled_view(&self) -> ScheduledView {
        ScheduledView::new(self.backend.clone(), self.cache.clone(), self.views)
    }

    pub fn upcoming_view(&self) -> UpcomingView {
        UpcomingView::new(self.backend.clone(), self.cache.clone(), self.views)
    }

    pub fn room_search_view(&self) -> RoomSearchView {
        RoomSearchView::new(self.backend.clone(), self.views)
    }

    pub fn detail_fetcher(&self) -> DetailFetcher {
        DetailFetcher::new(self.backend.clone())
    }

    pub async fn service_status(&self) -> Result<ServiceStatus, FetchError> {
        self.backend.service_status().await
    }

    /// Switch the backend to another hotel's data file. Cached datasets are kept.
    pub async fn choose_hotel_data(&self, hotel_name: &str) -> Result<HotelSelection, FetchError> {
        let selection = self.backend.choose_hotel_data(hotel_name).await?;
        tracing::info!(
            "Backend now serving {}",
            selection.loaded_file.as_deref().unwrap_or(hotel_name)
        );
        Ok(selection)
    }
}
