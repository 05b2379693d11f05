// Room devices due for maintenance within six months
use crate::application::list_view::{CachedList, ListView};
use crate::application::maintenance_backend::MaintenanceBackend;
use crate::application::view_state::RequestToken;
use crate::domain::maintenance::MaintenanceRecord;
use crate::error::FetchError;
use crate::infrastructure::cache_store::{CacheKey, CacheStore};
use crate::infrastructure::config::ViewSettings;
use std::sync::Arc;

pub struct UpcomingView {
    backend: Arc<dyn MaintenanceBackend>,
    listing: CachedList,
}

impl UpcomingView {
    pub fn new(
        backend: Arc<dyn MaintenanceBackend>,
        cache: CacheStore,
        settings: ViewSettings,
    ) -> Self {
        let list = ListView::new(MaintenanceRecord::device_name, settings);
        Self {
            backend,
            listing: CachedList::new(CacheKey::Upcoming, cache, list),
        }
    }

    pub async fn mount(&mut self) {
        if let Some(request) = self.begin_mount() {
            let result = self.backend.upcoming_maintenance().await;
            self.complete(request, result);
        }
    }

    pub fn begin_mount(&mut self) -> Option<RequestToken> {
        self.listing.begin_mount()
    }

    pub fn complete(
        &mut self,
        request: RequestToken,
        result: Result<Vec<MaintenanceRecord>, FetchError>,
    ) {
        self.listing.complete(request, result);
    }

    pub fn unmount(&mut self) {
        self.listing.unmount();
    }

    pub fn list(&self) -> &ListView {
        self.listing.list()
    }

    pub fn list_mut(&mut self) -> &mut ListView {
        self.listing.list_mut()
    }
}
