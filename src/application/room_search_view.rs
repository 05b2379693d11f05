// Per-room device predictions, keyed by the room number in the navigation query
use crate::application::list_view::ListView;
use crate::application::maintenance_backend::MaintenanceBackend;
use crate::application::view_state::RequestToken;
use crate::domain::maintenance::MaintenanceRecord;
use crate::error::{FetchError, ViewFailure};
use crate::infrastructure::config::ViewSettings;
use std::sync::Arc;

/// Query-string parameter carrying the room to search.
pub const ROOM_NUMBER_PARAM: &str = "roomNumber";

/// Extract the room number from a navigation query string such as `?roomNumber=2000`.
pub fn room_number_from_query(query: &str) -> Result<i64, ViewFailure> {
    let raw = query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == ROOM_NUMBER_PARAM)
        .map(|(_, value)| value.replace('+', " "))
        .ok_or(ViewFailure::MissingRoomNumber)?;

    let value = urlencoding::decode(&raw)
        .map(|decoded| decoded.trim().to_string())
        .map_err(|_| ViewFailure::InvalidRoomNumber(raw.clone()))?;
    if value.is_empty() {
        return Err(ViewFailure::MissingRoomNumber);
    }
    value
        .parse::<i64>()
        .map_err(|_| ViewFailure::InvalidRoomNumber(value))
}

/// Devices of one room. Results are keyed by user input and never cached.
pub struct RoomSearchView {
    backend: Arc<dyn MaintenanceBackend>,
    room_number: Option<i64>,
    list: ListView,
}

impl RoomSearchView {
    pub fn new(backend: Arc<dyn MaintenanceBackend>, settings: ViewSettings) -> Self {
        Self {
            backend,
            room_number: None,
            list: ListView::new(MaintenanceRecord::device_name, settings),
        }
    }

    pub async fn mount(&mut self, navigation_query: &str) {
        if let Some((request, room_number)) = self.begin_mount(navigation_query) {
            let result = self.backend.search_room(room_number).await;
            self.complete(request, result);
        }
    }

    /// Resolve the room and enter `Loading`, or fail straight away without a request.
    pub fn begin_mount(&mut self, navigation_query: &str) -> Option<(RequestToken, i64)> {
        match room_number_from_query(navigation_query) {
            Ok(room_number) => {
                tracing::debug!("Searching room {}", room_number);
                self.room_number = Some(room_number);
                Some((self.list.begin_load(), room_number))
            }
            Err(failure) => {
                self.room_number = None;
                self.list.fail(failure);
                None
            }
        }
    }

    pub fn complete(
        &mut self,
        request: RequestToken,
        result: Result<Vec<MaintenanceRecord>, FetchError>,
    ) {
        self.list.complete(request, result);
    }

    pub fn unmount(&mut self) {
        self.room_number = None;
        self.list.unmount();
    }

    pub fn room_number(&self) -> Option<i64> {
        self.room_number
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }
}
