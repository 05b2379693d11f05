// In-memory backend for view-controller tests
use crate::application::maintenance_backend::MaintenanceBackend;
use crate::domain::dashboard::DashboardSummary;
use crate::domain::maintenance::{DetailQuery, MaintenanceRecord};
use crate::domain::service_status::{HotelSelection, ServiceStatus};
use crate::error::FetchError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeBackend {
    dashboard: DashboardSummary,
    weekly: Vec<MaintenanceRecord>,
    non_room: Vec<MaintenanceRecord>,
    upcoming: Vec<MaintenanceRecord>,
    rooms: HashMap<i64, Vec<MaintenanceRecord>>,
    detail: Option<MaintenanceRecord>,
    failures: HashMap<&'static str, FetchError>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl FakeBackend {
    pub fn with_dashboard(mut self, summary: DashboardSummary) -> Self {
        self.dashboard = summary;
        self
    }

    pub fn with_weekly(mut self, records: Vec<MaintenanceRecord>) -> Self {
        self.weekly = records;
        self
    }

    pub fn with_non_room(mut self, records: Vec<MaintenanceRecord>) -> Self {
        self.non_room = records;
        self
    }

    pub fn with_upcoming(mut self, records: Vec<MaintenanceRecord>) -> Self {
        self.upcoming = records;
        self
    }

    pub fn with_room(mut self, room_number: i64, records: Vec<MaintenanceRecord>) -> Self {
        self.rooms.insert(room_number, records);
        self
    }

    pub fn with_detail(mut self, record: MaintenanceRecord) -> Self {
        self.detail = Some(record);
        self
    }

    /// Make `operation` answer with a non-2xx status.
    pub fn failing(mut self, operation: &'static str, status: u16, message: &str) -> Self {
        self.failures.insert(
            operation,
            FetchError::Status {
                status,
                message: message.to_string(),
            },
        );
        self
    }

    pub fn calls(&self, operation: &str) -> usize {
        let calls = self.calls.lock().unwrap();
        calls.get(operation).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn answer<T>(&self, operation: &'static str, value: T) -> Result<T, FetchError> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        match self.failures.get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(value),
        }
    }
}

#[async_trait]
impl MaintenanceBackend for FakeBackend {
    async fn dashboard(&self) -> Result<DashboardSummary, FetchError> {
        self.answer("dashboard", self.dashboard.clone())
    }

    async fn weekly_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError> {
        self.answer("weekly_maintenance", self.weekly.clone())
    }

    async fn non_room_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError> {
        self.answer("non_room_maintenance", self.non_room.clone())
    }

    async fn upcoming_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError> {
        self.answer("upcoming_maintenance", self.upcoming.clone())
    }

    async fn search_room(&self, room_number: i64) -> Result<Vec<MaintenanceRecord>, FetchError> {
        let records = self.rooms.get(&room_number).cloned().unwrap_or_default();
        self.answer("search_room", records)
    }

    async fn device_info(&self, query: &DetailQuery) -> Result<MaintenanceRecord, FetchError> {
        let record = self.detail.clone().unwrap_or_else(|| {
            room_device(query.room_number, &query.device_name)
        });
        self.answer("device_info", record)
    }

    async fn service_status(&self) -> Result<ServiceStatus, FetchError> {
        self.answer("service_status", ServiceStatus::default())
    }

    async fn choose_hotel_data(&self, hotel_name: &str) -> Result<HotelSelection, FetchError> {
        let selection = HotelSelection {
            loaded_file: Some(format!("{hotel_name}.csv")),
            success: true,
            ..Default::default()
        };
        self.answer("choose_hotel_data", selection)
    }
}

pub fn facility(device_id: &str, device_type: &str) -> MaintenanceRecord {
    MaintenanceRecord {
        device_id: Some(device_id.to_string()),
        device_type: Some(device_type.to_string()),
        location: Some("Basement".to_string()),
        ..Default::default()
    }
}

pub fn room_device(room_number: i64, device_name: &str) -> MaintenanceRecord {
    MaintenanceRecord {
        room_number: Some(room_number),
        device_name: Some(device_name.to_string()),
        ..Default::default()
    }
}
