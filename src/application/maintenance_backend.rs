// Backend trait for prediction-service access
use crate::domain::dashboard::DashboardSummary;
use crate::domain::maintenance::{DetailQuery, MaintenanceRecord};
use crate::domain::service_status::{HotelSelection, ServiceStatus};
use crate::error::FetchError;
use async_trait::async_trait;

/// Every call the view-controllers make upstream.
///
/// List operations return an empty list when the reply is a success without the
/// expected list field; only non-2xx replies and network failures are errors.
#[async_trait]
pub trait MaintenanceBackend: Send + Sync {
    /// Aggregate counts and overdue devices
    async fn dashboard(&self) -> Result<DashboardSummary, FetchError>;

    /// Devices the model predicts will need maintenance this week
    async fn weekly_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError>;

    /// Facility (non-room) devices and their scheduled dates
    async fn non_room_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError>;

    /// Room devices due within the next six months
    async fn upcoming_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError>;

    /// Predictions for every device in one room
    async fn search_room(&self, room_number: i64) -> Result<Vec<MaintenanceRecord>, FetchError>;

    async fn device_info(&self, query: &DetailQuery) -> Result<MaintenanceRecord, FetchError>;

    async fn service_status(&self) -> Result<ServiceStatus, FetchError>;

    async fn choose_hotel_data(&self, hotel_name: &str) -> Result<HotelSelection, FetchError>;
}
