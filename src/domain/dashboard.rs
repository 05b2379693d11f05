// Dashboard domain model
use super::lenient;
use super::maintenance::MaintenanceRecord;
use serde::{Deserialize, Serialize};

/// Aggregate device counts plus the list of devices already past their predicted date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_devices: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub running: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub down: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub due_maintenance: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub under_maintenance: u64,
    #[serde(
        default,
        alias = "Pending_maintenance",
        deserialize_with = "lenient::list"
    )]
    pub pending_maintenance: Vec<MaintenanceRecord>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub loaded_data_file: Option<String>,
}

impl DashboardSummary {
    pub fn has_devices(&self) -> bool {
        self.total_devices > 0 || !self.pending_maintenance.is_empty()
    }
}
