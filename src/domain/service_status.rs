// Prediction service status and data-file selection
use super::lenient;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelMetrics {
    #[serde(default, deserialize_with = "lenient::real")]
    pub r2_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::real")]
    pub mean_absolute_error: Option<f64>,
    #[serde(default, deserialize_with = "lenient::real")]
    pub root_mean_squared_error: Option<f64>,
}

/// Reply of the service's home endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceStatus {
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub model_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub training_data_status: Option<String>,
    #[serde(default)]
    pub last_trained_metrics: ModelMetrics,
}

impl ServiceStatus {
    pub fn is_model_trained(&self) -> bool {
        self.model_status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("trained"))
    }
}

/// Reply after asking the service to load a different hotel's data file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HotelSelection {
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub loaded_file: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub records_loaded: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub working_devices_in_file: u64,
    #[serde(default)]
    pub success: bool,
}
