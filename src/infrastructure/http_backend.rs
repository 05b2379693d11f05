// Prediction service HTTP client
use crate::application::maintenance_backend::MaintenanceBackend;
use crate::domain::dashboard::DashboardSummary;
use crate::domain::maintenance::{DetailQuery, MaintenanceRecord};
use crate::domain::service_status::{HotelSelection, ServiceStatus};
use crate::error::FetchError;
use crate::infrastructure::payload;
use async_trait::async_trait;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct HttpMaintenanceBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpMaintenanceBackend {
    pub fn new(base_url: String) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: String, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/maintenance/{}", self.base_url, path)
    }

    fn device_info_url(&self, query: &DetailQuery) -> String {
        format!(
            "{}?room_no={}&appliance_type={}",
            self.url("device/info"),
            query.room_number,
            urlencoding::encode(&query.device_name)
        )
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        Self::read_payload(url, response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, FetchError> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;
        Self::read_payload(url, response).await
    }

    async fn read_payload(url: &str, response: reqwest::Response) -> Result<Value, FetchError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = payload::error_message(&body);
            tracing::error!("{} failed with status {}: {}", url, status, message);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(payload::parse_body(&body))
    }
}

#[async_trait]
impl MaintenanceBackend for HttpMaintenanceBackend {
    async fn dashboard(&self) -> Result<DashboardSummary, FetchError> {
        let body = self.get_json(&self.url("dashboard")).await?;
        Ok(payload::dashboard_summary(&body))
    }

    async fn weekly_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError> {
        let body = self
            .get_json(&self.url("upcoming-weekly-maintenance"))
            .await?;
        Ok(payload::records_field(&body, "weekly_devices"))
    }

    async fn non_room_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError> {
        let body = self.get_json(&self.url("non-room-data")).await?;
        Ok(payload::records_field(&body, "non_room_maintenance"))
    }

    async fn upcoming_maintenance(&self) -> Result<Vec<MaintenanceRecord>, FetchError> {
        let body = self.get_json(&self.url("upcoming-maintenance")).await?;
        Ok(payload::records_field(&body, "upcoming_maintenance_devices"))
    }

    async fn search_room(&self, room_number: i64) -> Result<Vec<MaintenanceRecord>, FetchError> {
        let body = self
            .post_json(&self.url("search"), &json!({ "Room Number": room_number }))
            .await?;
        Ok(payload::records_field(&body, "predictions"))
    }

    async fn device_info(&self, query: &DetailQuery) -> Result<MaintenanceRecord, FetchError> {
        let body = self.get_json(&self.device_info_url(query)).await?;
        payload::single(body, "device detail")
    }

    async fn service_status(&self) -> Result<ServiceStatus, FetchError> {
        let body = self.get_json(&self.url("home")).await?;
        payload::single(body, "service status")
    }

    async fn choose_hotel_data(&self, hotel_name: &str) -> Result<HotelSelection, FetchError> {
        let body = self
            .post_json(
                &self.url("choose-hotel-data"),
                &json!({ "hotel_name": hotel_name }),
            )
            .await?;
        payload::single(body, "hotel selection")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Query,
        http::StatusCode,
        routing::{get, post},
    };
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn spawn_backend(app: Router) -> HttpMaintenanceBackend {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client");
        HttpMaintenanceBackend::with_client(format!("http://{addr}/"), client)
    }

    #[test]
    fn device_info_url_encodes_appliance_type() {
        let backend = HttpMaintenanceBackend::new("http://localhost:8085/".to_string());
        let url = backend.device_info_url(&DetailQuery::new(2000, "Mini Bar".to_string()));
        assert_eq!(
            url,
            "http://localhost:8085/maintenance/device/info?room_no=2000&appliance_type=Mini%20Bar"
        );
    }

    #[tokio::test]
    async fn dashboard_reads_smart_operations() {
        let app = Router::new().route(
            "/maintenance/dashboard",
            get(|| async {
                Json(json!({
                    "smartOperations": {
                        "total_devices": 12,
                        "running": 10,
                        "down": 2,
                        "due_maintenance": 1,
                        "Pending_maintenance": [
                            {"room_no": 4, "device_id": 2, "device_name": "AC", "maintenance_date": "2024-01-02"}
                        ]
                    },
                    "loaded_data_file": "Westin.csv"
                }))
            }),
        );
        let backend = spawn_backend(app).await;

        let summary = backend.dashboard().await.expect("dashboard");

        assert_eq!(summary.total_devices, 12);
        assert_eq!(summary.due_maintenance, 1);
        assert_eq!(summary.pending_maintenance.len(), 1);
        assert_eq!(summary.loaded_data_file.as_deref(), Some("Westin.csv"));
    }

    #[tokio::test]
    async fn missing_list_field_is_empty_not_error() {
        let app = Router::new().route(
            "/maintenance/upcoming-weekly-maintenance",
            get(|| async { Json(json!({"success": true})) }),
        );
        let backend = spawn_backend(app).await;

        let weekly = backend.weekly_maintenance().await.expect("weekly");
        assert!(weekly.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_failure() {
        let app = Router::new().route(
            "/maintenance/upcoming-maintenance",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "message": "Model or training data not loaded.",
                        "upcoming_maintenance_devices": [],
                        "success": false
                    })),
                )
            }),
        );
        let backend = spawn_backend(app).await;

        let err = backend.upcoming_maintenance().await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 400,
                message: "Model or training data not loaded.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn search_posts_room_number() {
        let app = Router::new().route(
            "/maintenance/search",
            post(|Json(body): Json<Value>| async move {
                let room = body["Room Number"].as_i64().unwrap_or_default();
                Json(json!({
                    "success": true,
                    "predictions": [
                        {"roomNumber": room, "deviceName": "Television"},
                        {"roomNumber": room, "deviceName": "AC"}
                    ]
                }))
            }),
        );
        let backend = spawn_backend(app).await;

        let records = backend.search_room(2000).await.expect("search");

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.room_number == Some(2000)));
    }

    #[tokio::test]
    async fn device_info_passes_query_parameters() {
        let app = Router::new().route(
            "/maintenance/device/info",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "room_no": params.get("room_no").and_then(|r| r.parse::<i64>().ok()),
                    "device_name": params.get("appliance_type"),
                    "under_warranty": "Yes",
                    "next_maintenance_date": "2025-03-01"
                }))
            }),
        );
        let backend = spawn_backend(app).await;

        let record = backend
            .device_info(&DetailQuery::new(2000, "Mini Bar".to_string()))
            .await
            .expect("detail");

        assert_eq!(record.room_number, Some(2000));
        assert_eq!(record.device_name(), Some("Mini Bar"));
        assert!(record.is_under_warranty());
    }

    #[tokio::test]
    async fn device_not_found_surfaces_backend_message() {
        let app = Router::new().route(
            "/maintenance/device/info",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"message": "Device not found.", "success": false})),
                )
            }),
        );
        let backend = spawn_backend(app).await;

        let err = backend
            .device_info(&DetailQuery::new(1, "Fan".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, ref message } if message == "Device not found."));
    }

    #[tokio::test]
    async fn choose_hotel_data_posts_name() {
        let app = Router::new().route(
            "/maintenance/choose-hotel-data",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "message": format!("Data for '{}' loaded", body["hotel_name"].as_str().unwrap_or("")),
                    "loaded_file": "Westin.csv",
                    "records_loaded": 500,
                    "working_devices_in_file": 470,
                    "success": true
                }))
            }),
        );
        let backend = spawn_backend(app).await;

        let selection = backend.choose_hotel_data("westin").await.expect("select");

        assert!(selection.success);
        assert_eq!(selection.records_loaded, 500);
        assert_eq!(selection.message.as_deref(), Some("Data for 'westin' loaded"));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let client = reqwest::Client::builder().no_proxy().build().expect("client");
        let backend = HttpMaintenanceBackend::with_client(format!("http://{addr}"), client);

        let err = backend.non_room_maintenance().await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
