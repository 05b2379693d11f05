// Extraction of view datasets from prediction-service response bodies
use crate::domain::dashboard::DashboardSummary;
use crate::domain::elements;
use crate::domain::maintenance::MaintenanceRecord;
use crate::error::FetchError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a 2xx body. A body that is not JSON is treated as carrying nothing.
pub fn parse_body(body: &str) -> Value {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Response body is not JSON, treating as empty: {}", e);
            Value::Null
        }
    }
}

/// The record list under `field`. Absent or non-array fields mean no records.
pub fn records_field(payload: &Value, field: &str) -> Vec<MaintenanceRecord> {
    match payload.get(field) {
        Some(Value::Array(items)) => elements(items),
        Some(other) => {
            tracing::warn!("Field {} is not a list ({}), treating as empty", field, kind(other));
            Vec::new()
        }
        None => {
            tracing::warn!("Response has no {} field, treating as empty", field);
            Vec::new()
        }
    }
}

/// The `smartOperations` block of the dashboard reply.
pub fn dashboard_summary(payload: &Value) -> DashboardSummary {
    let mut summary = match payload.get("smartOperations") {
        Some(block @ Value::Object(_)) => summary_from_block(block),
        _ => {
            tracing::warn!("Dashboard reply has no smartOperations block, treating as empty");
            DashboardSummary::default()
        }
    };
    if summary.loaded_data_file.is_none() {
        summary.loaded_data_file = payload
            .get("loaded_data_file")
            .and_then(Value::as_str)
            .filter(|s| *s != "N/A")
            .map(str::to_string);
    }
    summary
}

/// A single object reply such as the device detail or service status.
pub fn single<T: DeserializeOwned>(payload: Value, what: &str) -> Result<T, FetchError> {
    if !payload.is_object() {
        return Err(FetchError::Decode(format!(
            "expected {} object, got {}",
            what,
            kind(&payload)
        )));
    }
    serde_json::from_value(payload).map_err(|e| FetchError::Decode(format!("{}: {}", what, e)))
}

/// Best human-readable message from an error body: its `message` field, else the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn summary_from_block(block: &Value) -> DashboardSummary {
    DashboardSummary::deserialize(block).unwrap_or_else(|e| {
        tracing::warn!("Undecodable smartOperations block, treating as empty: {}", e);
        DashboardSummary::default()
    })
}
