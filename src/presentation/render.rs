// Plain-text rendering of view-controller state for the terminal
use crate::application::dashboard_view::DashboardView;
use crate::application::detail_fetcher::{DetailFetcher, DetailState};
use crate::application::list_view::{EmptyState, ListView};
use crate::application::pagination::PageWindow;
use crate::application::view_state::ViewState;
use crate::domain::maintenance::MaintenanceRecord;
use crate::domain::service_status::{HotelSelection, ServiceStatus};
use chrono::NaiveDate;

const MISSING: &str = "-";

pub fn record_line(record: &MaintenanceRecord, today: NaiveDate) -> String {
    let place = match (record.room_number, record.location.as_deref()) {
        (Some(room), _) => format!("Room {room}"),
        (None, Some(location)) => location.to_string(),
        (None, None) => MISSING.to_string(),
    };
    let id = record.device_id.as_deref().unwrap_or(MISSING);
    let due = match (record.next_maintenance_date.as_deref(), record.days_until_due(today)) {
        (Some(raw), Some(days)) if days < 0 => format!("{raw} (overdue by {} days)", -days),
        (Some(raw), Some(days)) => format!("{raw} (in {days} days)"),
        (Some(raw), None) => raw.to_string(),
        (None, _) => MISSING.to_string(),
    };
    format!("{:<12} {:<10} {:<20} next: {}", place, id, record.label(), due)
}

pub fn page_window(window: &PageWindow) -> String {
    let mut parts = Vec::new();
    if window.has_previous() {
        parts.push("<".to_string());
    }
    if window.leading_ellipsis {
        parts.push("...".to_string());
    }
    for page in &window.pages {
        if *page == window.current {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.trailing_ellipsis {
        parts.push("...".to_string());
    }
    if window.has_next() {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

pub fn list(title: &str, view: &ListView, today: NaiveDate) -> String {
    let mut lines = vec![title.to_string()];
    match view.state() {
        ViewState::Idle => lines.push("Not loaded.".to_string()),
        ViewState::Loading { .. } => lines.push("Loading...".to_string()),
        ViewState::Failed(failure) => lines.push(format!("Error: {failure}")),
        ViewState::Ready(_) => {
            if !view.query().is_empty() {
                lines.push(format!("Filter: {}", view.query()));
            }
            match view.empty_state() {
                Some(EmptyState::NoRecords) => lines.push("No records found.".to_string()),
                Some(EmptyState::NoMatches { query }) => {
                    lines.push(format!("No records match \"{query}\"."))
                }
                None => {
                    lines.extend(
                        view.current_page_records()
                            .into_iter()
                            .map(|record| record_line(record, today)),
                    );
                    let window = view.page_window();
                    lines.push(format!(
                        "Page {} of {}  {}",
                        window.current,
                        window.total,
                        page_window(&window)
                    ));
                }
            }
            if !view.candidate_keys().is_empty() {
                lines.push(format!("Filter keys: {}", view.candidate_keys().join(", ")));
            }
        }
    }
    lines.join("\n")
}

pub fn dashboard(view: &DashboardView, today: NaiveDate) -> String {
    let mut lines = vec!["Smart operations".to_string()];
    match view.summary() {
        ViewState::Idle => lines.push("Not loaded.".to_string()),
        ViewState::Loading { .. } => lines.push("Loading...".to_string()),
        ViewState::Failed(failure) => lines.push(format!("Error: {failure}")),
        ViewState::Ready(summary) => {
            if let Some(file) = &summary.loaded_data_file {
                lines.push(format!("Data file: {file}"));
            }
            lines.push(format!(
                "Devices: {}  running: {}  down: {}  under maintenance: {}  due: {}",
                summary.total_devices,
                summary.running,
                summary.down,
                summary.under_maintenance,
                summary.due_maintenance
            ));
            if summary.pending_maintenance.is_empty() {
                lines.push("No pending maintenance.".to_string());
            } else {
                lines.push("Pending maintenance:".to_string());
                lines.extend(
                    summary
                        .pending_maintenance
                        .iter()
                        .map(|record| format!("  {}", record_line(record, today))),
                );
            }
        }
    }
    lines.push(String::new());
    lines.push(list("AI weekly maintenance", view.weekly(), today));
    if view.detail().is_open() {
        lines.push(String::new());
        lines.push(detail(view.detail(), today));
    }
    lines.join("\n")
}

pub fn detail(fetcher: &DetailFetcher, today: NaiveDate) -> String {
    match fetcher.state() {
        DetailState::Closed => String::new(),
        DetailState::Loading { query, .. } => format!(
            "Room {} {}: loading...",
            query.room_number, query.device_name
        ),
        DetailState::Failed { query, error } => format!(
            "Room {} {}: {}",
            query.room_number, query.device_name, error
        ),
        DetailState::Shown { record, .. } => record_detail(record, today),
    }
}

fn record_detail(record: &MaintenanceRecord, today: NaiveDate) -> String {
    fn field<T: ToString>(label: &str, value: Option<T>) -> String {
        let value = value.map(|v| v.to_string());
        format!("{:<28}{}", label, value.as_deref().unwrap_or(MISSING))
    }

    let warranty = record
        .under_warranty
        .map(|under| if under { "Yes" } else { "No" });
    let due = record.days_until_due(today).map(|days| {
        if days < 0 {
            format!("overdue by {} days", -days)
        } else {
            format!("{days} days")
        }
    });
    [
        field("Device", Some(record.label())),
        field("Device ID", record.device_id.as_deref()),
        field("Room", record.room_number),
        field("Location", record.location.as_deref()),
        field("Issue reported", record.issue_reported.as_deref()),
        field("Device year", record.device_year),
        field("Under warranty", warranty),
        field("Warranty until", record.warranty_year_till),
        field("Previous maintenance", record.previous_maintenance_date.as_deref()),
        field("Next maintenance", record.next_maintenance_date.as_deref()),
        field("Due", due),
        field(
            "Predicted days since",
            record
                .predicted_days_since_maintenance
                .map(|days| format!("{days:.0}")),
        ),
        field(
            "Total usage hours",
            record.total_usage_hours.map(|hours| format!("{hours:.1}")),
        ),
    ]
    .join("\n")
}

pub fn service_status(status: &ServiceStatus) -> String {
    let metric = |value: Option<f64>| {
        value
            .map(|v| format!("{v:.4}"))
            .unwrap_or_else(|| MISSING.to_string())
    };
    let metrics = &status.last_trained_metrics;
    [
        status.message.clone().unwrap_or_default(),
        format!("Model: {}", status.model_status.as_deref().unwrap_or(MISSING)),
        format!(
            "Training data: {}",
            status.training_data_status.as_deref().unwrap_or(MISSING)
        ),
        format!(
            "R2 {}  MAE {}  RMSE {}",
            metric(metrics.r2_score),
            metric(metrics.mean_absolute_error),
            metric(metrics.root_mean_squared_error)
        ),
    ]
    .join("\n")
}

pub fn hotel_selection(selection: &HotelSelection) -> String {
    let mut lines = Vec::new();
    if let Some(message) = &selection.message {
        lines.push(message.clone());
    }
    lines.push(format!(
        "Loaded {} ({} records, {} working devices)",
        selection.loaded_file.as_deref().unwrap_or(MISSING),
        selection.records_loaded,
        selection.working_devices_in_file
    ));
    lines.join("\n")
}
