// Maintenance record domain model
use super::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layouts the prediction service accepts for maintenance dates.
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d/%m/%y",
];

/// One appliance or facility device as reported by the prediction service.
///
/// Room devices carry `room_number` and `device_name`; facility devices carry
/// `device_id`, `device_type` and `location`. Every field is optional because
/// the service omits or blanks them freely. Records are never mutated once
/// decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    #[serde(
        default,
        alias = "DeviceID",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_id: Option<String>,

    #[serde(
        default,
        alias = "roomNumber",
        alias = "room_no",
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub room_number: Option<i64>,

    #[serde(
        default,
        alias = "deviceName",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_name: Option<String>,

    #[serde(
        default,
        alias = "DeviceType",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_type: Option<String>,

    #[serde(
        default,
        alias = "Location",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,

    #[serde(
        default,
        alias = "issueReported",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_reported: Option<String>,

    #[serde(
        default,
        alias = "deviceYear",
        alias = "DeviceYear",
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_year: Option<i64>,

    #[serde(
        default,
        deserialize_with = "lenient::flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub under_warranty: Option<bool>,

    #[serde(
        default,
        alias = "WarrantyYear",
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub warranty_year_till: Option<i64>,

    #[serde(
        default,
        alias = "LastMaintenanceDate",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous_maintenance_date: Option<String>,

    #[serde(
        default,
        alias = "nextMaintenanceDate",
        alias = "maintenance_date",
        alias = "NextScheduledMaintenanceDates",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_maintenance_date: Option<String>,

    #[serde(
        default,
        alias = "predictedDaysSinceMaintenance",
        deserialize_with = "lenient::real",
        skip_serializing_if = "Option::is_none"
    )]
    pub predicted_days_since_maintenance: Option<f64>,

    #[serde(
        default,
        alias = "TotalUsageHours",
        deserialize_with = "lenient::real",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_usage_hours: Option<f64>,
}

impl MaintenanceRecord {
    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    pub fn device_type(&self) -> Option<&str> {
        self.device_type.as_deref()
    }

    /// Human-facing name: the appliance name for room devices, the type for facility devices.
    pub fn label(&self) -> &str {
        self.device_name()
            .or_else(|| self.device_type())
            .unwrap_or("Unknown device")
    }

    pub fn is_facility_device(&self) -> bool {
        self.room_number.is_none() && self.device_type.is_some()
    }

    pub fn is_under_warranty(&self) -> bool {
        self.under_warranty.unwrap_or(false)
    }

    pub fn next_maintenance_on(&self) -> Option<NaiveDate> {
        self.next_maintenance_date.as_deref().and_then(parse_backend_date)
    }

    pub fn previous_maintenance_on(&self) -> Option<NaiveDate> {
        self.previous_maintenance_date
            .as_deref()
            .and_then(parse_backend_date)
    }

    /// Days from `today` until the next maintenance date; negative when overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.next_maintenance_on()
            .map(|due| due.signed_duration_since(today).num_days())
    }

    /// Lookup key for the single-record detail endpoint, when the record is a room device.
    pub fn detail_query(&self) -> Option<DetailQuery> {
        match (self.room_number, self.device_name()) {
            (Some(room_number), Some(device_name)) => {
                Some(DetailQuery::new(room_number, device_name.to_string()))
            }
            _ => None,
        }
    }
}

/// Parse a date in any layout the backend produces.
pub fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// One-shot key for the device detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailQuery {
    pub room_number: i64,
    pub device_name: String,
}

impl DetailQuery {
    pub fn new(room_number: i64, device_name: String) -> Self {
        Self {
            room_number,
            device_name,
        }
    }
}
