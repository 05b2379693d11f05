// Field decoders tolerant of the prediction service's loose JSON
//
// The backend serialises pandas rows, so the same logical field can arrive as a
// number, a numeric string, or a sentinel such as "N/A". These decoders also
// accept the canonical form the session cache writes back.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const ABSENT_SENTINELS: [&str; 3] = ["N/A", "None", "nan"];

fn is_absent(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || ABSENT_SENTINELS.iter().any(|s| trimmed.eq_ignore_ascii_case(s))
}

fn integer_from(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) if !is_absent(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) if !is_absent(&s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(integer_from(&Value::deserialize(d)?))
}

/// Aggregate counters default to zero rather than disappearing.
pub(crate) fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    Ok(integer_from(&Value::deserialize(d)?)
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0))
}

pub(crate) fn real<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !is_absent(&s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Some(true),
            "no" | "n" | "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Decode every object element of a JSON array, skipping elements that do not decode.
pub(crate) fn elements<T: DeserializeOwned>(items: &[Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| {
            if !item.is_object() {
                tracing::warn!("Skipping non-object list element: {}", item);
                return None;
            }
            match T::deserialize(item) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    tracing::warn!("Skipping undecodable list element: {}", e);
                    None
                }
            }
        })
        .collect()
}

pub(crate) fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => elements(&items),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_accepts_numbers_and_numeric_strings() {
        assert_eq!(integer_from(&json!(2027)), Some(2027));
        assert_eq!(integer_from(&json!(2027.0)), Some(2027));
        assert_eq!(integer_from(&json!("2027")), Some(2027));
        assert_eq!(integer_from(&json!(" 101 ")), Some(101));
        assert_eq!(integer_from(&json!("N/A")), None);
        assert_eq!(integer_from(&json!(12.5)), None);
        assert_eq!(integer_from(&Value::Null), None);
    }

    #[test]
    fn sentinels_are_absent() {
        assert!(is_absent("N/A"));
        assert!(is_absent("none"));
        assert!(is_absent("  "));
        assert!(!is_absent("Working"));
    }
}
