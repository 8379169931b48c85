use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The (year, month) pair currently chosen for report queries.
///
/// Seeded from the device date at startup and mutated only through the
/// picker controls. Never persisted across reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub year: i32,
    /// 1-based month (1 = January)
    pub month: u32,
}

/// Backend-computed attendance summary for one month, one row per station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Day column labels, one per day of the queried month. The backend
    /// currently sends integers but the contract does not promise a type,
    /// so they are carried opaquely and rendered as received.
    pub day_headers: Vec<Value>,
    /// Station rows in backend order; never reordered client-side.
    pub rows: Vec<StationRow>,
}

/// One station's attendance figures for the month.
///
/// `daily_actual` is expected to match `day_headers` in length, but that is
/// the backend's invariant: a malformed response renders with whatever
/// length it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRow {
    pub station_name: String,
    /// Per-day actual report counts, same order as `day_headers`.
    pub daily_actual: Vec<Value>,
    pub expected_total: Value,
    pub actual_total: Value,
    /// Pre-computed by the backend, displayed verbatim.
    pub rate: Value,
}

/// Error body shape for non-2xx responses: `{ "detail": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Severity of a status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A status-line message. Single slot, last write wins, no history.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_monthly_report() {
        // Shape the backend actually emits: integer headers and totals.
        let body = json!({
            "day_headers": [1, 2, 3],
            "rows": [
                {
                    "station_name": "Station A",
                    "daily_actual": [24, 23, 24],
                    "expected_total": 72,
                    "actual_total": 71,
                    "rate": 98.6
                }
            ]
        })
        .to_string();

        let report: MonthlyReport = serde_json::from_str(&body).unwrap();
        assert_eq!(report.day_headers.len(), 3);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].station_name, "Station A");
        assert_eq!(report.rows[0].daily_actual.len(), 3);
    }

    #[test]
    fn test_deserialize_report_with_string_cells() {
        // The contract leaves cell types open; string headers and a
        // pre-formatted rate must survive deserialization unchanged.
        let body = json!({
            "day_headers": ["01", "02"],
            "rows": [
                {
                    "station_name": "Station B",
                    "daily_actual": ["-", 12],
                    "expected_total": "48",
                    "actual_total": 12,
                    "rate": "25.0%"
                }
            ]
        })
        .to_string();

        let report: MonthlyReport = serde_json::from_str(&body).unwrap();
        assert_eq!(report.day_headers[0], json!("01"));
        assert_eq!(report.rows[0].rate, json!("25.0%"));
    }

    #[test]
    fn test_deserialize_error_detail() {
        let err: ErrorDetail = serde_json::from_str(r#"{"detail":"no data"}"#).unwrap();
        assert_eq!(err.detail, "no data");
    }

    #[test]
    fn test_status_message_constructors() {
        let loading = StatusMessage::info("Loading...");
        assert_eq!(loading.severity, Severity::Info);

        let failed = StatusMessage::error("Failed to load report");
        assert_eq!(failed.severity, Severity::Error);
        assert_eq!(failed.text, "Failed to load report");
    }
}
