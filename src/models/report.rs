//! Report request and result models.
//!
//! This module contains the [`ReportRequest`] consumed by the report assembler
//! and the [`Report`] it produces, including the per-request
//! [`ReportDiagnostics`] that count every record the assembler dropped.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calendar::Month;

use super::{AccessType, AttendanceStatus, DepartmentSlot, ReportFormat};

/// A structured report request.
///
/// # Example
///
/// ```
/// use pdks_assistant::models::{AccessType, DepartmentSlot, ReportRequest};
///
/// let request: ReportRequest = serde_json::from_str(
///     r#"{ "department": "Finans", "month": "03", "year": 2026, "action": "entry" }"#,
/// ).unwrap();
/// assert_eq!(request.department, DepartmentSlot::Named("Finans".to_string()));
/// assert_eq!(request.month.unwrap().code(), "03");
/// assert_eq!(request.action, Some(AccessType::Entry));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Department filter: a canonical name, "ALL", or null.
    #[serde(default)]
    pub department: DepartmentSlot,
    /// Month filter ("01".."12").
    #[serde(default)]
    pub month: Option<Month>,
    /// Report year; the current year when absent.
    #[serde(default)]
    pub year: Option<i32>,
    /// Direction filter.
    #[serde(default)]
    pub action: Option<AccessType>,
    /// Late/early-leave filter.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    /// Export format; only affects the summary sentence.
    #[serde(default)]
    pub format: Option<ReportFormat>,
}

/// One row of an attendance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Employee display name ("first last").
    pub name: String,
    /// When the card was read.
    pub check_in: NaiveDateTime,
    /// "Giriş" or "Çıkış".
    pub access_type: String,
    /// The employee's department name, if resolvable.
    pub department_name: Option<String>,
    /// Set on demonstration rows that do not come from the store.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub synthetic: bool,
}

impl ReportRow {
    /// Returns the direction encoded in `access_type`.
    pub fn direction(&self) -> Option<AccessType> {
        match self.access_type.as_str() {
            "Giriş" => Some(AccessType::Entry),
            "Çıkış" => Some(AccessType::Exit),
            _ => None,
        }
    }
}

/// Counts of what the assembler fetched and dropped for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportDiagnostics {
    /// Records returned by the date-range fetch.
    pub fetched: usize,
    /// Records whose employee id did not resolve.
    pub skipped_unresolved_employee: usize,
    /// Records dropped by the department filter.
    pub filtered_department: usize,
    /// Records dropped by the action filter.
    pub filtered_action: usize,
    /// Records dropped by the status filter.
    pub filtered_status: usize,
    /// Kept rows whose department name could not be resolved.
    pub unresolved_department_name: usize,
    /// True if the attendance fetch failed and was treated as empty.
    pub store_error: bool,
}

/// The result of assembling a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Rows in fetch order.
    pub rows: Vec<ReportRow>,
    /// Number of rows.
    pub total: usize,
    /// Natural-language summary of what the report covers.
    pub summary: String,
    /// True if the rows are demonstration data.
    pub synthetic: bool,
    /// Per-request counters.
    pub diagnostics: ReportDiagnostics,
}

impl Report {
    /// Returns true if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(synthetic: bool) -> ReportRow {
        ReportRow {
            name: "Ahmet Yılmaz".to_string(),
            check_in: NaiveDateTime::parse_from_str("2026-03-02 08:45:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            access_type: AccessType::Entry.label().to_string(),
            department_name: Some("Finans".to_string()),
            synthetic,
        }
    }

    #[test]
    fn test_real_row_omits_synthetic_marker() {
        let json = serde_json::to_value(row(false)).unwrap();
        assert_eq!(json["name"], "Ahmet Yılmaz");
        assert_eq!(json["check_in"], "2026-03-02T08:45:00");
        assert_eq!(json["access_type"], "Giriş");
        assert_eq!(json["department_name"], "Finans");
        assert!(json.get("synthetic").is_none());
    }

    #[test]
    fn test_synthetic_row_carries_marker() {
        let json = serde_json::to_value(row(true)).unwrap();
        assert_eq!(json["synthetic"], true);
    }

    #[test]
    fn test_row_direction() {
        assert_eq!(row(false).direction(), Some(AccessType::Entry));
    }

    #[test]
    fn test_request_defaults() {
        let request: ReportRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, ReportRequest::default());
        assert_eq!(request.department, DepartmentSlot::Unknown);
    }

    #[test]
    fn test_request_rejects_bad_month() {
        let result = serde_json::from_str::<ReportRequest>(r#"{ "month": "13" }"#);
        assert!(result.is_err());
    }
}
