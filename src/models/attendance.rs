//! Attendance record model.
//!
//! An attendance record is one card reading at an access-control device:
//! either an entry into or an exit from the premises.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Direction of an attendance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    /// The employee entered (card read on the way in).
    Entry,
    /// The employee left (card read on the way out).
    Exit,
}

impl AccessType {
    /// The Turkish label used in report rows.
    ///
    /// # Example
    ///
    /// ```
    /// use pdks_assistant::models::AccessType;
    ///
    /// assert_eq!(AccessType::Entry.label(), "Giriş");
    /// assert_eq!(AccessType::Exit.label(), "Çıkış");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            AccessType::Entry => "Giriş",
            AccessType::Exit => "Çıkış",
        }
    }
}

/// Attendance-status filters recovered from the late/early-leave columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Records with a positive `late_minutes`.
    Late,
    /// Records with a positive `early_leave_minutes`.
    EarlyLeave,
}

impl AttendanceStatus {
    /// Returns true if the record carries this status.
    pub fn matches(self, record: &AttendanceRecord) -> bool {
        match self {
            AttendanceStatus::Late => record.late_minutes > 0,
            AttendanceStatus::EarlyLeave => record.early_leave_minutes > 0,
        }
    }

    /// The Turkish label used in report summaries.
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Late => "geç kalma",
            AttendanceStatus::EarlyLeave => "erken çıkış",
        }
    }
}

/// A single card reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the reading.
    pub id: i64,
    /// The employee the card belongs to.
    pub employee_id: i64,
    /// When the card was read.
    pub access_time: NaiveDateTime,
    /// Whether the reading was an entry or an exit.
    pub access_type: AccessType,
    /// Minutes late relative to the expected start time.
    #[serde(default)]
    pub late_minutes: u32,
    /// Minutes left early relative to the expected end time.
    #[serde(default)]
    pub early_leave_minutes: u32,
    /// The name of the reader device.
    #[serde(default)]
    pub device_name: Option<String>,
    /// Where the device is installed.
    #[serde(default)]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(late_minutes: u32, early_leave_minutes: u32) -> AttendanceRecord {
        AttendanceRecord {
            id: 1,
            employee_id: 1,
            access_time: NaiveDateTime::parse_from_str("2026-03-02 09:12:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            access_type: AccessType::Entry,
            late_minutes,
            early_leave_minutes,
            device_name: None,
            location: None,
        }
    }

    #[test]
    fn test_deserialize_attendance_record() {
        let json = r#"{
            "id": 55,
            "employee_id": 3,
            "access_time": "2026-03-02T08:47:00",
            "access_type": "entry",
            "device_name": "Ana Kapı",
            "location": "Bina A"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.access_type, AccessType::Entry);
        assert_eq!(record.late_minutes, 0);
        assert_eq!(record.device_name.as_deref(), Some("Ana Kapı"));
    }

    #[test]
    fn test_access_type_serialization() {
        assert_eq!(
            serde_json::to_string(&AccessType::Entry).unwrap(),
            "\"entry\""
        );
        assert_eq!(serde_json::to_string(&AccessType::Exit).unwrap(), "\"exit\"");
    }

    #[test]
    fn test_status_matches_minutes() {
        assert!(AttendanceStatus::Late.matches(&record(12, 0)));
        assert!(!AttendanceStatus::Late.matches(&record(0, 30)));
        assert!(AttendanceStatus::EarlyLeave.matches(&record(0, 30)));
        assert!(!AttendanceStatus::EarlyLeave.matches(&record(5, 0)));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::EarlyLeave).unwrap(),
            "\"early_leave\""
        );
    }
}
