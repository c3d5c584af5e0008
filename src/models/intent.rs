//! Query intent model.
//!
//! A [`QueryIntent`] is the structured reading of one free-text request. It is
//! built fresh for each request and dropped once the reply is produced.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::Month;

use super::{AccessType, AttendanceStatus};

/// The wire value that selects every department.
pub const ALL_DEPARTMENTS: &str = "ALL";

/// The department slot of an intent or report request.
///
/// On the wire this is `"<canonical name>"`, `"ALL"` or `null`.
///
/// # Example
///
/// ```
/// use pdks_assistant::models::DepartmentSlot;
///
/// let slot: DepartmentSlot = serde_json::from_str("\"ALL\"").unwrap();
/// assert_eq!(slot, DepartmentSlot::All);
///
/// let slot: DepartmentSlot = serde_json::from_str("null").unwrap();
/// assert_eq!(slot, DepartmentSlot::Unknown);
///
/// let slot: DepartmentSlot = serde_json::from_str("\"Finans\"").unwrap();
/// assert_eq!(slot, DepartmentSlot::Named("Finans".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum DepartmentSlot {
    /// A canonical department name.
    Named(String),
    /// Every department.
    All,
    /// No department was resolved.
    #[default]
    Unknown,
}

impl DepartmentSlot {
    /// Returns true unless the slot is [`DepartmentSlot::Unknown`].
    pub fn is_resolved(&self) -> bool {
        !matches!(self, DepartmentSlot::Unknown)
    }
}

impl From<Option<String>> for DepartmentSlot {
    fn from(value: Option<String>) -> Self {
        match value {
            None => DepartmentSlot::Unknown,
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    DepartmentSlot::Unknown
                } else if name.eq_ignore_ascii_case(ALL_DEPARTMENTS) {
                    DepartmentSlot::All
                } else {
                    DepartmentSlot::Named(name.to_string())
                }
            }
        }
    }
}

impl From<DepartmentSlot> for Option<String> {
    fn from(slot: DepartmentSlot) -> Self {
        match slot {
            DepartmentSlot::Named(name) => Some(name),
            DepartmentSlot::All => Some(ALL_DEPARTMENTS.to_string()),
            DepartmentSlot::Unknown => None,
        }
    }
}

/// Export format requested alongside a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Spreadsheet export.
    Excel,
    /// PDF export.
    Pdf,
}

impl ReportFormat {
    /// The display name used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            ReportFormat::Excel => "Excel",
            ReportFormat::Pdf => "PDF",
        }
    }
}

/// Conversational openers that short-circuit report handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmallTalk {
    /// "merhaba", "selam", ...
    Greeting,
    /// "teşekkürler", "sağol", ...
    Thanks,
}

/// The slot a matched token was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Department (canonical name, alias or wildcard).
    Department,
    /// Month keyword or "N. ay" pattern.
    Month,
    /// Explicit or relative year.
    Year,
    /// Entry/exit direction.
    Action,
    /// Export format.
    Format,
    /// Late/early-leave status.
    Status,
    /// Report trigger keyword.
    Query,
    /// Greeting or thanks keyword.
    SmallTalk,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Department => "department",
            Slot::Month => "month",
            Slot::Year => "year",
            Slot::Action => "action",
            Slot::Format => "format",
            Slot::Status => "status",
            Slot::Query => "query",
            Slot::SmallTalk => "small_talk",
        };
        f.write_str(name)
    }
}

/// One entry of the match trace: which literal token filled which slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotMatch {
    /// The slot that was filled.
    pub slot: Slot,
    /// The literal token found in the text.
    pub token: String,
}

/// The structured reading of a free-text request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    /// The resolved department.
    pub department: DepartmentSlot,
    /// The resolved month, if any.
    pub month: Option<Month>,
    /// The report year (explicit or the current year).
    pub year: i32,
    /// Whether the year came from the text rather than the default.
    pub year_explicit: bool,
    /// The requested direction, if any.
    pub action: Option<AccessType>,
    /// The requested export format, if any.
    pub format: Option<ReportFormat>,
    /// The requested late/early-leave filter, if any.
    pub status: Option<AttendanceStatus>,
    /// True if a report trigger keyword was present.
    pub is_query: bool,
    /// Greeting or thanks detected in the text.
    pub small_talk: Option<SmallTalk>,
    /// Ordered trace of matched tokens.
    pub matches: Vec<SlotMatch>,
}

impl QueryIntent {
    /// Creates an empty intent for the given year.
    pub fn empty(year: i32) -> Self {
        Self {
            department: DepartmentSlot::Unknown,
            month: None,
            year,
            year_explicit: false,
            action: None,
            format: None,
            status: None,
            is_query: false,
            small_talk: None,
            matches: Vec::new(),
        }
    }

    /// Returns the token that filled `slot`, if one did.
    pub fn matched_token(&self, slot: Slot) -> Option<&str> {
        self.matches
            .iter()
            .find(|m| m.slot == slot)
            .map(|m| m.token.as_str())
    }
}
