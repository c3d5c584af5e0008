//! Core data models for the PDKS report assistant.
//!
//! This module contains the records owned by the attendance store
//! (departments, employees, card readings) and the per-request values the
//! assistant builds from them (intents, report requests, reports).

mod attendance;
mod department;
mod employee;
mod intent;
mod report;

pub use attendance::{AccessType, AttendanceRecord, AttendanceStatus};
pub use department::Department;
pub use employee::Employee;
pub use intent::{
    ALL_DEPARTMENTS, DepartmentSlot, QueryIntent, ReportFormat, Slot, SlotMatch, SmallTalk,
};
pub use report::{Report, ReportDiagnostics, ReportRequest, ReportRow};
