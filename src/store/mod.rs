//! Attendance store seam.
//!
//! The assistant needs nothing from its data source beyond single-table
//! filtered reads: departments, employees by id, and attendance records by
//! time range. All joining happens in memory in the report assembler.

mod memory;

use chrono::NaiveDateTime;

use crate::error::AssistantResult;
use crate::models::{AttendanceRecord, Department, Employee};

pub use memory::{MemoryStore, SeedData};

/// Read access to the three record sets a report is built from.
///
/// Implementations report failures as
/// [`AssistantError::StoreUnavailable`](crate::error::AssistantError::StoreUnavailable);
/// callers recover locally instead of failing the request.
pub trait AttendanceStore: Send + Sync {
    /// Returns every department, ordered by name.
    fn departments(&self) -> AssistantResult<Vec<Department>>;

    /// Returns the department with the given id, if any.
    fn department(&self, id: i64) -> AssistantResult<Option<Department>>;

    /// Returns the employee with the given id, if any.
    fn employee(&self, id: i64) -> AssistantResult<Option<Employee>>;

    /// Returns the attendance records with `start <= access_time < end`, in
    /// store order.
    fn attendance_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AssistantResult<Vec<AttendanceRecord>>;
}
