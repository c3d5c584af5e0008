//! In-memory attendance store.
//!
//! Backs the HTTP binary (seeded from YAML through
//! [`ConfigLoader`](crate::config::ConfigLoader)) and the tests.

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

use crate::error::{AssistantError, AssistantResult};
use crate::models::{AttendanceRecord, Department, Employee};

use super::AttendanceStore;

/// The three record sets, as loaded from seed files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    /// Department rows.
    #[serde(default)]
    pub departments: Vec<Department>,
    /// Employee rows.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Attendance rows, in the order reports should list them.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

/// A store holding all records in vectors.
///
/// # Example
///
/// ```
/// use pdks_assistant::models::Department;
/// use pdks_assistant::store::{AttendanceStore, MemoryStore};
///
/// let store = MemoryStore::new(vec![Department::new(2, "IT"), Department::new(1, "Finans")], vec![], vec![]);
/// let names: Vec<String> = store.departments().unwrap().into_iter().map(|d| d.name).collect();
/// assert_eq!(names, vec!["Finans", "IT"]);
///
/// assert!(MemoryStore::unavailable().departments().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    departments: Vec<Department>,
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    unavailable: bool,
}

impl MemoryStore {
    /// Creates a store from record vectors.
    pub fn new(
        departments: Vec<Department>,
        employees: Vec<Employee>,
        attendance: Vec<AttendanceRecord>,
    ) -> Self {
        Self {
            departments,
            employees,
            attendance,
            unavailable: false,
        }
    }

    /// Creates a store from seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        Self::new(seed.departments, seed.employees, seed.attendance)
    }

    /// Creates a store whose every read fails, for exercising fallback paths.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check_available(&self) -> AssistantResult<()> {
        if self.unavailable {
            return Err(AssistantError::StoreUnavailable {
                message: "memory store marked unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl AttendanceStore for MemoryStore {
    fn departments(&self) -> AssistantResult<Vec<Department>> {
        self.check_available()?;
        let mut departments = self.departments.clone();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    fn department(&self, id: i64) -> AssistantResult<Option<Department>> {
        self.check_available()?;
        Ok(self.departments.iter().find(|d| d.id == id).cloned())
    }

    fn employee(&self, id: i64) -> AssistantResult<Option<Employee>> {
        self.check_available()?;
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }

    fn attendance_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AssistantResult<Vec<AttendanceRecord>> {
        self.check_available()?;
        let records: Vec<AttendanceRecord> = self
            .attendance
            .iter()
            .filter(|r| r.access_time >= start && r.access_time < end)
            .cloned()
            .collect();
        debug!(%start, %end, count = records.len(), "Attendance range read");
        Ok(records)
    }
}
