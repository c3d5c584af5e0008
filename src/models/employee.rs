//! Employee model.
//!
//! Employees link attendance records to departments. The department link is
//! optional: an employee may not belong to any department.

use serde::{Deserialize, Serialize};

/// Represents an employee whose card readings appear in attendance reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i64,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The department the employee belongs to, if any.
    #[serde(default)]
    pub department_id: Option<i64>,
}

impl Employee {
    /// Returns the display name used in report rows ("first last").
    ///
    /// # Examples
    ///
    /// ```
    /// use pdks_assistant::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: 7,
    ///     first_name: "Zeynep".to_string(),
    ///     last_name: "Arslan".to_string(),
    ///     department_id: Some(1),
    /// };
    /// assert_eq!(employee.full_name(), "Zeynep Arslan");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
