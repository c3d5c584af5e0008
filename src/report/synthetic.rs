//! Demonstration rows for months with no real data.
//!
//! Every row built here carries `synthetic: true` so callers can tell it
//! apart from store data.

use chrono::{NaiveDate, NaiveTime};

use crate::calendar::Month;
use crate::error::{AssistantError, AssistantResult};
use crate::models::{AccessType, DepartmentSlot, ReportRow};

/// Departments used when sample rows are built for every department.
pub const SAMPLE_DEPARTMENTS: &[&str] = &["Finans", "IT", "İnsan Kaynakları"];

/// Sample readings per department: `(name, hour, minute, direction)`.
const SAMPLE_READINGS: [(&str, u32, u32, AccessType); 5] = [
    ("Ahmet Yılmaz", 8, 45, AccessType::Entry),
    ("Ayşe Demir", 8, 55, AccessType::Entry),
    ("Mehmet Kaya", 9, 20, AccessType::Entry),
    ("Ahmet Yılmaz", 17, 30, AccessType::Exit),
    ("Ayşe Demir", 17, 45, AccessType::Exit),
];

/// Day of the month the sample readings are dated on.
pub fn sample_day(month: Month) -> u32 {
    match month.number() {
        4 | 6 | 9 | 11 => 1,
        _ => 2,
    }
}

/// Builds the sample rows for a department slot and period, keeping only rows
/// that match `action` when it is set.
///
/// Returns an empty list for [`DepartmentSlot::Unknown`].
pub fn synthetic_rows(
    department: &DepartmentSlot,
    year: i32,
    month: Month,
    action: Option<AccessType>,
) -> AssistantResult<Vec<ReportRow>> {
    let departments: Vec<&str> = match department {
        DepartmentSlot::Named(name) => vec![name.as_str()],
        DepartmentSlot::All => SAMPLE_DEPARTMENTS.to_vec(),
        DepartmentSlot::Unknown => return Ok(Vec::new()),
    };

    let date = NaiveDate::from_ymd_opt(year, month.number(), sample_day(month)).ok_or(
        AssistantError::InvalidPeriod {
            year,
            month: month.number(),
        },
    )?;

    let mut rows = Vec::with_capacity(departments.len() * SAMPLE_READINGS.len());
    for department_name in departments {
        for (name, hour, minute, direction) in SAMPLE_READINGS {
            if action.is_some_and(|wanted| wanted != direction) {
                continue;
            }
            let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
                continue;
            };
            rows.push(ReportRow {
                name: name.to_string(),
                check_in: date.and_time(time),
                access_type: direction.label().to_string(),
                department_name: Some(department_name.to_string()),
                synthetic: true,
            });
        }
    }
    Ok(rows)
}
