//! Report assembly.
//!
//! The assembler fetches one date range from the store and joins it against
//! employees and departments in memory. Records that cannot be joined are
//! skipped and counted in [`ReportDiagnostics`]; a store failure yields an
//! empty record set rather than an error.

mod summary;
mod synthetic;

use std::collections::HashMap;

use chrono::{Datelike, Local};
use tracing::{debug, info, warn};

use crate::calendar::{month_range, year_range};
use crate::error::AssistantResult;
use crate::models::{
    AttendanceRecord, DepartmentSlot, Employee, Report, ReportDiagnostics, ReportRequest,
    ReportRow,
};
use crate::registry::DepartmentRegistry;
use crate::store::AttendanceStore;

pub use summary::{action_label, department_label, no_data_sentence, period_label, summarize};
pub use synthetic::{SAMPLE_DEPARTMENTS, sample_day, synthetic_rows};

/// Builds reports from a store and a department registry.
///
/// # Example
///
/// ```
/// use pdks_assistant::calendar::Month;
/// use pdks_assistant::models::{DepartmentSlot, ReportRequest};
/// use pdks_assistant::registry::DepartmentRegistry;
/// use pdks_assistant::report::ReportAssembler;
/// use pdks_assistant::store::MemoryStore;
///
/// let store = MemoryStore::default();
/// let registry = DepartmentRegistry::defaults();
/// let assembler = ReportAssembler::new(&store, &registry).with_current_year(2026);
///
/// let request = ReportRequest {
///     department: DepartmentSlot::Named("Finans".to_string()),
///     month: Month::new(3),
///     ..ReportRequest::default()
/// };
/// let report = assembler.assemble(&request).unwrap();
/// assert!(report.synthetic);
/// assert_eq!(report.total, 5);
/// ```
pub struct ReportAssembler<'a> {
    store: &'a dyn AttendanceStore,
    registry: &'a DepartmentRegistry,
    synthetic_fallback: bool,
    current_year: i32,
}

impl<'a> ReportAssembler<'a> {
    /// Creates an assembler with sample-data fallback enabled and the current
    /// year taken from the local clock.
    pub fn new(store: &'a dyn AttendanceStore, registry: &'a DepartmentRegistry) -> Self {
        Self {
            store,
            registry,
            synthetic_fallback: true,
            current_year: Local::now().year(),
        }
    }

    /// Enables or disables sample rows for empty reports.
    pub fn with_synthetic_fallback(mut self, enabled: bool) -> Self {
        self.synthetic_fallback = enabled;
        self
    }

    /// Sets the year used when a request names none.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Assembles the report for `request`.
    ///
    /// Fails only when the requested period cannot be represented.
    pub fn assemble(&self, request: &ReportRequest) -> AssistantResult<Report> {
        let year = request.year.unwrap_or(self.current_year);
        let (start, end) = match request.month {
            Some(month) => month_range(year, month)?,
            None => year_range(year)?,
        };

        let mut diagnostics = ReportDiagnostics::default();
        let records = match self.store.attendance_between(start, end) {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, %start, %end, "Attendance fetch failed, treating as empty");
                diagnostics.store_error = true;
                Vec::new()
            }
        };
        diagnostics.fetched = records.len();

        // Some(None) is a named department the registry does not know: it
        // filters out every record.
        let department_filter = match &request.department {
            DepartmentSlot::Named(name) => {
                let id = self.registry.id_of(name);
                if id.is_none() {
                    warn!(department = %name, "Department not in registry");
                }
                Some(id)
            }
            DepartmentSlot::All | DepartmentSlot::Unknown => None,
        };

        let mut lookups = Lookups::new(self.store);
        let mut rows = Vec::new();
        for record in &records {
            let row = self.join(
                record,
                department_filter,
                request,
                &mut lookups,
                &mut diagnostics,
            );
            rows.extend(row);
        }

        // Sample rows carry no late or early-leave minutes, so a status
        // report never falls back to them.
        let mut synthetic = false;
        if rows.is_empty()
            && self.synthetic_fallback
            && request.department.is_resolved()
            && request.status.is_none()
        {
            if let Some(month) = request.month {
                rows = synthetic_rows(&request.department, year, month, request.action)?;
                synthetic = true;
                info!(
                    department = ?request.department,
                    month = %month,
                    year,
                    rows = rows.len(),
                    "No attendance data, serving sample rows"
                );
            }
        }

        let summary = summarize(
            &request.department,
            request.month,
            year,
            request.action,
            request.status,
            request.format,
        );

        debug!(?diagnostics, rows = rows.len(), synthetic, "Report assembled");

        Ok(Report {
            total: rows.len(),
            rows,
            summary,
            synthetic,
            diagnostics,
        })
    }

    /// Joins one record into a row, or returns `None` if a filter drops it.
    fn join(
        &self,
        record: &AttendanceRecord,
        department_filter: Option<Option<i64>>,
        request: &ReportRequest,
        lookups: &mut Lookups<'_>,
        diagnostics: &mut ReportDiagnostics,
    ) -> Option<ReportRow> {
        let Some(employee) = lookups.employee(record.employee_id) else {
            debug!(
                record_id = record.id,
                employee_id = record.employee_id,
                "Skipping record with unknown employee"
            );
            diagnostics.skipped_unresolved_employee += 1;
            return None;
        };

        if let Some(wanted) = department_filter {
            let matches = matches!((wanted, employee.department_id), (Some(w), Some(d)) if w == d);
            if !matches {
                diagnostics.filtered_department += 1;
                return None;
            }
        }

        if request.action.is_some_and(|action| action != record.access_type) {
            diagnostics.filtered_action += 1;
            return None;
        }

        if request.status.is_some_and(|status| !status.matches(record)) {
            diagnostics.filtered_status += 1;
            return None;
        }

        let name = employee.full_name();
        let department_id = employee.department_id;
        let department_name = department_id.and_then(|id| lookups.department_name(id));
        if department_id.is_some() && department_name.is_none() {
            diagnostics.unresolved_department_name += 1;
        }

        Some(ReportRow {
            name,
            check_in: record.access_time,
            access_type: record.access_type.label().to_string(),
            department_name,
            synthetic: false,
        })
    }
}

/// Per-request memo of employee and department lookups.
struct Lookups<'a> {
    store: &'a dyn AttendanceStore,
    employees: HashMap<i64, Option<Employee>>,
    department_names: HashMap<i64, Option<String>>,
}

impl<'a> Lookups<'a> {
    fn new(store: &'a dyn AttendanceStore) -> Self {
        Self {
            store,
            employees: HashMap::new(),
            department_names: HashMap::new(),
        }
    }

    fn employee(&mut self, id: i64) -> Option<&Employee> {
        let store = self.store;
        self.employees
            .entry(id)
            .or_insert_with(|| match store.employee(id) {
                Ok(employee) => employee,
                Err(err) => {
                    warn!(error = %err, employee_id = id, "Employee lookup failed");
                    None
                }
            })
            .as_ref()
    }

    fn department_name(&mut self, id: i64) -> Option<String> {
        let store = self.store;
        self.department_names
            .entry(id)
            .or_insert_with(|| match store.department(id) {
                Ok(department) => department.map(|d| d.name),
                Err(err) => {
                    warn!(error = %err, department_id = id, "Department lookup failed");
                    None
                }
            })
            .clone()
    }
}
