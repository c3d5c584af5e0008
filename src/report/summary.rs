//! Turkish summary sentences for reports.

use crate::calendar::Month;
use crate::models::{AccessType, AttendanceStatus, DepartmentSlot, ReportFormat};

/// The department part of a sentence ("Finans departmanı", "Tüm departmanlar").
pub fn department_label(department: &DepartmentSlot) -> String {
    match department {
        DepartmentSlot::Named(name) => format!("{name} departmanı"),
        DepartmentSlot::All | DepartmentSlot::Unknown => "Tüm departmanlar".to_string(),
    }
}

/// The period part of a sentence ("Mart 2026", "2026 yılı").
pub fn period_label(month: Option<Month>, year: i32) -> String {
    match month {
        Some(month) => format!("{} {year}", month.name()),
        None => format!("{year} yılı"),
    }
}

/// The direction part of a sentence; both directions when unset.
pub fn action_label(action: Option<AccessType>) -> &'static str {
    match action {
        Some(AccessType::Entry) => "giriş",
        Some(AccessType::Exit) => "çıkış",
        None => "giriş-çıkış",
    }
}

/// Describes what a report covers.
///
/// # Example
///
/// ```
/// use pdks_assistant::calendar::Month;
/// use pdks_assistant::models::{AccessType, DepartmentSlot, ReportFormat};
/// use pdks_assistant::report::summarize;
///
/// let summary = summarize(
///     &DepartmentSlot::Named("Finans".to_string()),
///     Month::new(3),
///     2026,
///     Some(AccessType::Entry),
///     None,
///     Some(ReportFormat::Excel),
/// );
/// assert_eq!(
///     summary,
///     "Finans departmanı için Mart 2026 giriş raporu hazırlandı. Excel formatında indirebilirsiniz."
/// );
/// ```
pub fn summarize(
    department: &DepartmentSlot,
    month: Option<Month>,
    year: i32,
    action: Option<AccessType>,
    status: Option<AttendanceStatus>,
    format: Option<ReportFormat>,
) -> String {
    let mut summary = format!(
        "{} için {} ",
        department_label(department),
        period_label(month, year)
    );
    let action = action_label(action);
    match status {
        // "erken çıkış" already names the exit direction.
        Some(status) if status.label().ends_with(action) => summary.push_str(status.label()),
        Some(status) => {
            summary.push_str(status.label());
            summary.push(' ');
            summary.push_str(action);
        }
        None => summary.push_str(action),
    }
    summary.push_str(" raporu hazırlandı.");
    if let Some(format) = format {
        summary.push_str(&format!(" {} formatında indirebilirsiniz.", format.label()));
    }
    summary
}

/// The sentence used when a report has no rows.
pub fn no_data_sentence(department: &DepartmentSlot, month: Option<Month>, year: i32) -> String {
    format!(
        "{} için {} dönemine ait veri bulunamadı.",
        department_label(department),
        period_label(month, year)
    )
}
