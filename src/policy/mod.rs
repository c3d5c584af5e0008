//! Dialogue policy.
//!
//! Decides how to answer one interpreted request. The decision depends only
//! on which intent slots are filled; nothing carries over between requests.
//! Branches are checked in a fixed priority order and the first that applies
//! wins.

mod reply;

use chrono::{Datelike, Local, NaiveDate};
use tracing::{info, warn};

use crate::interpreter::interpret;
use crate::models::{DepartmentSlot, QueryIntent, ReportRequest, SmallTalk};
use crate::registry::DepartmentRegistry;
use crate::report::ReportAssembler;
use crate::store::AttendanceStore;

pub use reply::{ChatResponse, Reply, USAGE_EXAMPLE};

/// Answers interpreted requests against a store and registry.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pdks_assistant::policy::DialoguePolicy;
/// use pdks_assistant::registry::DepartmentRegistry;
/// use pdks_assistant::store::MemoryStore;
///
/// let store = MemoryStore::default();
/// let registry = DepartmentRegistry::defaults();
/// let policy = DialoguePolicy::new(&store, &registry)
///     .with_today(NaiveDate::from_ymd_opt(2026, 5, 10).unwrap());
///
/// let response = policy.answer("Finans mart raporu");
/// assert!(response.content.starts_with("5 kayıt bulundu."));
/// assert_eq!(response.data.map(|rows| rows.len()), Some(5));
/// ```
pub struct DialoguePolicy<'a> {
    store: &'a dyn AttendanceStore,
    registry: &'a DepartmentRegistry,
    synthetic_fallback: bool,
    today: NaiveDate,
}

impl<'a> DialoguePolicy<'a> {
    /// Creates a policy with sample-data fallback enabled and today's date
    /// taken from the local clock.
    pub fn new(store: &'a dyn AttendanceStore, registry: &'a DepartmentRegistry) -> Self {
        Self {
            store,
            registry,
            synthetic_fallback: true,
            today: Local::now().date_naive(),
        }
    }

    /// Enables or disables sample rows for empty reports.
    pub fn with_synthetic_fallback(mut self, enabled: bool) -> Self {
        self.synthetic_fallback = enabled;
        self
    }

    /// Sets the date relative expressions and default years resolve against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Picks the reply branch for an intent.
    pub fn decide(&self, intent: &QueryIntent) -> Reply {
        match intent.small_talk {
            Some(SmallTalk::Greeting) => return Reply::Greeting,
            Some(SmallTalk::Thanks) => return Reply::Thanks,
            None => {}
        }

        if !intent.is_query {
            return Reply::NotUnderstood;
        }

        match (&intent.department, intent.month) {
            (DepartmentSlot::Unknown, None) => Reply::AskDepartmentAndMonth {
                departments: self.department_names(),
            },
            (department, None) => Reply::AskMonth {
                department: department.clone(),
            },
            (DepartmentSlot::Unknown, Some(month)) => Reply::AskDepartment {
                month,
                departments: self.department_names(),
            },
            (department, Some(month)) => {
                let request = ReportRequest {
                    department: department.clone(),
                    month: Some(month),
                    year: Some(intent.year),
                    action: intent.action,
                    status: intent.status,
                    format: intent.format,
                };
                self.report(request)
            }
        }
    }

    /// Decides and renders the reply for an intent.
    pub fn respond(&self, intent: &QueryIntent) -> ChatResponse {
        self.decide(intent).render()
    }

    /// Interprets free text and answers it.
    pub fn answer(&self, prompt: &str) -> ChatResponse {
        let synonyms = self.registry.synonyms();
        let intent = interpret(prompt, &synonyms, self.today);
        self.respond(&intent)
    }

    fn report(&self, request: ReportRequest) -> Reply {
        let assembler = ReportAssembler::new(self.store, self.registry)
            .with_synthetic_fallback(self.synthetic_fallback)
            .with_current_year(self.today.year());

        match assembler.assemble(&request) {
            Ok(report) if report.is_empty() => Reply::NoData {
                department: request.department,
                month: request.month,
                year: request.year.unwrap_or(self.today.year()),
            },
            Ok(report) => {
                info!(
                    rows = report.total,
                    synthetic = report.synthetic,
                    "Report ready"
                );
                Reply::Report(report)
            }
            Err(err) => {
                warn!(error = %err, "Report assembly failed");
                Reply::Failed
            }
        }
    }

    fn department_names(&self) -> Vec<String> {
        self.registry
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
