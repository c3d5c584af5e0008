//! Reply variants and their Turkish rendering.

use serde::{Deserialize, Serialize};

use crate::calendar::Month;
use crate::models::{DepartmentSlot, Report, ReportRow};
use crate::report::{department_label, no_data_sentence};

/// Usage example shown when a request is not understood.
pub const USAGE_EXAMPLE: &str = "Finans departmanı mart ayı giriş raporu";

/// The branch the dialogue policy chose for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The text opened with a greeting.
    Greeting,
    /// The text thanked the assistant.
    Thanks,
    /// No report trigger was found.
    NotUnderstood,
    /// Neither department nor month was given.
    AskDepartmentAndMonth {
        /// Canonical names to offer.
        departments: Vec<String>,
    },
    /// The department is known but the month is not.
    AskMonth {
        /// The resolved department.
        department: DepartmentSlot,
    },
    /// The month is known but the department is not.
    AskDepartment {
        /// The resolved month.
        month: Month,
        /// Canonical names to offer.
        departments: Vec<String>,
    },
    /// A report with at least one row.
    Report(Report),
    /// The report came back empty.
    NoData {
        /// The requested department.
        department: DepartmentSlot,
        /// The requested month.
        month: Option<Month>,
        /// The requested year.
        year: i32,
    },
    /// The report could not be built.
    Failed,
}

/// The chat reply sent back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The reply sentence(s).
    pub content: String,
    /// Report rows, present only when a report was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ReportRow>>,
}

impl ChatResponse {
    /// A reply without report rows.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            data: None,
        }
    }
}

impl Reply {
    /// Renders the reply as a chat response.
    pub fn render(self) -> ChatResponse {
        match self {
            Reply::Greeting => ChatResponse::text(
                "Merhaba! Ben PDKS asistanıyım. Departman ve ay belirterek giriş-çıkış \
                 raporu isteyebilirsiniz.",
            ),
            Reply::Thanks => ChatResponse::text(
                "Rica ederim! Başka bir rapor için yardıma ihtiyacınız olursa buradayım.",
            ),
            Reply::NotUnderstood => ChatResponse::text(format!(
                "Üzgünüm, isteğinizi anlayamadım. Örneğin \"{USAGE_EXAMPLE}\" şeklinde \
                 sorabilirsiniz."
            )),
            Reply::AskDepartmentAndMonth { departments } => ChatResponse::text(format!(
                "Hangi departman ve ay için rapor istediğinizi belirtir misiniz? \
                 Mevcut departmanlar: {}.",
                departments.join(", ")
            )),
            Reply::AskMonth { department } => ChatResponse::text(format!(
                "{} için hangi ayın raporunu istiyorsunuz?",
                department_label(&department)
            )),
            Reply::AskDepartment { month, departments } => ChatResponse::text(format!(
                "{} ayı için hangi departmanın raporunu istiyorsunuz? Mevcut departmanlar: {}.",
                month.name(),
                departments.join(", ")
            )),
            Reply::Report(report) => {
                let mut content = format!("{} kayıt bulundu. {}", report.total, report.summary);
                if report.synthetic && report.diagnostics.fetched == 0 {
                    content.push_str(
                        " Veritabanında kayıt bulunamadığı için örnek veriler gösterilmektedir.",
                    );
                } else if report.synthetic {
                    content.push_str(
                        " Seçilen filtrelerle eşleşen kayıt bulunamadığı için örnek veriler gösterilmektedir.",
                    );
                }
                ChatResponse {
                    content,
                    data: Some(report.rows),
                }
            }
            Reply::NoData {
                department,
                month,
                year,
            } => ChatResponse::text(no_data_sentence(&department, month, year)),
            Reply::Failed => ChatResponse::text(
                "Rapor hazırlanırken bir hata oluştu, lütfen daha sonra tekrar deneyin.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportDiagnostics;

    #[test]
    fn test_text_reply_omits_data() {
        let json = serde_json::to_value(Reply::Greeting.render()).unwrap();
        assert!(json["content"].as_str().unwrap().starts_with("Merhaba"));
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_ask_department_lists_names() {
        let response = Reply::AskDepartment {
            month: Month::new(3).unwrap(),
            departments: vec!["Finans".to_string(), "IT".to_string()],
        }
        .render();
        assert_eq!(
            response.content,
            "Mart ayı için hangi departmanın raporunu istiyorsunuz? Mevcut departmanlar: Finans, IT."
        );
    }

    #[test]
    fn test_ask_month_names_department() {
        let response = Reply::AskMonth {
            department: DepartmentSlot::Named("Hukuk".to_string()),
        }
        .render();
        assert_eq!(
            response.content,
            "Hukuk departmanı için hangi ayın raporunu istiyorsunuz?"
        );
    }

    #[test]
    fn test_not_understood_includes_example() {
        let response = Reply::NotUnderstood.render();
        assert!(response.content.contains(USAGE_EXAMPLE));
    }

    fn sample_report(fetched: usize) -> Report {
        Report {
            rows: Vec::new(),
            total: 5,
            summary: "IT departmanı için Mart 2026 giriş-çıkış raporu hazırlandı.".to_string(),
            synthetic: true,
            diagnostics: ReportDiagnostics {
                fetched,
                ..ReportDiagnostics::default()
            },
        }
    }

    #[test]
    fn test_sample_note_depends_on_fetch() {
        let response = Reply::Report(sample_report(0)).render();
        assert!(response.content.ends_with(
            "Veritabanında kayıt bulunamadığı için örnek veriler gösterilmektedir."
        ));

        let response = Reply::Report(sample_report(12)).render();
        assert!(response.content.ends_with(
            "Seçilen filtrelerle eşleşen kayıt bulunamadığı için örnek veriler gösterilmektedir."
        ));
        assert!(!response.content.contains("Veritabanında"));
    }

    #[test]
    fn test_failed_asks_to_retry() {
        let response = Reply::Failed.render();
        assert!(response.content.contains("lütfen daha sonra tekrar deneyin"));
        assert!(response.data.is_none());
    }
}
