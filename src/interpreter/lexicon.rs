//! Static keyword tables for the query interpreter.
//!
//! Every table is an ordered slice; resolvers scan them front to back and the
//! first hit wins, so the order here is part of the behavior.

use crate::models::{AccessType, AttendanceStatus, ReportFormat, SmallTalk};

/// Keywords that select every department. Matched on word boundaries.
pub const WILDCARD_KEYWORDS: &[&str] = &[
    "tüm departmanlar",
    "bütün departmanlar",
    "tüm şirket",
    "bütün şirket",
    "all departments",
    "every department",
    "whole company",
    "tümü",
    "hepsi",
    "tüm",
    "bütün",
    "all",
];

/// Month keywords: twelve names, then twelve "N. ay" spellings.
///
/// "1. ay" is a substring of "11. ay" and "12. ay"; the numeric pattern in
/// the interpreter overrides whatever this table yields.
pub const MONTH_KEYWORDS: [(&str, u32); 24] = [
    ("ocak", 1),
    ("şubat", 2),
    ("mart", 3),
    ("nisan", 4),
    ("mayıs", 5),
    ("haziran", 6),
    ("temmuz", 7),
    ("ağustos", 8),
    ("eylül", 9),
    ("ekim", 10),
    ("kasım", 11),
    ("aralık", 12),
    ("1. ay", 1),
    ("2. ay", 2),
    ("3. ay", 3),
    ("4. ay", 4),
    ("5. ay", 5),
    ("6. ay", 6),
    ("7. ay", 7),
    ("8. ay", 8),
    ("9. ay", 9),
    ("10. ay", 10),
    ("11. ay", 11),
    ("12. ay", 12),
];

/// "this month" expressions.
pub const CURRENT_MONTH_KEYWORDS: &[&str] = &["bu ay", "this month"];

/// "last month" expressions.
pub const PREVIOUS_MONTH_KEYWORDS: &[&str] = &["geçen ay", "last month"];

/// "this year" expressions.
pub const CURRENT_YEAR_KEYWORDS: &[&str] = &["bu yıl", "bu sene", "this year"];

/// "last year" expressions.
pub const PREVIOUS_YEAR_KEYWORDS: &[&str] = &["geçen yıl", "geçen sene", "last year"];

/// Direction keywords, entry group first.
pub const ACTION_KEYWORDS: &[(AccessType, &[&str])] = &[
    (AccessType::Entry, &["giriş", "entry", "check-in", "gelen"]),
    (AccessType::Exit, &["çıkış", "exit", "check-out", "çıkan"]),
];

/// Export format keywords, spreadsheet group first.
pub const FORMAT_KEYWORDS: &[(ReportFormat, &[&str])] = &[
    (ReportFormat::Excel, &["excel", "xlsx", "csv"]),
    (ReportFormat::Pdf, &["pdf"]),
];

/// Late/early-leave keywords, late group first.
pub const STATUS_KEYWORDS: &[(AttendanceStatus, &[&str])] = &[
    (
        AttendanceStatus::Late,
        &["gecikme", "geç kal", "geç gel", "late"],
    ),
    (
        AttendanceStatus::EarlyLeave,
        &["erken çık", "erken ayrıl", "early leave"],
    ),
];

/// Keywords that mark the text as a report request.
pub const REPORT_TRIGGERS: &[&str] = &[
    "rapor", "report", "liste", "list", "göster", "show", "kayıt", "record",
];

/// Greeting and thanks keywords, greetings first.
pub const SMALL_TALK_KEYWORDS: &[(SmallTalk, &[&str])] = &[
    (
        SmallTalk::Greeting,
        &["merhaba", "selam", "günaydın", "iyi günler", "hello"],
    ),
    (
        SmallTalk::Thanks,
        &["teşekkür", "sağol", "sağ ol", "thanks", "thank you"],
    ),
];

/// Returns the label and keyword of the first group with a keyword in `text`.
pub fn first_group_match<T: Copy>(
    text: &str,
    groups: &[(T, &[&'static str])],
) -> Option<(T, &'static str)> {
    groups.iter().find_map(|(label, keywords)| {
        keywords
            .iter()
            .find(|keyword| text.contains(**keyword))
            .map(|keyword| (*label, *keyword))
    })
}

/// Returns the first keyword of `keywords` contained in `text`.
pub fn first_keyword(text: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_table_order() {
        assert_eq!(MONTH_KEYWORDS.len(), 24);
        for (index, (_, number)) in MONTH_KEYWORDS.iter().enumerate() {
            assert_eq!(*number as usize, index % 12 + 1);
        }
    }

    #[test]
    fn test_keywords_are_normalized() {
        let all_keywords = WILDCARD_KEYWORDS
            .iter()
            .chain(REPORT_TRIGGERS)
            .chain(MONTH_KEYWORDS.iter().map(|(k, _)| k))
            .chain(ACTION_KEYWORDS.iter().flat_map(|(_, k)| k.iter()))
            .chain(FORMAT_KEYWORDS.iter().flat_map(|(_, k)| k.iter()))
            .chain(STATUS_KEYWORDS.iter().flat_map(|(_, k)| k.iter()))
            .chain(SMALL_TALK_KEYWORDS.iter().flat_map(|(_, k)| k.iter()));
        for keyword in all_keywords {
            assert_eq!(crate::text::normalize(keyword), *keyword);
        }
    }

    #[test]
    fn test_first_group_match_respects_group_order() {
        let found = first_group_match("giriş ve çıkış", ACTION_KEYWORDS);
        assert_eq!(found, Some((AccessType::Entry, "giriş")));
        let found = first_group_match("yalnızca çıkış", ACTION_KEYWORDS);
        assert_eq!(found, Some((AccessType::Exit, "çıkış")));
        assert_eq!(first_group_match("rapor", ACTION_KEYWORDS), None);
    }

    #[test]
    fn test_first_keyword() {
        assert_eq!(first_keyword("mart raporu", REPORT_TRIGGERS), Some("rapor"));
        assert_eq!(first_keyword("mart", REPORT_TRIGGERS), None);
    }
}
