//! Rule-based query interpreter.
//!
//! Turns one free-text request into a [`QueryIntent`]. Every resolver is a
//! pure function of normalized text: the same input always produces the same
//! intent, and nothing is remembered between requests. The only inputs besides
//! the text are the [`SynonymMap`] of the current registry and the date used
//! for "this month"/"last month" style expressions.

pub mod lexicon;

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use tracing::debug;

use crate::calendar::{Month, previous_month};
use crate::models::{
    AccessType, AttendanceStatus, DepartmentSlot, QueryIntent, ReportFormat, Slot, SlotMatch,
    SmallTalk,
};
use crate::registry::SynonymMap;
use crate::text::{contains_term, normalize};

use lexicon::{
    ACTION_KEYWORDS, CURRENT_MONTH_KEYWORDS, CURRENT_YEAR_KEYWORDS, FORMAT_KEYWORDS,
    MONTH_KEYWORDS, PREVIOUS_MONTH_KEYWORDS, PREVIOUS_YEAR_KEYWORDS, REPORT_TRIGGERS,
    SMALL_TALK_KEYWORDS, STATUS_KEYWORDS, WILDCARD_KEYWORDS, first_group_match, first_keyword,
};

/// "N. ay" with optional whitespace after the dot; N must start a word.
static NUMERIC_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\.\s*ay").expect("numeric month pattern is valid"));

/// A four-digit year in the 2000s.
static EXPLICIT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").expect("year pattern is valid"));

/// A resolved slot value together with the literal token that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// The slot value.
    pub value: T,
    /// The token found in the text.
    pub token: String,
}

impl<T> Resolved<T> {
    fn new(value: T, token: impl Into<String>) -> Self {
        Self {
            value,
            token: token.into(),
        }
    }
}

/// Resolves the department slot.
///
/// Wildcard keywords win first, then canonical names longest-first, then
/// aliases longest-first. Returns `None` when nothing matches.
///
/// # Example
///
/// ```
/// use pdks_assistant::interpreter::resolve_department;
/// use pdks_assistant::models::{Department, DepartmentSlot};
/// use pdks_assistant::registry::build_synonym_map;
///
/// let synonyms = build_synonym_map(&[
///     Department::new(1, "Finans"),
///     Department::new(2, "İnsan Kaynakları"),
/// ]);
/// let found = resolve_department("ik departmanı", &synonyms).unwrap();
/// assert_eq!(found.value, DepartmentSlot::Named("İnsan Kaynakları".to_string()));
/// assert_eq!(found.token, "ik");
///
/// let found = resolve_department("tüm departmanlar", &synonyms).unwrap();
/// assert_eq!(found.value, DepartmentSlot::All);
/// ```
pub fn resolve_department(text: &str, synonyms: &SynonymMap) -> Option<Resolved<DepartmentSlot>> {
    if let Some(keyword) = WILDCARD_KEYWORDS
        .iter()
        .find(|keyword| contains_term(text, keyword))
    {
        return Some(Resolved::new(DepartmentSlot::All, *keyword));
    }

    synonyms
        .canonical_by_length()
        .iter()
        .chain(synonyms.aliases_by_length())
        .find(|(key, _)| text.contains(key.as_str()))
        .map(|(key, name)| Resolved::new(DepartmentSlot::Named(name.clone()), key.clone()))
}

/// Resolves the month from month names and "N. ay" expressions.
///
/// The keyword table is scanned in order and the first hit is kept; a valid
/// "N. ay" pattern then replaces it.
///
/// # Example
///
/// ```
/// use pdks_assistant::interpreter::resolve_month;
///
/// assert_eq!(resolve_month("mart raporu").unwrap().value.code(), "03");
/// assert_eq!(resolve_month("11. ay raporu").unwrap().value.code(), "11");
/// assert!(resolve_month("rapor").is_none());
/// ```
pub fn resolve_month(text: &str) -> Option<Resolved<Month>> {
    let from_table = MONTH_KEYWORDS
        .iter()
        .find(|(keyword, _)| contains_after_non_digit(text, keyword))
        .and_then(|(keyword, number)| Month::new(*number).map(|m| Resolved::new(m, *keyword)));

    let from_pattern = NUMERIC_MONTH.captures_iter(text).find_map(|captures| {
        let number = captures.get(1)?.as_str().parse::<u32>().ok()?;
        let month = Month::new(number)?;
        Some(Resolved::new(month, captures.get(0)?.as_str()))
    });

    from_pattern.or(from_table)
}

/// True if `keyword` occurs somewhere not directly preceded by a digit, so
/// that "2. ay" is not found inside "112. ay".
fn contains_after_non_digit(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword)
        .any(|(start, _)| !text[..start].chars().next_back().is_some_and(|c| c.is_ascii_digit()))
}

/// Resolves "this month"/"last month" against `today`.
///
/// Returns the year the month belongs to alongside the month, since "last
/// month" in January is December of the previous year.
pub fn resolve_relative_month(text: &str, today: NaiveDate) -> Option<Resolved<(i32, Month)>> {
    if let Some(keyword) = first_keyword(text, PREVIOUS_MONTH_KEYWORDS) {
        let (year, number) = previous_month(today.year(), today.month());
        return Month::new(number).map(|month| Resolved::new((year, month), keyword));
    }
    if let Some(keyword) = first_keyword(text, CURRENT_MONTH_KEYWORDS) {
        return Month::new(today.month()).map(|month| Resolved::new((today.year(), month), keyword));
    }
    None
}

/// Resolves an explicit or relative year. Returns `None` when the text names
/// no year.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pdks_assistant::interpreter::resolve_year;
///
/// let today = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
/// assert_eq!(resolve_year("mart 2025 raporu", today).unwrap().value, 2025);
/// assert_eq!(resolve_year("geçen yıl mart", today).unwrap().value, 2025);
/// assert!(resolve_year("mart raporu", today).is_none());
/// ```
pub fn resolve_year(text: &str, today: NaiveDate) -> Option<Resolved<i32>> {
    if let Some(found) = EXPLICIT_YEAR.captures(text).and_then(|c| c.get(1)) {
        if let Ok(year) = found.as_str().parse::<i32>() {
            return Some(Resolved::new(year, found.as_str()));
        }
    }
    if let Some(keyword) = first_keyword(text, PREVIOUS_YEAR_KEYWORDS) {
        return Some(Resolved::new(today.year() - 1, keyword));
    }
    first_keyword(text, CURRENT_YEAR_KEYWORDS).map(|keyword| Resolved::new(today.year(), keyword))
}

/// Resolves the entry/exit direction. The entry group is checked first.
pub fn resolve_action(text: &str) -> Option<Resolved<AccessType>> {
    first_group_match(text, ACTION_KEYWORDS).map(|(action, token)| Resolved::new(action, token))
}

/// Resolves the export format. The spreadsheet group is checked first.
pub fn resolve_format(text: &str) -> Option<Resolved<ReportFormat>> {
    first_group_match(text, FORMAT_KEYWORDS).map(|(format, token)| Resolved::new(format, token))
}

/// Resolves the late/early-leave filter. The late group is checked first.
pub fn resolve_status(text: &str) -> Option<Resolved<AttendanceStatus>> {
    first_group_match(text, STATUS_KEYWORDS).map(|(status, token)| Resolved::new(status, token))
}

/// Resolves greetings and thanks. Greetings are checked first.
pub fn resolve_small_talk(text: &str) -> Option<Resolved<SmallTalk>> {
    first_group_match(text, SMALL_TALK_KEYWORDS).map(|(kind, token)| Resolved::new(kind, token))
}

/// Returns true if the text contains a report trigger keyword.
pub fn resolve_is_query(text: &str) -> bool {
    first_keyword(text, REPORT_TRIGGERS).is_some()
}

/// Interprets a free-text request.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pdks_assistant::interpreter::interpret;
/// use pdks_assistant::models::{AccessType, DepartmentSlot};
/// use pdks_assistant::registry::DepartmentRegistry;
///
/// let synonyms = DepartmentRegistry::defaults().synonyms();
/// let today = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
///
/// let intent = interpret("Finans departmanı mart ayı giriş raporu", &synonyms, today);
/// assert_eq!(intent.department, DepartmentSlot::Named("Finans".to_string()));
/// assert_eq!(intent.month.unwrap().code(), "03");
/// assert_eq!(intent.year, 2026);
/// assert_eq!(intent.action, Some(AccessType::Entry));
/// assert!(intent.is_query);
/// ```
pub fn interpret(text: &str, synonyms: &SynonymMap, today: NaiveDate) -> QueryIntent {
    let text = normalize(text);
    let mut intent = QueryIntent::empty(today.year());

    if let Some(found) = resolve_small_talk(&text) {
        intent.small_talk = Some(found.value);
        record(&mut intent, Slot::SmallTalk, found.token);
    }

    if let Some(found) = resolve_department(&text, synonyms) {
        intent.department = found.value;
        record(&mut intent, Slot::Department, found.token);
    }

    let mut relative_year = None;
    if let Some(found) = resolve_month(&text) {
        intent.month = Some(found.value);
        record(&mut intent, Slot::Month, found.token);
    } else if let Some(found) = resolve_relative_month(&text, today) {
        let (year, month) = found.value;
        intent.month = Some(month);
        relative_year = Some(year);
        record(&mut intent, Slot::Month, found.token);
    }

    if let Some(found) = resolve_year(&text, today) {
        intent.year = found.value;
        intent.year_explicit = true;
        record(&mut intent, Slot::Year, found.token);
    } else if let Some(year) = relative_year {
        intent.year = year;
    }

    if let Some(found) = resolve_action(&text) {
        intent.action = Some(found.value);
        record(&mut intent, Slot::Action, found.token);
    }

    if let Some(found) = resolve_format(&text) {
        intent.format = Some(found.value);
        record(&mut intent, Slot::Format, found.token);
    }

    if let Some(found) = resolve_status(&text) {
        intent.status = Some(found.value);
        record(&mut intent, Slot::Status, found.token);
    }

    if let Some(token) = first_keyword(&text, REPORT_TRIGGERS) {
        intent.is_query = true;
        record(&mut intent, Slot::Query, token);
    }

    debug!(
        department = ?intent.department,
        month = ?intent.month,
        year = intent.year,
        is_query = intent.is_query,
        matches = intent.matches.len(),
        "Interpreted request"
    );

    intent
}

fn record(intent: &mut QueryIntent, slot: Slot, token: impl Into<String>) {
    intent.matches.push(SlotMatch {
        slot,
        token: token.into(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::Department;
    use crate::registry::{DepartmentRegistry, build_synonym_map};
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
    }

    fn synonyms() -> SynonymMap {
        DepartmentRegistry::defaults().synonyms()
    }

    fn named(name: &str) -> DepartmentSlot {
        DepartmentSlot::Named(name.to_string())
    }

    #[test]
    fn test_interpret_full_request() {
        let intent = interpret("Finans departmanı mart ayı giriş raporu", &synonyms(), today());

        assert_eq!(intent.department, named("Finans"));
        assert_eq!(intent.month, Month::new(3));
        assert_eq!(intent.year, 2026);
        assert!(!intent.year_explicit);
        assert_eq!(intent.action, Some(AccessType::Entry));
        assert_eq!(intent.format, None);
        assert_eq!(intent.status, None);
        assert!(intent.is_query);
        assert_eq!(intent.small_talk, None);

        let slots: Vec<Slot> = intent.matches.iter().map(|m| m.slot).collect();
        assert_eq!(
            slots,
            vec![Slot::Department, Slot::Month, Slot::Action, Slot::Query]
        );
        assert_eq!(intent.matched_token(Slot::Department), Some("finans"));
        assert_eq!(intent.matched_token(Slot::Query), Some("rapor"));
    }

    #[test]
    fn test_department_alias_and_case() {
        let map = synonyms();
        let found = resolve_department(&normalize("İK mart raporu"), &map).unwrap();
        assert_eq!(found.value, named("İnsan Kaynakları"));

        let found = resolve_department(&normalize("İnsan Kaynakları RAPORU"), &map).unwrap();
        assert_eq!(found.value, named("İnsan Kaynakları"));
        assert_eq!(found.token, "insan kaynakları");

        let found = resolve_department("human resources report", &map).unwrap();
        assert_eq!(found.value, named("İnsan Kaynakları"));
    }

    #[test]
    fn test_department_longest_canonical_wins() {
        let map = build_synonym_map(&[
            Department::new(1, "Satış"),
            Department::new(2, "Satış Destek"),
        ]);
        let found = resolve_department("satış destek raporu", &map).unwrap();
        assert_eq!(found.value, named("Satış Destek"));

        let found = resolve_department("satış raporu", &map).unwrap();
        assert_eq!(found.value, named("Satış"));
    }

    #[test]
    fn test_department_canonical_before_alias() {
        let map = build_synonym_map(&[
            Department::new(1, "IT"),
            Department::new(2, "Information Technology Support"),
        ]);
        let found = resolve_department("information technology support raporu", &map).unwrap();
        assert_eq!(found.value, named("Information Technology Support"));
    }

    #[test]
    fn test_canonical_beats_longer_alias_of_another_department() {
        let found = resolve_department("human resources it raporu", &synonyms()).unwrap();
        assert_eq!(found.value, named("IT"));
        assert_eq!(found.token, "it");
    }

    #[test]
    fn test_every_registry_name_resolves_to_itself() {
        let seeded = ConfigLoader::load("./config/pdks").unwrap();
        for registry in [
            DepartmentRegistry::defaults(),
            DepartmentRegistry::load(&seeded.store()),
        ] {
            let map = registry.synonyms();
            for name in registry.names() {
                let found = resolve_department(&normalize(name), &map).unwrap();
                assert_eq!(found.value, named(name), "department: {name}");
            }
        }
    }

    #[test]
    fn test_names_containing_wildcard_keywords_resolve_to_all() {
        let map = build_synonym_map(&[
            Department::new(1, "Finans"),
            Department::new(2, "Bütün Ürünler"),
            Department::new(3, "All Stars"),
        ]);
        assert_eq!(
            resolve_department(&normalize("Finans"), &map).unwrap().value,
            named("Finans")
        );
        for name in ["Bütün Ürünler", "All Stars"] {
            let found = resolve_department(&normalize(name), &map).unwrap();
            assert_eq!(found.value, DepartmentSlot::All, "department: {name}");
        }
    }

    #[test]
    fn test_department_wildcards() {
        let map = synonyms();
        for text in [
            "tüm departmanlar mart raporu",
            "bütün şirket raporu",
            "all departments report",
            "whole company report",
            "every department report",
            "show all",
        ] {
            let found = resolve_department(text, &map).unwrap();
            assert_eq!(found.value, DepartmentSlot::All, "text: {text}");
        }
    }

    #[test]
    fn test_wildcard_needs_word_boundary() {
        let map = build_synonym_map(&[Department::new(1, "Finans")]);
        assert!(resolve_department("small report", &map).is_none());
        assert!(resolve_department("tallinn", &map).is_none());
    }

    #[test]
    fn test_department_unknown() {
        assert!(resolve_department("mart raporu", &synonyms()).is_none());
    }

    #[test]
    fn test_month_first_table_hit_wins() {
        assert_eq!(resolve_month("ocak ve şubat").unwrap().value, Month::new(1).unwrap());
        assert_eq!(resolve_month("şubat ve ocak").unwrap().value, Month::new(1).unwrap());
    }

    #[test]
    fn test_numeric_month_overrides_table() {
        let found = resolve_month("mart değil 4. ay").unwrap();
        assert_eq!(found.value, Month::new(4).unwrap());
        assert_eq!(found.token, "4. ay");

        assert_eq!(resolve_month("12.ay").unwrap().value, Month::new(12).unwrap());
        assert_eq!(resolve_month("10.  ayın raporu").unwrap().value, Month::new(10).unwrap());
    }

    #[test]
    fn test_numeric_month_out_of_range_is_ignored() {
        assert!(resolve_month("0. ay").is_none());
        assert_eq!(resolve_month("mart 0. ay").unwrap().value, Month::new(3).unwrap());
    }

    #[test]
    fn test_numeric_month_needs_leading_boundary() {
        assert!(resolve_month("112. ay raporu").is_none());
        assert!(resolve_month("2026 yılı 112. ay").is_none());
        assert_eq!(resolve_month("(12. ay)").unwrap().value, Month::new(12).unwrap());
        assert_eq!(resolve_month("112. ay ve 3. ay").unwrap().value, Month::new(3).unwrap());
    }

    #[test]
    fn test_relative_months() {
        let found = resolve_relative_month("geçen ay raporu", today()).unwrap();
        assert_eq!(found.value, (2026, Month::new(4).unwrap()));

        let found = resolve_relative_month("bu ay raporu", today()).unwrap();
        assert_eq!(found.value, (2026, Month::new(5).unwrap()));

        let january = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let found = resolve_relative_month("geçen ay", january).unwrap();
        assert_eq!(found.value, (2025, Month::new(12).unwrap()));
    }

    #[test]
    fn test_interpret_last_month_in_january_moves_year() {
        let january = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let intent = interpret("Finans geçen ay raporu", &synonyms(), january);
        assert_eq!(intent.month, Month::new(12));
        assert_eq!(intent.year, 2025);
        assert!(!intent.year_explicit);
    }

    #[test]
    fn test_named_month_beats_relative_month() {
        let intent = interpret("bu ay değil mart raporu", &synonyms(), today());
        assert_eq!(intent.month, Month::new(3));
    }

    #[test]
    fn test_year_resolution() {
        assert_eq!(resolve_year("mart 2024", today()).unwrap().value, 2024);
        assert_eq!(resolve_year("bu yıl", today()).unwrap().value, 2026);
        assert!(resolve_year("12024 numaralı", today()).is_none());

        let intent = interpret("Finans mart 2024 raporu", &synonyms(), today());
        assert_eq!(intent.year, 2024);
        assert!(intent.year_explicit);
    }

    #[test]
    fn test_action_entry_group_first() {
        assert_eq!(resolve_action("giriş çıkış").unwrap().value, AccessType::Entry);
        assert_eq!(resolve_action("check-out list").unwrap().value, AccessType::Exit);
        assert!(resolve_action("mart raporu").is_none());
    }

    #[test]
    fn test_format_resolution() {
        assert_eq!(resolve_format("xlsx olarak").unwrap().value, ReportFormat::Excel);
        assert_eq!(resolve_format("pdf olarak").unwrap().value, ReportFormat::Pdf);
        assert!(resolve_format("rapor").is_none());
    }

    #[test]
    fn test_status_resolution() {
        assert_eq!(
            resolve_status("geç kalanlar listesi").unwrap().value,
            AttendanceStatus::Late
        );
        assert_eq!(
            resolve_status("erken çıkanlar").unwrap().value,
            AttendanceStatus::EarlyLeave
        );
        assert!(resolve_status("geçen ay raporu").is_none());
    }

    #[test]
    fn test_small_talk_greeting_before_thanks() {
        assert_eq!(
            resolve_small_talk("merhaba, teşekkürler").unwrap().value,
            SmallTalk::Greeting
        );
        assert_eq!(resolve_small_talk("çok sağol").unwrap().value, SmallTalk::Thanks);
        assert!(resolve_small_talk("finans raporu").is_none());
    }

    #[test]
    fn test_is_query_triggers() {
        assert!(resolve_is_query("giriş kayıtları"));
        assert!(resolve_is_query("show entries"));
        assert!(!resolve_is_query("finans mart"));
    }

    proptest! {
        #[test]
        fn prop_interpret_is_deterministic(text in "\\PC{0,40}") {
            let map = synonyms();
            prop_assert_eq!(interpret(&text, &map, today()), interpret(&text, &map, today()));
        }

        #[test]
        fn prop_resolved_department_is_registry_name_or_all(text in "\\PC{0,40}") {
            let registry = DepartmentRegistry::defaults();
            let map = registry.synonyms();
            match interpret(&text, &map, today()).department {
                DepartmentSlot::Named(name) => prop_assert!(registry.names().contains(&name.as_str())),
                DepartmentSlot::All | DepartmentSlot::Unknown => {}
            }
        }

        #[test]
        fn prop_resolved_month_is_valid_code(text in "\\PC{0,40}") {
            if let Some(month) = interpret(&text, &synonyms(), today()).month {
                let code = month.code();
                prop_assert_eq!(code.len(), 2);
                prop_assert!(("01"..="12").contains(&code.as_str()));
            }
        }

        #[test]
        fn prop_numeric_month_pattern(n in 1u32..=12) {
            let text = format!("{n}. ay raporu");
            prop_assert_eq!(resolve_month(&text).map(|r| r.value.number()), Some(n));
        }
    }
}
