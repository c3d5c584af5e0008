//! Text normalization shared by the registry and the interpreter.

/// Lowercases text for keyword matching.
///
/// Unicode lowercasing turns the Turkish dotted capital `İ` into `i` followed
/// by a combining dot (U+0307); the combining dot is dropped so that
/// "İnsan Kaynakları" and "insan kaynakları" normalize identically.
///
/// # Example
///
/// ```
/// use pdks_assistant::text::normalize;
///
/// assert_eq!(normalize("İnsan Kaynakları"), "insan kaynakları");
/// assert_eq!(normalize("  Finans  "), "finans");
/// ```
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\u{307}')
        .collect()
}

/// Returns true if `term` occurs in `text` with no letter or digit directly
/// before or after it.
///
/// Used for short keywords ("all", "tüm") that would otherwise match inside
/// unrelated words.
///
/// # Example
///
/// ```
/// use pdks_assistant::text::contains_term;
///
/// assert!(contains_term("tüm departmanlar", "tüm"));
/// assert!(contains_term("all, please", "all"));
/// assert!(!contains_term("finally", "all"));
/// ```
pub fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    text.match_indices(term).any(|(start, matched)| {
        let before = text[..start].chars().next_back();
        let after = text[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Number of characters in `s`, used to rank keywords longest-first.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
