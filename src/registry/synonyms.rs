//! Department synonym map.
//!
//! Maps lowercase aliases to canonical department names. Canonical names come
//! from the live registry; a static Turkish/English dictionary is merged in
//! afterwards without overriding anything the registry already defined.

use std::collections::HashMap;

use crate::models::Department;
use crate::text::{char_len, normalize};

/// Groups of interchangeable department terms (all lowercase).
///
/// A group attaches to the first registry department whose normalized name
/// appears in the group; every term of the group then aliases that
/// department.
pub const ALIAS_GROUPS: &[&[&str]] = &[
    &["insan kaynakları", "human resources", "ik", "hr"],
    &["bilgi teknolojileri", "information technology", "it", "bt"],
    &["finans", "finance"],
    &["muhasebe", "accounting"],
    &["satış", "sales"],
    &["pazarlama", "marketing"],
    &["üretim", "production", "manufacturing"],
    &["mühendislik", "engineering"],
    &["hukuk", "legal"],
    &["lojistik", "logistics"],
    &["yönetim", "management"],
    &["operasyon", "operations"],
    &["ar-ge", "arge", "research", "araştırma"],
    &["yazılım geliştirme", "software development", "yazılım", "software"],
];

/// Lowercase alias to canonical department name lookup.
#[derive(Debug, Clone, Default)]
pub struct SynonymMap {
    lookup: HashMap<String, String>,
    canonical: Vec<(String, String)>,
    aliases: Vec<(String, String)>,
}

impl SynonymMap {
    /// Returns the canonical name for an alias or canonical key.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.lookup.get(&normalize(alias)).map(String::as_str)
    }

    /// Number of keys (canonical names plus aliases).
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Returns true if the map has no keys.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Canonical `(key, name)` pairs, longest key first.
    pub fn canonical_by_length(&self) -> &[(String, String)] {
        &self.canonical
    }

    /// Non-canonical `(alias, name)` pairs, longest alias first.
    pub fn aliases_by_length(&self) -> &[(String, String)] {
        &self.aliases
    }
}

/// Builds the synonym map for a department list.
///
/// # Example
///
/// ```
/// use pdks_assistant::models::Department;
/// use pdks_assistant::registry::build_synonym_map;
///
/// let map = build_synonym_map(&[Department::new(1, "Finans"), Department::new(2, "IT")]);
/// assert_eq!(map.get("finans"), Some("Finans"));
/// assert_eq!(map.get("finance"), Some("Finans"));
/// assert_eq!(map.get("bt"), Some("IT"));
/// assert_eq!(map.get("pazarlama"), None);
/// ```
pub fn build_synonym_map(departments: &[Department]) -> SynonymMap {
    let mut lookup: HashMap<String, String> = HashMap::new();
    let mut canonical: Vec<(String, String)> = Vec::new();

    for department in departments {
        let key = normalize(&department.name);
        if key.is_empty() || lookup.contains_key(&key) {
            continue;
        }
        lookup.insert(key.clone(), department.name.clone());
        canonical.push((key, department.name.clone()));
    }

    let mut aliases: Vec<(String, String)> = Vec::new();
    for group in ALIAS_GROUPS {
        let Some(target) = group
            .iter()
            .find_map(|term| canonical.iter().find(|(key, _)| key == term))
            .map(|(_, name)| name.clone())
        else {
            continue;
        };

        for term in group.iter() {
            if !lookup.contains_key(*term) {
                lookup.insert(term.to_string(), target.clone());
                aliases.push((term.to_string(), target.clone()));
            }
        }
    }

    sort_longest_first(&mut canonical);
    sort_longest_first(&mut aliases);

    SynonymMap {
        lookup,
        canonical,
        aliases,
    }
}

fn sort_longest_first(entries: &mut [(String, String)]) {
    entries.sort_by(|(a, _), (b, _)| char_len(b).cmp(&char_len(a)).then_with(|| a.cmp(b)));
}
