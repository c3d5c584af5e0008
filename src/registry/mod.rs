//! Department registry and synonym resolver.
//!
//! The registry is an explicit value built once per request (or served from a
//! [`RegistryCache`]) and passed to the interpreter and the report assembler.
//! Store failures never surface from here: the built-in department list is
//! used instead.

mod cache;
mod synonyms;

use tracing::warn;

use crate::models::Department;
use crate::store::AttendanceStore;
use crate::text::normalize;

pub use cache::RegistryCache;
pub use synonyms::{ALIAS_GROUPS, SynonymMap, build_synonym_map};

/// Built-in department names used when the store cannot provide any.
pub const DEFAULT_DEPARTMENTS: &[&str] = &[
    "Finans",
    "IT",
    "İnsan Kaynakları",
    "Satış",
    "Pazarlama",
    "Hukuk",
    "Muhasebe",
    "Üretim",
    "Lojistik",
    "Engineering",
];

/// Returns the built-in department list, numbered from 1.
pub fn default_departments() -> Vec<Department> {
    DEFAULT_DEPARTMENTS
        .iter()
        .zip(1..)
        .map(|(name, id)| Department::new(id, *name))
        .collect()
}

/// Loads the department list from the store.
///
/// Falls back to [`default_departments`] when the read fails or returns no
/// rows.
pub fn load_departments(store: &dyn AttendanceStore) -> Vec<Department> {
    DepartmentRegistry::load(store).departments
}

/// The ordered department list with name/id lookups.
///
/// # Example
///
/// ```
/// use pdks_assistant::models::Department;
/// use pdks_assistant::registry::DepartmentRegistry;
///
/// let registry = DepartmentRegistry::new(vec![
///     Department::new(10, "Finans"),
///     Department::new(11, "İnsan Kaynakları"),
/// ]);
/// assert_eq!(registry.id_of("insan kaynakları"), Some(11));
/// assert_eq!(registry.name_of(10), Some("Finans"));
/// assert_eq!(registry.synonyms().get("ik"), Some("İnsan Kaynakları"));
/// ```
#[derive(Debug, Clone)]
pub struct DepartmentRegistry {
    departments: Vec<Department>,
    from_defaults: bool,
}

impl DepartmentRegistry {
    /// Creates a registry over the given departments.
    pub fn new(departments: Vec<Department>) -> Self {
        Self {
            departments,
            from_defaults: false,
        }
    }

    /// Creates a registry over the built-in department list.
    pub fn defaults() -> Self {
        Self {
            departments: default_departments(),
            from_defaults: true,
        }
    }

    /// Loads the registry from the store, falling back to the built-in list.
    pub fn load(store: &dyn AttendanceStore) -> Self {
        match store.departments() {
            Ok(departments) if !departments.is_empty() => Self::new(departments),
            Ok(_) => {
                warn!("Department store returned no rows, using built-in list");
                Self::defaults()
            }
            Err(err) => {
                warn!(error = %err, "Department store unavailable, using built-in list");
                Self::defaults()
            }
        }
    }

    /// The departments, in store order.
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// The canonical names, in store order.
    pub fn names(&self) -> Vec<&str> {
        self.departments.iter().map(|d| d.name.as_str()).collect()
    }

    /// True if the registry holds the built-in list rather than store data.
    pub fn is_default(&self) -> bool {
        self.from_defaults
    }

    /// Looks up a department id by canonical name (case-insensitive).
    pub fn id_of(&self, name: &str) -> Option<i64> {
        let key = normalize(name);
        self.departments
            .iter()
            .find(|d| normalize(&d.name) == key)
            .map(|d| d.id)
    }

    /// Looks up a canonical name by department id.
    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.as_str())
    }

    /// Builds the synonym map for this registry.
    pub fn synonyms(&self) -> SynonymMap {
        build_synonym_map(&self.departments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_default_list_has_at_least_seven_entries() {
        let defaults = default_departments();
        assert!(defaults.len() >= 7);
        assert_eq!(defaults[0], Department::new(1, "Finans"));
        let ids: Vec<i64> = defaults.iter().map(|d| d.id).collect();
        assert_eq!(ids, (1..=defaults.len() as i64).collect::<Vec<_>>());
    }

    #[test]
    fn test_load_departments_from_store() {
        let store = MemoryStore::new(
            vec![Department::new(7, "Satış"), Department::new(3, "Finans")],
            vec![],
            vec![],
        );
        let departments = load_departments(&store);
        assert_eq!(departments.len(), 2);
        assert_eq!(departments[0].name, "Finans");
    }

    #[test]
    fn test_load_departments_falls_back_on_failure() {
        let departments = load_departments(&MemoryStore::unavailable());
        assert_eq!(departments, default_departments());
    }

    #[test]
    fn test_load_departments_falls_back_on_empty_store() {
        let departments = load_departments(&MemoryStore::default());
        assert_eq!(departments, default_departments());
    }

    #[test]
    fn test_registry_load_marks_defaults() {
        let registry = DepartmentRegistry::load(&MemoryStore::unavailable());
        assert!(registry.is_default());
        assert!(registry.names().contains(&"Finans"));

        let store = MemoryStore::new(vec![Department::new(1, "Finans")], vec![], vec![]);
        let registry = DepartmentRegistry::load(&store);
        assert!(!registry.is_default());
        assert_eq!(registry.names(), vec!["Finans"]);
    }

    #[test]
    fn test_id_and_name_lookups() {
        let registry = DepartmentRegistry::defaults();
        assert_eq!(registry.id_of("FİNANS"), Some(1));
        assert_eq!(registry.id_of("it"), Some(2));
        assert_eq!(registry.id_of("Muhasebe Dışı"), None);
        assert_eq!(registry.name_of(3), Some("İnsan Kaynakları"));
        assert_eq!(registry.name_of(999), None);
    }
}
