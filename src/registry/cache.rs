//! Time-boxed department list cache.

use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::models::Department;
use crate::store::AttendanceStore;

use super::DepartmentRegistry;

/// Caches successful department reads for a fixed time-to-live.
///
/// A zero TTL disables caching: every call reads the store. The built-in
/// fallback list is never cached, so a store outage does not outlive itself.
#[derive(Debug)]
pub struct RegistryCache {
    ttl: Duration,
    entry: Mutex<Option<(Instant, Vec<Department>)>>,
}

impl RegistryCache {
    /// Creates a cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Creates a cache that always reads through to the store.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Returns the registry, reading the store only when the cached list is
    /// missing or older than the TTL.
    pub fn registry(&self, store: &dyn AttendanceStore) -> DepartmentRegistry {
        if self.ttl.is_zero() {
            return DepartmentRegistry::load(store);
        }

        let mut entry = self.entry.lock();
        if let Some((loaded_at, departments)) = entry.as_ref() {
            if loaded_at.elapsed() < self.ttl {
                debug!(count = departments.len(), "Department list served from cache");
                return DepartmentRegistry::new(departments.clone());
            }
        }

        let registry = DepartmentRegistry::load(store);
        if registry.is_default() {
            *entry = None;
        } else {
            *entry = Some((Instant::now(), registry.departments().to_vec()));
        }
        registry
    }

    /// Drops any cached list.
    pub fn invalidate(&self) {
        *self.entry.lock() = None;
    }
}

impl Default for RegistryCache {
    fn default() -> Self {
        Self::disabled()
    }
}
