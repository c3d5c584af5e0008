//! Application state for the report assistant API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{AssistantConfig, ConfigLoader};
use crate::registry::{DepartmentRegistry, RegistryCache};
use crate::store::AttendanceStore;

/// Shared application state.
///
/// Holds the settings, the attendance store and the department list cache.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<AssistantConfig>,
    store: Arc<dyn AttendanceStore>,
    registry_cache: Arc<RegistryCache>,
}

impl AppState {
    /// Creates application state over a store, with a registry cache sized
    /// from the settings.
    pub fn new(settings: AssistantConfig, store: Arc<dyn AttendanceStore>) -> Self {
        let registry_cache = RegistryCache::new(settings.registry.cache_ttl());
        Self {
            settings: Arc::new(settings),
            store,
            registry_cache: Arc::new(registry_cache),
        }
    }

    /// Creates application state from loaded configuration, serving the seed
    /// data from an in-memory store.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.settings().clone(), Arc::new(config.store()))
    }

    /// Returns the settings.
    pub fn settings(&self) -> &AssistantConfig {
        &self.settings
    }

    /// Returns the attendance store.
    pub fn store(&self) -> &dyn AttendanceStore {
        self.store.as_ref()
    }

    /// Returns the department registry for one request.
    pub fn registry(&self) -> DepartmentRegistry {
        self.registry_cache.registry(self.store.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_registry_falls_back_for_unavailable_store() {
        let state = AppState::new(
            AssistantConfig::default(),
            Arc::new(MemoryStore::unavailable()),
        );
        assert!(state.registry().is_default());
    }
}
