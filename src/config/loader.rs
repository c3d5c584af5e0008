//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the assistant
//! settings and seed data from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{AssistantError, AssistantResult};
use crate::store::{MemoryStore, SeedData};

use super::types::{AssistantConfig, AttendanceFile, DepartmentsFile, EmployeesFile};

/// Loads and provides access to the assistant configuration.
///
/// # Directory Structure
///
/// ```text
/// config/pdks/
/// ├── assistant.yaml       # Server, registry and report settings
/// └── data/
///     ├── departments.yaml # Department rows
///     ├── employees.yaml   # Employee rows
///     └── attendance.yaml  # Attendance rows
/// ```
///
/// # Example
///
/// ```no_run
/// use pdks_assistant::config::ConfigLoader;
/// use pdks_assistant::store::AttendanceStore;
///
/// let loader = ConfigLoader::load("./config/pdks")?;
/// let store = loader.store();
/// println!("{} departments", store.departments()?.len());
/// # Ok::<(), pdks_assistant::error::AssistantError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: AssistantConfig,
    seed: SeedData,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if any file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> AssistantResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<AssistantConfig>(&path.join("assistant.yaml"))?;

        let data_dir = path.join("data");
        let departments = Self::load_yaml::<DepartmentsFile>(&data_dir.join("departments.yaml"))?;
        let employees = Self::load_yaml::<EmployeesFile>(&data_dir.join("employees.yaml"))?;
        let attendance = Self::load_yaml::<AttendanceFile>(&data_dir.join("attendance.yaml"))?;

        let seed = SeedData {
            departments: departments.departments,
            employees: employees.employees,
            attendance: attendance.attendance,
        };

        info!(
            path = %path.display(),
            departments = seed.departments.len(),
            employees = seed.employees.len(),
            attendance = seed.attendance.len(),
            "Configuration loaded"
        );

        Ok(Self { settings, seed })
    }

    /// Builds a loader from values already in memory.
    pub fn from_parts(settings: AssistantConfig, seed: SeedData) -> Self {
        Self { settings, seed }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AssistantResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AssistantError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AssistantError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the assistant settings.
    pub fn settings(&self) -> &AssistantConfig {
        &self.settings
    }

    /// Returns the seed data.
    pub fn seed(&self) -> &SeedData {
        &self.seed
    }

    /// Builds an in-memory store over a copy of the seed data.
    pub fn store(&self) -> MemoryStore {
        MemoryStore::from_seed(self.seed.clone())
    }
}
