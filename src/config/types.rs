//! Configuration types for the report assistant.
//!
//! This module contains the strongly-typed structures deserialized from
//! `assistant.yaml` and the seed data files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Department, Employee};

/// Top-level settings from `assistant.yaml`.
///
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Department registry settings.
    #[serde(default)]
    pub registry: RegistrySettings,
    /// Report assembly settings.
    #[serde(default)]
    pub report: ReportSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// The `host:port` address to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Department registry settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Seconds a department list stays cached; 0 reads the store on every
    /// request.
    #[serde(default)]
    pub cache_ttl_secs: u64,
}

impl RegistrySettings {
    /// The cache time-to-live.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Report assembly settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Serve sample rows when a fully specified report has no data.
    #[serde(default = "default_synthetic_fallback")]
    pub synthetic_fallback: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            synthetic_fallback: default_synthetic_fallback(),
        }
    }
}

fn default_synthetic_fallback() -> bool {
    true
}

/// `data/departments.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsFile {
    /// Department rows.
    #[serde(default)]
    pub departments: Vec<Department>,
}

/// `data/employees.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// Employee rows.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// `data/attendance.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceFile {
    /// Attendance rows, in store order.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}
