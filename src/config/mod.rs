//! Configuration loading for the PDKS report assistant.
//!
//! This module loads the assistant settings and the seed data for the
//! in-memory attendance store from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use pdks_assistant::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pdks").unwrap();
//! println!("Listening on {}", config.settings().server.address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AssistantConfig, AttendanceFile, DepartmentsFile, EmployeesFile, RegistrySettings,
    ReportSettings, ServerConfig,
};
