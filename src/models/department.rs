//! Department model.

use serde::{Deserialize, Serialize};

/// A department as stored in the department registry.
///
/// `name` is the canonical name: the exact string shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: i64,
    /// The canonical department name (e.g., "Finans").
    pub name: String,
}

impl Department {
    /// Creates a department from an id and canonical name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
