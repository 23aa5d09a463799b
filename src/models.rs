//! Frontend Models
//!
//! Data structures for the shopping list.

use serde::{Deserialize, Serialize};

/// A named, checkable entry in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, assigned by the store at creation
    pub id: u32,
    pub name: String,
    pub checked: bool,
}

/// Initial item description, without an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

impl SeedItem {
    pub fn new(name: impl Into<String>, checked: bool) -> Self {
        Self { name: name.into(), checked }
    }
}
