//! List Configuration
//!
//! Fixed selectors of the markup contract, plus the seed set and log level
//! that the host page may override through data attributes on the mount element.

use log::LevelFilter;

use crate::models::SeedItem;

/// Id of the host element the app mounts into
pub const MOUNT_ID: &str = "shopping-app";
/// Id of the add-item form
pub const FORM_ID: &str = "js-shopping-list-form";
/// Class of the add-item text input
pub const INPUT_CLASS: &str = "js-shopping-list-entry";
/// Class of the list container whose contents are replaced on render
pub const LIST_CLASS: &str = "js-shopping-list";
/// Class marking a rendered list entry
pub const ENTRY_CLASS: &str = "js-item-index-element";
/// Attribute carrying an entry's positional index
pub const INDEX_ATTR: &str = "data-item-index";
/// Attribute carrying an entry's stable id
pub const ID_ATTR: &str = "data-item-id";
pub const TOGGLE_CLASS: &str = "js-item-toggle";
pub const DELETE_CLASS: &str = "js-item-delete";
/// Visual modifier applied to checked entries
pub const CHECKED_CLASS: &str = "shopping-item__checked";

/// Mount-element attribute holding a JSON seed override
pub const SEED_ATTR: &str = "data-seed";
/// Mount-element attribute holding the console log level
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Startup configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ListConfig {
    pub seed: Vec<SeedItem>,
    pub log_level: LevelFilter,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ListConfig {
    /// Build from the raw mount-element attributes, falling back to defaults
    /// for anything missing or unreadable.
    pub fn from_attributes(seed: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = seed {
            match parse_seed(raw) {
                Ok(items) => config.seed = items,
                Err(err) => log::warn!("[CONFIG] ignoring malformed {}: {}", SEED_ATTR, err),
            }
        }
        if let Some(raw) = log_level {
            match parse_log_level(raw) {
                Some(level) => config.log_level = level,
                None => log::warn!("[CONFIG] unknown log level {:?}", raw),
            }
        }
        config
    }
}

/// Demo seed: apples, oranges, milk (checked), bread
pub fn default_seed() -> Vec<SeedItem> {
    vec![
        SeedItem::new("apples", false),
        SeedItem::new("oranges", false),
        SeedItem::new("milk", true),
        SeedItem::new("bread", false),
    ]
}

pub fn parse_seed(raw: &str) -> Result<Vec<SeedItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn parse_log_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
