//! Board and fetch configuration

use crate::render::DEFAULT_PLACEHOLDER;
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Board Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Board dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of category columns (N)
    pub categories: usize,
    /// Clues per category (M)
    pub clues_per_category: usize,
    /// How many categories to request from the service before sampling
    pub category_pool: usize,
    /// Glyph shown in unrevealed cells
    pub placeholder: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            categories: 6,
            clues_per_category: 5,
            category_pool: 100,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Board settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileBoard {
    pub categories: Option<usize>,
    pub clues_per_category: Option<usize>,
    pub category_pool: Option<usize>,
    pub placeholder: Option<String>,
}

impl BoardConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileBoard>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            categories: file.categories.unwrap_or(defaults.categories),
            clues_per_category: file
                .clues_per_category
                .unwrap_or(defaults.clues_per_category),
            category_pool: file.category_pool.unwrap_or(defaults.category_pool),
            placeholder: file.placeholder.unwrap_or(defaults.placeholder),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fetch Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// How categories are fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Fetch all categories at once instead of one after another
    pub concurrent: bool,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrent: false,
            timeout_secs: 10,
        }
    }
}

/// Fetch settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFetch {
    pub concurrent: Option<bool>,
    pub timeout_secs: Option<u64>,
}

impl FetchConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFetch>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            concurrent: file.concurrent.unwrap_or(defaults.concurrent),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
