//! Configuration for the trivia board
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/clueboard/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod board;
mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use board::{BoardConfig, FetchConfig, FileBoard, FileFetch};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Public jService-compatible endpoint
pub const DEFAULT_API_URL: &str = "https://jservice.io/api/";

/// Theme used when nothing is configured
pub const DEFAULT_THEME: &str = "classic";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the trivia service
    pub api_url: String,

    /// Whether to run the TUI (false = headless line mode)
    pub enable_tui: bool,

    /// Color theme name: "classic", "midnight", "mono"
    pub theme: String,

    /// Fixed RNG seed for reproducible boards
    pub seed: Option<u64>,

    /// Raw CLUEBOARD_SEED value that is not a u64; rejected by `validate`
    pub invalid_seed: Option<String>,

    /// Board dimensions and masking
    pub board: BoardConfig,

    /// Network behaviour
    pub fetch: FetchConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            enable_tui: true,
            theme: DEFAULT_THEME.to_string(),
            seed: None,
            invalid_seed: None,
            board: BoardConfig::default(),
            fetch: FetchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub theme: Option<String>,
    pub seed: Option<u64>,

    /// Optional [board] section
    pub board: Option<FileBoard>,

    /// Optional [fetch] section
    pub fetch: Option<FileFetch>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/clueboard/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("clueboard").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A file that exists but cannot be parsed is fatal: falling back to
    /// defaults would hide the typo the user is trying to find.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  To reset, run `clueboard config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = env("CLUEBOARD_API_URL")
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("CLUEBOARD_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let theme = env("CLUEBOARD_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let (env_seed, invalid_seed) = match env("CLUEBOARD_SEED") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(seed) => (Some(seed), None),
                Err(_) => (None, Some(raw)),
            },
            None => (None, None),
        };
        let seed = env_seed.or(file.seed);

        Self {
            api_url,
            enable_tui,
            theme,
            seed,
            invalid_seed,
            board: BoardConfig::from_file(file.board),
            fetch: FetchConfig::from_file(file.fetch),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    /// Check value ranges that the file format cannot express
    pub fn validate(&self) -> Result<(), String> {
        let board = &self.board;
        if board.categories == 0 {
            return Err("board.categories must be at least 1".to_string());
        }
        if board.clues_per_category == 0 {
            return Err("board.clues_per_category must be at least 1".to_string());
        }
        if board.category_pool < board.categories {
            return Err(format!(
                "board.category_pool ({}) must be at least board.categories ({})",
                board.category_pool, board.categories
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err("fetch.timeout_secs must be at least 1".to_string());
        }
        if let Some(raw) = &self.invalid_seed {
            return Err(format!(
                "CLUEBOARD_SEED must be a non-negative integer, got {:?}",
                raw
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err("api_url must not be empty".to_string());
        }
        Ok(())
    }
}
