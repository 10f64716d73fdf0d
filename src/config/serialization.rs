//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// TOML string literal with proper escaping
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let seed = match self.seed {
            Some(seed) => format!("seed = {}", seed),
            None => "# seed = 1234               # Fixed seed for reproducible boards".to_string(),
        };

        format!(
            r#"# clueboard configuration
# Precedence: environment variables > this file > built-in defaults

# Base URL of a jService-compatible trivia API (env: CLUEBOARD_API_URL)
api_url = {api_url}

# Color theme: "classic", "midnight", "mono" (env: CLUEBOARD_THEME)
theme = {theme}

{seed}

[board]
categories = {categories}              # Columns on the board
clues_per_category = {clues}      # Rows on the board
category_pool = {pool}          # Categories requested before random sampling
placeholder = {placeholder}            # Shown in unrevealed cells

[fetch]
concurrent = {concurrent}          # Fetch categories in parallel (order is kept)
timeout_secs = {timeout}            # Per-request timeout

[logging]
level = {level}             # trace, debug, info, warn, error (RUST_LOG overrides)
file_enabled = {file_enabled}       # Also write JSON logs to rotating files
file_dir = {file_dir}
file_rotation = {rotation}     # hourly, daily, never
file_prefix = {prefix}
"#,
            api_url = quoted(&self.api_url),
            theme = quoted(&self.theme),
            seed = seed,
            categories = self.board.categories,
            clues = self.board.clues_per_category,
            pool = self.board.category_pool,
            placeholder = quoted(&self.board.placeholder),
            concurrent = self.fetch.concurrent,
            timeout = self.fetch.timeout_secs,
            level = quoted(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = quoted(&self.logging.file_dir.display().to_string()),
            rotation = quoted(self.logging.file_rotation.as_str()),
            prefix = quoted(&self.logging.file_prefix),
        )
    }
}
