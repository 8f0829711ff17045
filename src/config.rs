use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dirs;
use crate::error::{CronError, Result};
use crate::types::{FormatOptions, HumanizeOptions, Locale};

/// User defaults for the cron-text CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronTextConfig {
    /// Output language (default: en)
    #[serde(default)]
    pub locale: Locale,

    /// Render clock times as 24-hour `HH:MM` (default: true)
    #[serde(default = "default_use_24_hour_format")]
    pub use_24_hour_format: bool,

    /// Describe the seconds field when present (default: false)
    #[serde(default)]
    pub include_seconds: bool,

    /// Add the explicit "every day" clause (default: false)
    #[serde(default)]
    pub verbose: bool,

    /// Accept 6-field expressions in `validate` and `parse` (default: false)
    #[serde(default)]
    pub allow_seconds: bool,
}

fn default_use_24_hour_format() -> bool {
    true
}

impl Default for CronTextConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            use_24_hour_format: default_use_24_hour_format(),
            include_seconds: false,
            verbose: false,
            allow_seconds: false,
        }
    }
}

impl CronTextConfig {
    /// Load configuration from the default config file path.
    /// Returns default config if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&dirs::config_path())
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            CronError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: CronTextConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save the current configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Formatter options carrying these defaults
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            locale: self.locale,
            use_24_hour_format: self.use_24_hour_format,
            include_seconds: self.include_seconds,
            verbose: self.verbose,
        }
    }

    /// Humanizer options carrying these defaults
    pub fn humanize_options(&self) -> HumanizeOptions {
        HumanizeOptions::new(self.locale)
    }
}
