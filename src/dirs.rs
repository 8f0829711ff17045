use std::path::PathBuf;

/// Returns the base directory for cron-text settings.
///
/// Uses `$A3S_CRON_TEXT_HOME` if set, otherwise defaults to `~/.a3s/cron-text`.
pub fn cron_text_home() -> PathBuf {
    if let Ok(home) = std::env::var("A3S_CRON_TEXT_HOME") {
        return PathBuf::from(home);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".a3s")
        .join("cron-text")
}

/// Returns the path to the user configuration file.
pub fn config_path() -> PathBuf {
    cron_text_home().join("config.toml")
}
