use std::sync::OnceLock;

use super::StaticConfig;

static CONFIG: OnceLock<StaticConfig> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to loading from the default location when `init_config`
/// has not been called yet.
pub fn get_config() -> &'static StaticConfig {
    CONFIG.get_or_init(StaticConfig::load)
}

/// Initialize the global configuration
///
/// Loads `utm-command.toml` from the current directory, or `path` when
/// given. A config that fails to load falls back to defaults. Only the
/// first call has an effect.
///
/// # Examples
/// ```no_run
/// use utm_command::config::init_config;
/// init_config(None);
/// ```
pub fn init_config(path: Option<&str>) -> &'static StaticConfig {
    CONFIG.get_or_init(|| match path {
        Some(path) => StaticConfig::try_load(path).unwrap_or_else(|e| {
            eprintln!("[ERROR] Failed to load config from {}: {}", path, e);
            StaticConfig::default()
        }),
        None => StaticConfig::load(),
    })
}
