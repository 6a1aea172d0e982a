use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
/// `COURTSYS_CONFIG` overrides it.
const CONFIG_PATH: &str = "config.toml";

/// Compiled-in copy used where there is no filesystem (web builds) and as
/// the fallback when the file on disk is missing.
const BUNDLED_CONFIG: &str = include_str!("../../../config.toml");

pub const ENV_API_URL: &str = "COURTSYS_API_URL";
pub const ENV_POLL_SECS: &str = "COURTSYS_POLL_SECS";

/// Parse config text, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Apply environment overrides on top of the file values.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    if let Some(secs) = lookup(ENV_POLL_SECS).and_then(|s| s.trim().parse::<u64>().ok()) {
        if secs > 0 {
            config.notifications.poll_interval_secs = secs;
        }
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    let _ = dotenvy::dotenv();
    let path = std::env::var("COURTSYS_CONFIG").unwrap_or_else(|_| CONFIG_PATH.to_string());
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::info!(path = %path, error = %e, "config file not found, using bundled config");
            BUNDLED_CONFIG.to_string()
        }
    };
    apply_env_overrides(parse_config(&contents), |key| std::env::var(key).ok())
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    parse_config(BUNDLED_CONFIG)
}

/// Load configuration once. Later calls return the cached value.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(
            base_url = %config.api.base_url,
            poll_secs = config.notifications.poll_interval_secs,
            features = ?config.features,
            "configuration loaded"
        );
        config
    })
}

/// The loaded configuration, loading it on first use.
pub fn config() -> &'static AppConfig {
    load_config()
}
