//! Build-time configuration.

use log::{Level, LevelFilter};

const DEV_API_URL: &str = "http://127.0.0.1:8000";
const RELEASE_API_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend root, without a trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Reads `MMIS_API_URL` and `MMIS_LOG_LEVEL` as baked in at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("MMIS_API_URL"), option_env!("MMIS_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let default_url = if cfg!(debug_assertions) { DEV_API_URL } else { RELEASE_API_URL };
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(default_url)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { api_base_url, log_level }
    }

    /// Level handed to the console logger; `off` still keeps errors
    pub fn console_level(&self) -> Level {
        self.log_level.to_level().unwrap_or(Level::Error)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Absolute image URLs pass through; backend-relative paths get the base prepended
    pub fn resolve_image_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:") || url.starts_with("blob:") {
            url.to_string()
        } else {
            self.endpoint(url)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_win() {
        let config = AppConfig::from_values(Some("https://mmis.example.com/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://mmis.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_console_level() {
        assert_eq!(AppConfig::from_values(None, Some("debug")).console_level(), Level::Debug);
        assert_eq!(AppConfig::from_values(None, None).console_level(), Level::Info);
        assert_eq!(AppConfig::from_values(None, Some("off")).console_level(), Level::Error);
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = AppConfig::from_values(None, Some("chatty"));
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(!config.api_base_url.ends_with('/'));
    }

    #[test]
    fn test_resolve_image_url() {
        let config = AppConfig::from_values(Some("http://localhost:8000"), None);
        assert_eq!(
            config.resolve_image_url("/uploads/probe.png"),
            "http://localhost:8000/uploads/probe.png"
        );
        assert_eq!(
            config.resolve_image_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(config.endpoint("inventory/"), "http://localhost:8000/inventory/");
    }
}
