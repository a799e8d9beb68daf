use shared::DisplayConfig;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_SESSION_KEY: &str = "session";

/// Frontend settings. Values can be baked in at build time through
/// `PORTAL_API_URL`, `PORTAL_SESSION_KEY` and `PORTAL_LOG_ENDPOINT`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Local storage key the login flow persists the session under
    pub session_storage_key: String,
    /// Where warnings and errors are forwarded, if anywhere
    pub log_endpoint: Option<String>,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session_storage_key: DEFAULT_SESSION_KEY.to_string(),
            log_endpoint: None,
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_overrides(
            option_env!("PORTAL_API_URL"),
            option_env!("PORTAL_SESSION_KEY"),
            option_env!("PORTAL_LOG_ENDPOINT"),
        )
    }

    fn with_overrides(
        api_base_url: Option<&str>,
        session_key: Option<&str>,
        log_endpoint: Option<&str>,
    ) -> Self {
        let non_blank = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let defaults = Self::default();

        Self {
            api_base_url: non_blank(api_base_url).unwrap_or(defaults.api_base_url),
            session_storage_key: non_blank(session_key).unwrap_or(defaults.session_storage_key),
            log_endpoint: non_blank(log_endpoint),
            display: defaults.display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.session_storage_key, "session");
        assert_eq!(config.log_endpoint, None);
        assert_eq!(config.display.currency_marker, "Rs");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::with_overrides(
            Some("https://api.portal.example"),
            None,
            Some("https://api.portal.example/api/logs"),
        );
        assert_eq!(config.api_base_url, "https://api.portal.example");
        assert_eq!(config.session_storage_key, "session");
        assert_eq!(config.log_endpoint.as_deref(), Some("https://api.portal.example/api/logs"));
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let config = AppConfig::with_overrides(Some("  "), Some(""), Some(" "));
        assert_eq!(config, AppConfig::default());
    }
}
