//! Build-time Configuration
//!
//! `MENU_API_URL` and `MENU_LOCALE` are read when the wasm bundle is built.

use crate::format::CurrencyFormat;

const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Where the food service lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Join a path such as `/foods/3` onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Everything the dashboard needs at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub currency: CurrencyFormat,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("MENU_API_URL"), option_env!("MENU_LOCALE"))
    }

    fn from_values(api_url: Option<&str>, locale: Option<&str>) -> Self {
        let api = api_url
            .filter(|url| !url.trim().is_empty())
            .map(ApiConfig::new)
            .unwrap_or_default();

        let currency = match locale {
            Some(tag) => CurrencyFormat::from_locale(tag).unwrap_or_else(|| {
                log::warn!("[Config] Unknown locale {:?}, falling back to pt-BR", tag);
                CurrencyFormat::PT_BR
            }),
            None => CurrencyFormat::PT_BR,
        };

        Self { api, currency }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::new("http://api.local:3333/");
        assert_eq!(config.url("/foods"), "http://api.local:3333/foods");
        assert_eq!(config.url("foods/4"), "http://api.local:3333/foods/4");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.currency, CurrencyFormat::PT_BR);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://menu.example.com"), Some("en-US"));
        assert_eq!(config.api.url("/foods"), "https://menu.example.com/foods");
        assert_eq!(config.currency, CurrencyFormat::EN_US);
    }

    #[test]
    fn test_unknown_locale_and_blank_url_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("xx-YY"));
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.currency, CurrencyFormat::PT_BR);
    }
}
