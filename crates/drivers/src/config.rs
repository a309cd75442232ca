use seva_kiosk_adapters::SanityConfig;
use seva_kiosk_application::DEFAULT_EVENT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub base_url: Option<String>,
    pub cache_dir: String,
    pub event_page_size: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from a key lookup, defaulting every missing key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            project_id: lookup("SEVA_KIOSK_PROJECT_ID").unwrap_or(defaults.project_id),
            dataset: lookup("SEVA_KIOSK_DATASET").unwrap_or(defaults.dataset),
            api_version: lookup("SEVA_KIOSK_API_VERSION").unwrap_or(defaults.api_version),
            base_url: lookup("SEVA_KIOSK_BASE_URL"),
            cache_dir: lookup("SEVA_KIOSK_CACHE_DIR").unwrap_or(defaults.cache_dir),
            event_page_size: lookup("SEVA_KIOSK_PAGE_SIZE")
                .and_then(|value| value.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.event_page_size),
        }
    }

    pub fn sanity(&self) -> SanityConfig {
        SanityConfig {
            project_id: self.project_id.clone(),
            dataset: self.dataset.clone(),
            api_version: self.api_version.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_id: "rudhirsetu".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            base_url: None,
            cache_dir: "cache".to_string(),
            event_page_size: DEFAULT_EVENT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_production_dataset() {
        let config = AppConfig::default();
        assert_eq!(config.project_id, "rudhirsetu");
        assert_eq!(config.dataset, "production");
        assert_eq!(config.cache_dir, "cache");
        assert_eq!(config.event_page_size, 6);
    }

    #[test]
    fn lookup_values_override_the_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            "SEVA_KIOSK_PROJECT_ID" => Some("testproj".to_string()),
            "SEVA_KIOSK_BASE_URL" => Some("http://127.0.0.1:9".to_string()),
            "SEVA_KIOSK_PAGE_SIZE" => Some("12".to_string()),
            _ => None,
        });
        assert_eq!(config.project_id, "testproj");
        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:9"));
        assert_eq!(config.event_page_size, 12);
        assert_eq!(config.dataset, "production");
    }

    #[test]
    fn unparsable_page_size_falls_back_to_the_default() {
        let config = AppConfig::from_lookup(|key| match key {
            "SEVA_KIOSK_PAGE_SIZE" => Some("zero".to_string()),
            _ => None,
        });
        assert_eq!(config.event_page_size, 6);
    }
}
