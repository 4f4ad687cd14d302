// Runtime configuration for the backend the client talks to

/// Backend the student profile pages are served from
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// LocalStorage key that overrides the API base URL
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "jobportal_api_base";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL, trimming trailing slashes
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Load config, preferring the LocalStorage override in the browser
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            use gloo_storage::{LocalStorage, Storage};

            if let Ok(stored) = LocalStorage::get::<String>(STORAGE_KEY) {
                let config = Self::from_override(Some(stored));
                log::info!("Loaded API base from storage: {}", config.base_url);
                return config;
            }
        }

        log::info!("Using default API base: {}", DEFAULT_API_BASE);
        Self::default()
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    fn from_override(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().trim_end_matches('/').is_empty() => Self::new(&url),
            _ => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
