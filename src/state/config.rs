use crate::utils::constants::{ APP_BUILD_DATE, APP_COMMIT, APP_VERSION, DEFAULT_API_URL, UNKNOWN };
use crate::{ debug_eprint, debug_print };

/// Runtime override for the API base on native builds
pub const API_URL_ENV: &str = "WPDIR_API_URL";

/// Version/commit/date tuple shown in the footer
#[derive(Debug, Clone, PartialEq)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub date: String,
}

impl BuildInfo {
    /// Build info baked in at compile time
    pub fn current() -> Self {
        Self {
            version: APP_VERSION.to_string(),
            commit: APP_COMMIT.unwrap_or(UNKNOWN).to_string(),
            date: APP_BUILD_DATE.unwrap_or(UNKNOWN).to_string(),
        }
    }

    pub fn tooltip(&self) -> String {
        format!("Version: v{} Commit: {} Date: {}", self.version, self.commit, self.date)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub build: BuildInfo,
}

impl AppConfig {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: normalize_api_url(api_url),
            build: BuildInfo::current(),
        }
    }

    /// Compiled-in defaults, with the environment override applied on native targets
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var(API_URL_ENV) {
                if !url.trim().is_empty() {
                    debug_print!("🔧 Using API url from {}: {}", API_URL_ENV, url);
                    return Self::new(&url);
                }
                debug_eprint!("⚠️ {} is set but empty, using {}", API_URL_ENV, DEFAULT_API_URL);
            }
        }

        Self::new(DEFAULT_API_URL)
    }

    /// Absolute URL for an API path such as `/repos/overview`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}

fn normalize_api_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
