use crate::state::config::AppConfig;
use crate::state::overview::RepoOverview;
#[cfg(not(target_arch = "wasm32"))]
use crate::utils::constants::{ APP_NAME, APP_VERSION };
use crate::debug_print;
use std::error::Error;
use std::fmt;

pub const OVERVIEW_PATH: &str = "/repos/overview";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    NetworkError(String),
    ParseError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ApiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl Error for ApiError {}

/// Anything that can hand the footer a repository overview
#[allow(async_fn_in_trait)]
pub trait OverviewSource {
    async fn repo_overview(&self) -> Result<RepoOverview, ApiError>;
}

/// Thin client for the wpdir HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: AppConfig,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
        where T: serde::de::DeserializeOwned
    {
        let url = self.config.endpoint(path);
        debug_print!("🌐 GET {}", url);

        let request = self.client.get(&url);
        // Browsers refuse to let scripts set the user agent
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.header("User-Agent", format!("{}/{}", APP_NAME, APP_VERSION));

        let response = request.send().await.map_err(|e| ApiError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::NetworkError(format!("HTTP {}", response.status())));
        }

        response.json::<T>().await.map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

impl OverviewSource for ApiClient {
    async fn repo_overview(&self) -> Result<RepoOverview, ApiError> {
        self.get_json(OVERVIEW_PATH).await
    }
}
