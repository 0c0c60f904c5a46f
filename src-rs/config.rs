use std::time::Duration;

pub const DEFAULT_API_VERSION: &str = "2023-11-03";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration value: {0}")]
    Missing(String),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },

    #[error("http client setup failed: {0}")]
    HttpClient(String),
}

/// Where the todo blob lives and how to reach it.
///
/// `sas_token` is a credential and must come from the environment or a secret
/// store, never from source.
#[derive(Clone)]
pub struct StorageConfig {
    pub base_url: String,
    pub blob_path: String,
    pub sas_token: String,
    pub api_version: String,
    pub timeout: Option<Duration>,
}

impl StorageConfig {
    pub fn new(base_url: &str, blob_path: &str, sas_token: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            blob_path: blob_path.to_string(),
            sas_token: sas_token.to_string(),
            ..Self::default()
        }
    }

    /// Full request URL: `<base_url>/<blob_path>?<sas_token>`.
    pub fn blob_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.blob_path.trim_start_matches('/');
        let token = self.sas_token.trim_start_matches('?');
        if token.is_empty() {
            format!("{}/{}", base, path)
        } else {
            format!("{}/{}?{}", base, path, token)
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            blob_path: String::new(),
            sas_token: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("base_url", &self.base_url)
            .field("blob_path", &self.blob_path)
            .field("sas_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}
