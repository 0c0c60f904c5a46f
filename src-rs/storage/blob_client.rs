use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::Client;
use tracing::{debug, error, info};

use super::types::{StorageError, TaskRemote};
use crate::config::{ConfigError, StorageConfig};
use crate::task::Task;

pub const MS_VERSION: &str = "x-ms-version";
pub const MS_BLOB_TYPE: &str = "x-ms-blob-type";
pub const BLOCK_BLOB: &str = "BlockBlob";

/// Reads and overwrites the todo list blob over plain HTTP.
///
/// Every write replaces the blob unconditionally; there is no ETag check, so
/// concurrent writers race and the last one wins.
pub struct BlobStorageClient {
    cfg: StorageConfig,
    headers: HeaderMap,
    client: Client,
}

impl BlobStorageClient {
    pub fn new(cfg: StorageConfig) -> Result<Self, ConfigError> {
        if cfg.base_url.trim().is_empty() {
            return Err(ConfigError::Missing("base_url".to_string()));
        }
        if cfg.blob_path.trim_matches('/').trim().is_empty() {
            return Err(ConfigError::Missing("blob_path".to_string()));
        }
        let headers = base_headers(&cfg.api_version)?;
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;
        Ok(Self {
            cfg,
            headers,
            client,
        })
    }
}

#[async_trait]
impl TaskRemote for BlobStorageClient {
    async fn fetch_all(&self) -> Result<Vec<Task>, StorageError> {
        let blob = self.cfg.blob_path.as_str();
        debug!(blob, "fetching todo list");
        let resp = self
            .client
            .get(self.cfg.blob_url())
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|err| load_failure(blob, format!("request failed: {}", err.without_url())))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| load_failure(blob, format!("reading body failed: {}", err.without_url())))?;
        if !status.is_success() {
            return Err(load_failure(blob, format!("http {}: {}", status.as_u16(), body)));
        }

        let tasks: Vec<Task> = serde_json::from_str(&body)
            .map_err(|err| load_failure(blob, format!("invalid json: {}", err)))?;
        info!(blob, count = tasks.len(), "todo list fetched");
        Ok(tasks)
    }

    async fn replace_all(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let blob = self.cfg.blob_path.as_str();
        let payload = serde_json::to_string(tasks)
            .map_err(|err| save_failure(blob, format!("serialize failed: {}", err)))?;

        let mut headers = self.headers.clone();
        headers.insert(
            HeaderName::from_static(MS_BLOB_TYPE),
            HeaderValue::from_static(BLOCK_BLOB),
        );

        debug!(blob, count = tasks.len(), bytes = payload.len(), "writing todo list");
        let resp = self
            .client
            .put(self.cfg.blob_url())
            .headers(headers)
            .body(payload)
            .send()
            .await
            .map_err(|err| save_failure(blob, format!("request failed: {}", err.without_url())))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(save_failure(blob, format!("http {}: {}", status.as_u16(), body)));
        }
        info!(blob, count = tasks.len(), "todo list saved");
        Ok(())
    }
}

fn base_headers(api_version: &str) -> Result<HeaderMap, ConfigError> {
    let version = HeaderValue::from_str(api_version).map_err(|_| ConfigError::Invalid {
        key: "api_version".to_string(),
        value: api_version.to_string(),
    })?;
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(HeaderName::from_static(MS_VERSION), version);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

// The SAS token rides in the URL, so only the blob path is logged.
fn load_failure(blob: &str, cause: String) -> StorageError {
    error!(blob, %cause, "loading todo list failed");
    StorageError::load(cause)
}

fn save_failure(blob: &str, cause: String) -> StorageError {
    error!(blob, %cause, "saving todo list failed");
    StorageError::save(cause)
}
