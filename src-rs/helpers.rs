use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, StorageConfig};
use crate::storage::BlobStorageClient;
use crate::task::TaskStore;

pub const ENV_URL: &str = "TODO_STORAGE_URL";
pub const ENV_PATH: &str = "TODO_STORAGE_PATH";
pub const ENV_SAS: &str = "TODO_STORAGE_SAS";
pub const ENV_API_VERSION: &str = "TODO_STORAGE_API_VERSION";
pub const ENV_TIMEOUT_SECS: &str = "TODO_STORAGE_TIMEOUT_SECS";

pub fn load_storage_config() -> Result<StorageConfig, ConfigError> {
    storage_config_from(|key| env::var(key).ok())
}

/// Builds a config from any key lookup. `TODO_STORAGE_URL`, `TODO_STORAGE_PATH`
/// and `TODO_STORAGE_SAS` are required; the rest fall back to defaults.
pub fn storage_config_from<F>(lookup: F) -> Result<StorageConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };
    let defaults = StorageConfig::default();

    let base_url = get(ENV_URL).ok_or_else(|| ConfigError::Missing(ENV_URL.to_string()))?;
    let blob_path = get(ENV_PATH).ok_or_else(|| ConfigError::Missing(ENV_PATH.to_string()))?;
    let sas_token = get(ENV_SAS).ok_or_else(|| ConfigError::Missing(ENV_SAS.to_string()))?;
    let timeout = match get(ENV_TIMEOUT_SECS) {
        Some(raw) => {
            let secs = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: ENV_TIMEOUT_SECS.to_string(),
                value: raw.clone(),
            })?;
            Some(Duration::from_secs(secs))
        }
        None => None,
    };

    Ok(StorageConfig {
        base_url,
        blob_path,
        sas_token,
        api_version: get(ENV_API_VERSION).unwrap_or(defaults.api_version),
        timeout,
    })
}

/// Wires a blob-backed store from a config. The store starts empty; call
/// `load` to pull the remote list.
pub fn build_task_store(cfg: StorageConfig) -> Result<TaskStore, ConfigError> {
    let client = BlobStorageClient::new(cfg)?;
    Ok(TaskStore::new(Arc::new(client)))
}

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Meant for host binaries; does nothing if a subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
