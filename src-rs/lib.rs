pub mod config;
pub mod helpers;
pub mod result;

#[path = "storage/lib.rs"]
pub mod storage;
#[path = "task/lib.rs"]
pub mod task;

pub use config::{ConfigError, StorageConfig};
pub use helpers::{build_task_store, load_storage_config};
pub use result::{SyncOp, SyncResult};
pub use storage::{BlobStorageClient, StorageError, TaskRemote};
pub use task::{Task, TaskStatus, TaskStore};
