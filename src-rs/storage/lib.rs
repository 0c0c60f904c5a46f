pub mod blob_client;
pub mod types;

pub use blob_client::BlobStorageClient;
pub use types::{StorageError, TaskRemote};
