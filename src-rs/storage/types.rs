use async_trait::async_trait;

use crate::task::Task;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("could not load tasks: {cause}")]
    LoadFailure { cause: String },

    #[error("could not save tasks: {cause}")]
    SaveFailure { cause: String },
}

impl StorageError {
    pub fn load(cause: impl Into<String>) -> Self {
        StorageError::LoadFailure { cause: cause.into() }
    }

    pub fn save(cause: impl Into<String>) -> Self {
        StorageError::SaveFailure { cause: cause.into() }
    }

    pub fn cause(&self) -> &str {
        match self {
            StorageError::LoadFailure { cause } | StorageError::SaveFailure { cause } => cause,
        }
    }
}

/// Remote home of the whole task list. Reads and writes are all-or-nothing.
#[async_trait]
pub trait TaskRemote: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Task>, StorageError>;

    async fn replace_all(&self, tasks: &[Task]) -> Result<(), StorageError>;
}
