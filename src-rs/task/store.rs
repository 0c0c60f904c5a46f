use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info};

use super::types::Task;
use crate::result::{SyncOp, SyncResult};
use crate::storage::TaskRemote;

/// In-memory todo list with explicit remote sync.
///
/// Local edits never touch the remote; only `load` and `save` do. Watchers
/// obtained from `subscribe` see every change to the list.
pub struct TaskStore {
    remote: Arc<dyn TaskRemote>,
    tasks: watch::Sender<Vec<Task>>,
}

impl TaskStore {
    pub fn new(remote: Arc<dyn TaskRemote>) -> Self {
        let (tasks, _) = watch::channel(Vec::new());
        Self { remote, tasks }
    }

    /// Replaces the local list with the remote one. On failure the local list
    /// is left as it was.
    pub async fn load(&self) -> SyncResult {
        match self.remote.fetch_all().await {
            Ok(tasks) => {
                let count = tasks.len();
                self.tasks.send_replace(tasks);
                info!(count, "todo list loaded");
                SyncResult::ok(SyncOp::Load, count)
            }
            Err(err) => {
                error!(error = %err, "load failed, keeping local todo list");
                SyncResult::failed(SyncOp::Load, err)
            }
        }
    }

    /// Overwrites the remote list with a snapshot of the local one.
    pub async fn save(&self) -> SyncResult {
        let snapshot = self.tasks();
        match self.remote.replace_all(&snapshot).await {
            Ok(()) => {
                info!(count = snapshot.len(), "todo list saved");
                SyncResult::ok(SyncOp::Save, snapshot.len())
            }
            Err(err) => {
                error!(error = %err, "save failed");
                SyncResult::failed(SyncOp::Save, err)
            }
        }
    }

    pub fn add(&self, task: Task) {
        debug!(id = %task.id, "adding task");
        self.tasks.send_modify(|list| list.push(task));
    }

    pub fn remove(&self, id: &str) {
        let removed = self.tasks.send_if_modified(|list| {
            let found = list.iter().position(|task| task.id == id);
            match found {
                Some(idx) => {
                    list.remove(idx);
                    true
                }
                None => false,
            }
        });
        if !removed {
            debug!(id, "remove: no such task");
        }
    }

    pub fn update(&self, updated: Task) {
        let id = updated.id.clone();
        let replaced = self.tasks.send_if_modified(|list| {
            let found = list.iter().position(|task| task.id == id);
            match found.and_then(|idx| list.get_mut(idx)) {
                Some(slot) => {
                    *slot = updated;
                    true
                }
                None => false,
            }
        });
        if !replaced {
            debug!(id = %id, "update: no such task");
        }
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        self.tasks.borrow().iter().find(|task| task.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Task>> {
        self.tasks.subscribe()
    }
}
