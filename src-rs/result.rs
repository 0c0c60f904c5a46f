use std::fmt;

use crate::storage::StorageError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOp {
    Load,
    Save,
}

impl fmt::Display for SyncOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOp::Load => f.write_str("load"),
            SyncOp::Save => f.write_str("save"),
        }
    }
}

/// Outcome of a store-level `load` or `save`.
///
/// The store never returns `Err` for a failed sync; it reports it here instead.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncResult {
    pub op: SyncOp,
    pub success: bool,
    /// Tasks received (load) or written (save). Zero on failure.
    pub count: usize,
    pub error: Option<StorageError>,
}

impl SyncResult {
    pub fn ok(op: SyncOp, count: usize) -> Self {
        Self {
            op,
            success: true,
            count,
            error: None,
        }
    }

    pub fn failed(op: SyncOp, error: StorageError) -> Self {
        Self {
            op,
            success: false,
            count: 0,
            error: Some(error),
        }
    }
}
