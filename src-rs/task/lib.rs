pub mod store;
pub mod types;

pub use store::TaskStore;
pub use types::{Task, TaskStatus};
