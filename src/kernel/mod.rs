//! Headless host core.

pub mod paths;
pub mod services;
pub mod workspace;

pub use services::workspace::WorkspaceService;
pub use workspace::{FoldersChangeEvent, Snapshot, WorkspaceEdit, WorkspaceFolder};
