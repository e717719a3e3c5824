//! Local projection of the workspace owned by the main side.

pub mod convert;
pub mod delta;
pub mod edits;
pub mod snapshot;
pub mod state;

pub use delta::FoldersChangeEvent;
pub use edits::{translate, WorkspaceEdit};
pub use snapshot::{Snapshot, WorkspaceFolder};
pub use state::WorkspaceState;
