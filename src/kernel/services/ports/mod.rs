//! Service ports: traits + data contracts.

pub mod cancel;
pub mod config;
pub mod workspace;

pub use cancel::{CancellationToken, CancellationTokenSource};
pub use config::HostConfig;
pub use workspace::{
    EndOfLine, MainThreadWorkspace, RemoteError, RemoteFuture, RemoteResult, ResourceEdit,
    TextEdit, WireEndOfLine, WireRange, WorkspaceData,
};
