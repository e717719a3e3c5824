//! Workspace service: the host-side entry point for folder queries and the
//! remote workspace operations.

mod bridge;

pub use bridge::RemoteOperationBridge;

use crate::kernel::paths::{fs_path, normalize_str, relative};
use crate::kernel::services::ports::{
    CancellationToken, MainThreadWorkspace, RemoteFuture, WorkspaceData,
};
use crate::kernel::workspace::{
    translate, FoldersChangeEvent, WorkspaceEdit, WorkspaceFolder, WorkspaceState,
};
use lsp_types::Url;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

/// Input accepted by [`WorkspaceService::get_relative_path`].
#[derive(Debug, Clone, Copy)]
pub enum PathOrUri<'a> {
    Path(&'a Path),
    Uri(&'a Url),
}

impl<'a> From<&'a str> for PathOrUri<'a> {
    fn from(path: &'a str) -> Self {
        PathOrUri::Path(Path::new(path))
    }
}

impl<'a> From<&'a Path> for PathOrUri<'a> {
    fn from(path: &'a Path) -> Self {
        PathOrUri::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for PathOrUri<'a> {
    fn from(path: &'a PathBuf) -> Self {
        PathOrUri::Path(path.as_path())
    }
}

impl<'a> From<&'a Url> for PathOrUri<'a> {
    fn from(uri: &'a Url) -> Self {
        PathOrUri::Uri(uri)
    }
}

pub struct WorkspaceService {
    state: WorkspaceState,
    bridge: RemoteOperationBridge,
    proxy: Arc<dyn MainThreadWorkspace>,
    listeners: Vec<Sender<Arc<FoldersChangeEvent>>>,
}

impl WorkspaceService {
    /// Starts from `data` without emitting a change event.
    pub fn new(proxy: Arc<dyn MainThreadWorkspace>, data: Option<WorkspaceData>) -> Self {
        let mut state = WorkspaceState::new();
        state.accept(data);
        Self {
            state,
            bridge: RemoteOperationBridge::new(Arc::clone(&proxy)),
            proxy,
            listeners: Vec::new(),
        }
    }

    /// Subscribes to folder changes. Events arrive in update order, one per
    /// accepted payload. Dropping the receiver unsubscribes.
    pub fn on_did_change_workspace_folders(&mut self) -> Receiver<Arc<FoldersChangeEvent>> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    /// Handles `$acceptWorkspaceData`: swaps the snapshot and publishes the delta.
    pub fn accept_workspace_data(&mut self, data: Option<WorkspaceData>) -> Arc<FoldersChangeEvent> {
        let event = Arc::new(self.state.accept(data));
        tracing::info!(
            added = event.added().len(),
            removed = event.removed().len(),
            "workspace folders changed"
        );

        self.listeners
            .retain(|tx| tx.send(Arc::clone(&event)).is_ok());
        event
    }

    pub fn id(&self) -> Option<&str> {
        self.state.snapshot().map(|snapshot| snapshot.id())
    }

    pub fn name(&self) -> Option<&str> {
        self.state.snapshot().map(|snapshot| snapshot.name())
    }

    /// Copy of the current folders; `None` without a workspace.
    pub fn get_folders(&self) -> Option<Vec<WorkspaceFolder>> {
        self.state
            .snapshot()
            .map(|snapshot| snapshot.folders().to_vec())
    }

    pub fn get_enclosing_folder(&self, uri: &Url) -> Option<WorkspaceFolder> {
        self.state
            .snapshot()
            .and_then(|snapshot| snapshot.get_folder(uri))
            .cloned()
    }

    /// Legacy single-root accessor.
    ///
    /// Returns the first root even when several are open.
    // TODO: return None for multi-root workspaces once the remaining single-root
    // callers are confirmed to handle it.
    pub fn get_path(&self) -> Option<PathBuf> {
        let snapshot = self.state.snapshot()?;
        snapshot.roots().first().map(fs_path)
    }

    /// `path_or_uri` relative to the first root that contains it, else the
    /// normalized input.
    pub fn get_relative_path<'a>(&self, path_or_uri: impl Into<PathOrUri<'a>>) -> String {
        let path = match path_or_uri.into() {
            PathOrUri::Path(path) => path.to_path_buf(),
            PathOrUri::Uri(uri) => fs_path(uri),
        };
        if path.as_os_str().is_empty() {
            return String::new();
        }

        let Some(snapshot) = self
            .state
            .snapshot()
            .filter(|snapshot| !snapshot.roots().is_empty())
        else {
            return normalize_str(&path);
        };

        for root in snapshot.roots() {
            let result = relative(&fs_path(root), &path);
            let result = result.to_string_lossy();
            if result.is_empty() || result.starts_with("..") {
                continue;
            }
            return normalize_str(Path::new(result.as_ref()));
        }

        normalize_str(&path)
    }

    pub fn find_files(
        &self,
        include: &str,
        exclude: &str,
        max_results: Option<u32>,
        token: Option<&CancellationToken>,
    ) -> RemoteFuture<Vec<Url>> {
        self.bridge.find_files(include, exclude, max_results, token)
    }

    pub fn save_all(&self, include_untitled: Option<bool>) -> RemoteFuture<bool> {
        self.bridge.save_all(include_untitled)
    }

    pub fn apply_edit(&self, edit: &WorkspaceEdit) -> RemoteFuture<bool> {
        let edits = translate(edit);
        tracing::debug!(resources = edit.len(), edits = edits.len(), "apply workspace edit");
        self.proxy.apply_workspace_edit(edits)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/workspace/service.rs"]
mod tests;
