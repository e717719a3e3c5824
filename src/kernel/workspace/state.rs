use super::delta::{compare_folders, delta, sorted_folders, FoldersChangeEvent};
use super::snapshot::Snapshot;
use crate::kernel::services::ports::WorkspaceData;

/// Holds the current projection and diffs every replacement against it.
#[derive(Debug, Default)]
pub struct WorkspaceState {
    current: Option<Snapshot>,
}

impl WorkspaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    /// Replaces the snapshot wholesale and returns the folder delta.
    ///
    /// Always returns an event, also when nothing changed.
    pub fn accept(&mut self, data: Option<WorkspaceData>) -> FoldersChangeEvent {
        let old_folders = self
            .current
            .as_ref()
            .map(|snapshot| sorted_folders(snapshot.folders()))
            .unwrap_or_default();

        self.current = Snapshot::from_data(data);

        let new_folders = self
            .current
            .as_ref()
            .map(|snapshot| sorted_folders(snapshot.folders()))
            .unwrap_or_default();

        let (removed, added) = delta(&old_folders, &new_folders, compare_folders);
        FoldersChangeEvent::new(added, removed)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/state.rs"]
mod tests;
