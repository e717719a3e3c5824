use crate::kernel::paths::{basename, fs_path};
use crate::kernel::services::ports::WorkspaceData;
use lsp_types::Url;
use serde::Serialize;

/// A root of the current workspace, derived from a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceFolder {
    pub name: String,
    pub uri: Url,
    pub index: usize,
}

/// Immutable projection of one `$acceptWorkspaceData` payload.
///
/// `folders[i]` always describes `roots[i]` and carries `index == i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    id: String,
    name: String,
    roots: Vec<Url>,
    folders: Vec<WorkspaceFolder>,
}

impl Snapshot {
    /// `None` in means "no workspace open", which is `None` out.
    pub fn from_data(data: Option<WorkspaceData>) -> Option<Self> {
        let WorkspaceData { id, name, roots } = data?;
        let folders = roots
            .iter()
            .enumerate()
            .map(|(index, uri)| WorkspaceFolder {
                name: basename(&fs_path(uri)),
                uri: uri.clone(),
                index,
            })
            .collect();

        Some(Self {
            id,
            name,
            roots,
            folders,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roots(&self) -> &[Url] {
        &self.roots
    }

    pub fn folders(&self) -> &[WorkspaceFolder] {
        &self.folders
    }

    /// Folder whose canonical uri string equals `uri`'s.
    pub fn get_folder(&self, uri: &Url) -> Option<&WorkspaceFolder> {
        self.folders
            .iter()
            .find(|folder| folder.uri.as_str() == uri.as_str())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/snapshot.rs"]
mod tests;
