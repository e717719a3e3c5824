use super::snapshot::WorkspaceFolder;
use std::cmp::Ordering;

/// Folders added and removed by one workspace update. Never mutated after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldersChangeEvent {
    added: Vec<WorkspaceFolder>,
    removed: Vec<WorkspaceFolder>,
}

impl FoldersChangeEvent {
    pub fn new(added: Vec<WorkspaceFolder>, removed: Vec<WorkspaceFolder>) -> Self {
        Self { added, removed }
    }

    pub fn added(&self) -> &[WorkspaceFolder] {
        &self.added
    }

    pub fn removed(&self) -> &[WorkspaceFolder] {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Merge-walk two sequences sorted by `compare`.
///
/// Returns `(removed, added)`: elements only in `before`, elements only in
/// `after`. Equal elements are consumed pairwise, so duplicates count by position.
pub fn delta<T, F>(before: &[T], after: &[T], mut compare: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut removed = Vec::new();
    let mut added = Vec::new();
    let mut before_idx = 0usize;
    let mut after_idx = 0usize;

    loop {
        if before_idx == before.len() {
            added.extend_from_slice(&after[after_idx..]);
            break;
        }
        if after_idx == after.len() {
            removed.extend_from_slice(&before[before_idx..]);
            break;
        }

        let before_item = &before[before_idx];
        let after_item = &after[after_idx];
        match compare(before_item, after_item) {
            Ordering::Equal => {
                before_idx += 1;
                after_idx += 1;
            }
            Ordering::Less => {
                removed.push(before_item.clone());
                before_idx += 1;
            }
            Ordering::Greater => {
                added.push(after_item.clone());
                after_idx += 1;
            }
        }
    }

    (removed, added)
}

pub fn compare_folders(a: &WorkspaceFolder, b: &WorkspaceFolder) -> Ordering {
    a.uri.as_str().cmp(b.uri.as_str())
}

/// Copy of `folders` stable-sorted by canonical uri string.
pub fn sorted_folders(folders: &[WorkspaceFolder]) -> Vec<WorkspaceFolder> {
    let mut out = folders.to_vec();
    out.sort_by(compare_folders);
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/workspace/delta.rs"]
mod tests;
