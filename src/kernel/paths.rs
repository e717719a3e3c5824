//! Lexical path helpers for the workspace projection.
//!
//! Nothing here touches the filesystem; roots may not even exist locally.

use lsp_types::Url;
use std::path::{Component, Path, PathBuf};

/// Collapses `.` / `..` segments and redundant separators.
///
/// Leading `..` segments of a relative path are kept, a `..` directly under the
/// root is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() && !path.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

pub fn normalize_str(path: &Path) -> String {
    normalize(path).to_string_lossy().into_owned()
}

/// Path of `to` relative to `from`. Empty when both point at the same place.
pub fn relative(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..from_parts.len() {
        out.push("..");
    }
    for part in &to_parts[common..] {
        out.push(part.as_os_str());
    }
    out
}

pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Filesystem form of a root. Non-`file:` uris fall back to their raw path.
pub fn fs_path(uri: &Url) -> PathBuf {
    uri.to_file_path()
        .unwrap_or_else(|_| PathBuf::from(uri.path()))
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/paths.rs"]
mod tests;
