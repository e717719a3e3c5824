use super::*;
use lsp_types::Url;

fn folder(path: &str, index: usize) -> WorkspaceFolder {
    let uri = Url::parse(&format!("file://{path}")).unwrap();
    WorkspaceFolder {
        name: path.rsplit('/').next().unwrap_or_default().to_string(),
        uri,
        index,
    }
}

fn uris(folders: &[WorkspaceFolder]) -> Vec<String> {
    let mut out: Vec<String> = folders.iter().map(|f| f.uri.to_string()).collect();
    out.sort();
    out
}

fn folder_delta(
    before: &[WorkspaceFolder],
    after: &[WorkspaceFolder],
) -> (Vec<WorkspaceFolder>, Vec<WorkspaceFolder>) {
    delta(
        &sorted_folders(before),
        &sorted_folders(after),
        compare_folders,
    )
}

#[test]
fn test_delta_of_ints() {
    let (removed, added) = delta(&[1, 2, 4, 6], &[2, 3, 4, 7], |a, b| a.cmp(b));
    assert_eq!(removed, vec![1, 6]);
    assert_eq!(added, vec![3, 7]);
}

#[test]
fn test_delta_empty_sides() {
    let (removed, added) = delta::<i32, _>(&[], &[1, 2], |a, b| a.cmp(b));
    assert!(removed.is_empty());
    assert_eq!(added, vec![1, 2]);

    let (removed, added) = delta::<i32, _>(&[1, 2], &[], |a, b| a.cmp(b));
    assert_eq!(removed, vec![1, 2]);
    assert!(added.is_empty());
}

#[test]
fn test_delta_duplicates_count_by_position() {
    let (removed, added) = delta(&[1, 1, 2], &[1, 2, 2], |a, b| a.cmp(b));
    assert_eq!(removed, vec![1]);
    assert_eq!(added, vec![2]);
}

#[test]
fn test_folder_delta_ignores_original_order() {
    let a = vec![folder("/c", 0), folder("/a", 1), folder("/b", 2)];
    let b = vec![folder("/d", 0), folder("/b", 1), folder("/a", 2)];

    let (removed, added) = folder_delta(&a, &b);
    assert_eq!(uris(&removed), vec!["file:///c"]);
    assert_eq!(uris(&added), vec!["file:///d"]);

    let a_rev: Vec<_> = a.iter().rev().cloned().collect();
    let b_rev: Vec<_> = b.iter().rev().cloned().collect();
    let (removed_rev, added_rev) = folder_delta(&a_rev, &b_rev);
    assert_eq!(uris(&removed_rev), uris(&removed));
    assert_eq!(uris(&added_rev), uris(&added));
}

#[test]
fn test_folder_delta_reindexed_folder_is_unchanged() {
    let a = vec![folder("/a", 0), folder("/b", 1)];
    let b = vec![folder("/b", 0), folder("/a", 1)];

    let (removed, added) = folder_delta(&a, &b);
    assert!(removed.is_empty());
    assert!(added.is_empty());
}

#[test]
fn test_change_event_accessors() {
    let event = FoldersChangeEvent::new(vec![folder("/b", 1)], Vec::new());
    assert_eq!(event.added().len(), 1);
    assert!(event.removed().is_empty());
    assert!(!event.is_empty());
    assert!(FoldersChangeEvent::default().is_empty());
}
