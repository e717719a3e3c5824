use super::*;
use lsp_types::Url;

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn data(roots: &[&str]) -> Option<WorkspaceData> {
    Some(WorkspaceData::new(
        "w1",
        "proj",
        roots.iter().map(|r| url(r)).collect(),
    ))
}

#[test]
fn test_first_accept_adds_every_root() {
    let mut state = WorkspaceState::new();
    assert!(state.snapshot().is_none());

    let event = state.accept(data(&["file:///r1", "file:///r2"]));
    assert_eq!(event.added().len(), 2);
    assert!(event.removed().is_empty());
    assert_eq!(state.snapshot().unwrap().folders().len(), 2);
}

#[test]
fn test_adding_a_root() {
    let mut state = WorkspaceState::new();
    state.accept(data(&["file:///a"]));

    let event = state.accept(data(&["file:///a", "file:///b"]));
    assert!(event.removed().is_empty());
    assert_eq!(event.added().len(), 1);
    assert_eq!(event.added()[0].uri, url("file:///b"));
    assert_eq!(event.added()[0].index, 1);
    assert_eq!(event.added()[0].name, "b");
}

#[test]
fn test_identical_data_yields_empty_event() {
    let mut state = WorkspaceState::new();
    let first = state.accept(data(&["file:///a", "file:///b"]));
    assert!(!first.is_empty());

    let second = state.accept(data(&["file:///a", "file:///b"]));
    assert!(second.is_empty());
}

#[test]
fn test_none_to_none_yields_empty_event() {
    let mut state = WorkspaceState::new();
    assert!(state.accept(None).is_empty());
    assert!(state.snapshot().is_none());
}

#[test]
fn test_closing_workspace_removes_everything() {
    let mut state = WorkspaceState::new();
    state.accept(data(&["file:///a", "file:///b"]));

    let event = state.accept(None);
    assert!(event.added().is_empty());
    assert_eq!(event.removed().len(), 2);
    assert!(state.snapshot().is_none());
}

#[test]
fn test_reorder_and_swap() {
    let mut state = WorkspaceState::new();
    state.accept(data(&["file:///c", "file:///a", "file:///b"]));

    let event = state.accept(data(&["file:///b", "file:///d", "file:///a"]));
    let added: Vec<&str> = event.added().iter().map(|f| f.uri.as_str()).collect();
    let removed: Vec<&str> = event.removed().iter().map(|f| f.uri.as_str()).collect();
    assert_eq!(added, vec!["file:///d"]);
    assert_eq!(removed, vec!["file:///c"]);
    assert_eq!(state.snapshot().unwrap().roots()[0], url("file:///b"));
}

#[test]
fn test_removed_folder_keeps_old_index() {
    let mut state = WorkspaceState::new();
    state.accept(data(&["file:///a", "file:///b"]));

    let event = state.accept(data(&["file:///a"]));
    assert_eq!(event.removed().len(), 1);
    assert_eq!(event.removed()[0].uri, url("file:///b"));
    assert_eq!(event.removed()[0].index, 1);
}
