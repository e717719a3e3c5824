use super::*;

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[test]
fn test_from_none_is_no_workspace() {
    assert!(Snapshot::from_data(None).is_none());
}

#[test]
fn test_folders_mirror_roots() {
    let roots = vec![
        url("file:///work/b"),
        url("file:///work/a"),
        url("file:///home/me/notes"),
    ];
    let snapshot =
        Snapshot::from_data(Some(WorkspaceData::new("w1", "proj", roots.clone()))).unwrap();

    assert_eq!(snapshot.id(), "w1");
    assert_eq!(snapshot.name(), "proj");
    assert_eq!(snapshot.roots(), roots.as_slice());
    assert_eq!(snapshot.folders().len(), roots.len());
    for (i, folder) in snapshot.folders().iter().enumerate() {
        assert_eq!(folder.uri, roots[i]);
        assert_eq!(folder.index, i);
    }
    assert_eq!(snapshot.folders()[0].name, "b");
    assert_eq!(snapshot.folders()[2].name, "notes");
}

#[test]
fn test_empty_roots_is_a_workspace() {
    let snapshot = Snapshot::from_data(Some(WorkspaceData::new("w", "empty", Vec::new()))).unwrap();
    assert!(snapshot.roots().is_empty());
    assert!(snapshot.folders().is_empty());
}

#[test]
fn test_get_folder_matches_by_uri_string() {
    let snapshot = Snapshot::from_data(Some(WorkspaceData::new(
        "w1",
        "proj",
        vec![url("file:///x"), url("file:///y")],
    )))
    .unwrap();

    let folder = snapshot.get_folder(&url("file:///y")).unwrap();
    assert_eq!(folder.index, 1);
    assert_eq!(folder.name, "y");

    assert!(snapshot.get_folder(&url("file:///y/z.txt")).is_none());
    assert!(snapshot.get_folder(&url("file:///z")).is_none());
}
