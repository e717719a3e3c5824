use super::*;

#[test]
fn test_normalize_collapses_dots() {
    assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
    assert_eq!(normalize(Path::new("a//b/")), PathBuf::from("a/b"));
    assert_eq!(normalize(Path::new("../a/../../b")), PathBuf::from("../../b"));
    assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    assert_eq!(normalize(Path::new("./")), PathBuf::from("."));
}

#[test]
fn test_relative_inside_root() {
    let rel = relative(Path::new("/y"), Path::new("/y/z.txt"));
    assert_eq!(rel, PathBuf::from("z.txt"));

    let rel = relative(Path::new("/y/"), Path::new("/y/a/b/../c.rs"));
    assert_eq!(rel, PathBuf::from("a/c.rs"));
}

#[test]
fn test_relative_outside_root_starts_with_parent() {
    let rel = relative(Path::new("/x"), Path::new("/y/z.txt"));
    assert_eq!(rel, PathBuf::from("../y/z.txt"));
}

#[test]
fn test_relative_same_path_is_empty() {
    let rel = relative(Path::new("/x/y"), Path::new("/x/y/"));
    assert!(rel.as_os_str().is_empty());
}

#[test]
fn test_basename() {
    assert_eq!(basename(Path::new("/r1")), "r1");
    assert_eq!(basename(Path::new("/home/me/project")), "project");
    assert_eq!(basename(Path::new("/")), "");
}

#[test]
fn test_fs_path_of_file_uri() {
    let uri = Url::parse("file:///home/me/project").unwrap();
    assert_eq!(fs_path(&uri), PathBuf::from("/home/me/project"));

    let uri = Url::parse("memfs:/scratch/notes").unwrap();
    assert_eq!(fs_path(&uri), PathBuf::from("/scratch/notes"));
}
