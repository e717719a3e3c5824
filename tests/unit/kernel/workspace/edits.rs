use super::*;
use crate::kernel::services::ports::{WireEndOfLine, WireRange};

fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

fn range(sl: u32, sc: u32, el: u32, ec: u32) -> Range {
    Range::new(Position::new(sl, sc), Position::new(el, ec))
}

#[test]
fn test_translate_is_resource_major_edit_minor() {
    let a = url("file:///w/a.rs");
    let b = url("file:///w/b.rs");

    let mut edit = WorkspaceEdit::new();
    edit.replace(&b, range(0, 0, 0, 3), "one");
    edit.insert(&a, Position::new(4, 2), "two");
    edit.delete(&b, range(1, 0, 2, 0));
    edit.replace(&a, range(5, 0, 5, 1), "three");

    let out = translate(&edit);
    assert_eq!(out.len(), 4);

    let order: Vec<(&str, &str)> = out
        .iter()
        .map(|e| (e.resource.as_str(), e.new_text.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("file:///w/b.rs", "one"),
            ("file:///w/b.rs", ""),
            ("file:///w/a.rs", "two"),
            ("file:///w/a.rs", "three"),
        ]
    );
}

#[test]
fn test_translate_length_is_total_edit_count() {
    let mut edit = WorkspaceEdit::new();
    for i in 0..3u32 {
        let uri = url(&format!("file:///w/{i}.txt"));
        for j in 0..=i {
            edit.insert(&uri, Position::new(j, 0), "x");
        }
    }
    assert_eq!(edit.len(), 3);
    assert_eq!(translate(&edit).len(), 1 + 2 + 3);
}

#[test]
fn test_translate_converts_range_and_eol() {
    let uri = url("file:///w/a.txt");
    let mut edit = WorkspaceEdit::new();
    edit.replace(&uri, range(0, 1, 0, 4), "abc");
    edit.set_end_of_line(&uri, EndOfLine::CrLf);

    let out = translate(&edit);
    assert_eq!(
        out[0].range,
        Some(WireRange {
            start_line_number: 1,
            start_column: 2,
            end_line_number: 1,
            end_column: 5,
        })
    );
    assert_eq!(out[0].new_eol, None);

    assert_eq!(out[1].range, None);
    assert_eq!(out[1].new_eol, Some(WireEndOfLine::CrLf));
    assert_eq!(out[1].new_text, "");
}

#[test]
fn test_translate_empty_batch() {
    assert!(translate(&WorkspaceEdit::new()).is_empty());
}

#[test]
fn test_set_replaces_in_place() {
    let a = url("file:///w/a");
    let b = url("file:///w/b");

    let mut edit = WorkspaceEdit::new();
    edit.insert(&a, Position::new(0, 0), "a1");
    edit.insert(&b, Position::new(0, 0), "b1");
    edit.set(&a, vec![TextEdit::delete(range(0, 0, 0, 1))]);

    assert!(edit.has(&a));
    assert_eq!(edit.get(&a).unwrap().len(), 1);
    assert_eq!(edit.get(&a).unwrap()[0].new_text, "");
    assert_eq!(edit.entries()[0].0, a);
    assert_eq!(edit.entries()[1].0, b);
    assert!(!edit.has(&url("file:///w/c")));
}

#[test]
fn test_wire_json_shape() {
    let uri = url("file:///w/a.txt");
    let mut edit = WorkspaceEdit::new();
    edit.insert(&uri, Position::new(0, 0), "hi");
    edit.set_end_of_line(&uri, EndOfLine::Lf);

    let json = serde_json::to_value(translate(&edit)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {
                "resource": "file:///w/a.txt",
                "newText": "hi",
                "range": {
                    "startLineNumber": 1,
                    "startColumn": 1,
                    "endLineNumber": 1,
                    "endColumn": 1
                }
            },
            {
                "resource": "file:///w/a.txt",
                "newText": "",
                "newEol": 1
            }
        ])
    );
}
