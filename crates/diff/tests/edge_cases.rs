use row_diff::{diff, split_lines, DiffKind, DiffSegment};

#[test]
fn test_split_lines_conventions() {
    // Any of CRLF, LF, or CR terminates a line; CRLF counts once
    assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
    assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_split_lines_trailing_terminator() {
    // A trailing terminator yields a final empty line
    assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
    assert_eq!(split_lines("\n"), vec!["", ""]);

    // But the empty document has no lines
    assert_eq!(split_lines(""), Vec::<String>::new());
}

#[test]
fn test_mixed_line_endings_compare_equal() {
    // The terminators themselves are not part of the compared lines
    let rows = diff("a\r\nb\r\n", "a\nb\n");

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.left_kind == DiffKind::Same));
}

#[test]
fn test_trailing_newline_mismatch() {
    let rows = diff("a", "a\n");

    // The right side gains a trailing empty line
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].left_kind, DiffKind::Same);
    assert_eq!(rows[1].left_kind, DiffKind::Empty);
    assert_eq!(rows[1].right_kind, DiffKind::Added);
    assert_eq!(rows[1].right, "");
    assert_eq!((rows[1].left_line, rows[1].right_line), (0, 2));
}

#[test]
fn test_only_newlines() {
    let rows = diff("\n\n", "\n");

    // ["", "", ""] against ["", ""]
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].left_kind, DiffKind::Same);
    assert_eq!(rows[1].left_kind, DiffKind::Same);
    assert_eq!(rows[2].left_kind, DiffKind::Removed);
    assert_eq!((rows[2].left_line, rows[2].right_line), (3, 0));
}

#[test]
fn test_completely_disjoint_documents() {
    let rows = diff("a\nb", "x\ny\nz");

    // Two pairs, one leftover add; every line accounted for
    assert_eq!(rows.len(), 3);
    assert!(rows[0].is_changed_pair());
    assert!(rows[1].is_changed_pair());
    assert_eq!(rows[2].right_kind, DiffKind::Added);

    let left_count = rows
        .iter()
        .filter(|row| row.left_kind != DiffKind::Empty)
        .count();
    let right_count = rows
        .iter()
        .filter(|row| row.right_kind != DiffKind::Empty)
        .count();
    assert_eq!(left_count, 2);
    assert_eq!(right_count, 3);
}

#[test]
fn test_unicode_highlighting() {
    let rows = diff("Line \u{1F680}\n", "Line \u{1F389}\n");

    assert!(rows[0].is_changed_pair());
    assert_eq!(
        rows[0].left_segments,
        vec![
            DiffSegment::new("Line ", false),
            DiffSegment::new("\u{1F680}", true),
        ]
    );
    assert_eq!(
        rows[0].right_segments,
        vec![
            DiffSegment::new("Line ", false),
            DiffSegment::new("\u{1F389}", true),
        ]
    );
}

#[test]
fn test_whitespace_only_change() {
    let rows = diff("Line 1\nLine 2\n", "Line 1\nLine  2\n");

    let changed: Vec<_> = rows.iter().filter(|row| row.is_changed_pair()).collect();
    assert_eq!(changed.len(), 1);
    assert!(changed[0].has_highlight());
}

#[test]
fn test_larger_documents() {
    let mut left = String::new();
    let mut right = String::new();

    // 300 lines, every 10th line modified
    for i in 0..300 {
        left.push_str(&format!("Line {i} of the document\n"));
        if i % 10 == 0 {
            right.push_str(&format!("Line {i} was modified\n"));
        } else {
            right.push_str(&format!("Line {i} of the document\n"));
        }
    }

    let rows = diff(&left, &right);

    // One row per line pair plus the trailing empty line
    assert_eq!(rows.len(), 301);

    let changed = rows.iter().filter(|row| row.is_changed_pair()).count();
    assert_eq!(changed, 30);

    let left_count = rows
        .iter()
        .filter(|row| row.left_kind != DiffKind::Empty)
        .count();
    assert_eq!(left_count, 301);
}
