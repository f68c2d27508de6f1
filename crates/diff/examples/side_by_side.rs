use anyhow::Result;
use row_diff::{diff, DiffKind, DiffRow, TextDiff};

fn main() -> Result<()> {
    env_logger::init();

    // Two sample versions of a file to compare
    let left = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
    let right = "fn main() {\n    let name = \"Rust\";\n    println!(\"Hello, {}!\", name);\n}\n";

    println!("Side-by-side rows:");
    let rows = diff(left, right);
    for row in &rows {
        print_row(row);
    }

    // The owning wrapper gives access to the documents and statistics
    let document = TextDiff::diff(left, right)?;
    let snapshot = document.snapshot();

    println!("\nDiff statistics:");
    println!("  Total rows: {}", snapshot.row_count());
    println!("  Same rows: {}", snapshot.same_rows());
    println!("  Added rows: {}", snapshot.added_rows());
    println!("  Removed rows: {}", snapshot.removed_rows());
    println!("  Changed rows: {}", snapshot.changed_rows());
    println!("  Left lines: {}", snapshot.left_line_count);
    println!("  Right lines: {}", snapshot.right_line_count);

    Ok(())
}

/// Print one row with line numbers and ANSI colors keyed off the kinds
fn print_row(row: &DiffRow) {
    let left_no = line_number(row.left_line);
    let right_no = line_number(row.right_line);

    let left = colored(&row.left, row.left_kind);
    let right = colored(&row.right, row.right_kind);

    // Pad on the raw text so escape codes do not skew the column
    let pad = 32usize.saturating_sub(row.left.len());
    println!("{} {}{} | {} {}", left_no, left, " ".repeat(pad), right_no, right);
}

fn line_number(line: usize) -> String {
    if line == 0 {
        "    ".to_string()
    } else {
        format!("{line:>4}")
    }
}

fn colored(text: &str, kind: DiffKind) -> String {
    match kind {
        DiffKind::Added => format!("\x1b[32m{text}\x1b[0m"),
        DiffKind::Removed => format!("\x1b[31m{text}\x1b[0m"),
        DiffKind::Changed => format!("\x1b[33m{text}\x1b[0m"),
        DiffKind::Same | DiffKind::Empty => text.to_string(),
    }
}
