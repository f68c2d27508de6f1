use anyhow::Result;
use row_diff::{diff, DiffSegment, TextDiff};

fn main() -> Result<()> {
    env_logger::init();

    let left = "let total = price * quantity;\nreturn total;\n";
    let right = "let total = price * count;\nreturn total + tax;\n";

    // 1. Changed rows carry character-level segments
    println!("1. Character-level highlighting for changed rows:");
    for row in diff(left, right) {
        if !row.is_changed_pair() {
            continue;
        }
        println!("  left:  {}", render_segments(&row.left_segments));
        println!("  right: {}", render_segments(&row.right_segments));
    }

    // 2. The raw segments, for renderers that style them directly
    println!("\n2. Raw segments of the first changed row:");
    let rows = diff(left, right);
    if let Some(row) = rows.iter().find(|row| row.is_changed_pair()) {
        for segment in &row.left_segments {
            println!("  left  {:?} highlighted={}", segment.text, segment.highlighted);
        }
        for segment in &row.right_segments {
            println!("  right {:?} highlighted={}", segment.text, segment.highlighted);
        }
    }

    // 3. Signed-line output for quick terminal inspection
    println!("\n3. Signed-line diff:");
    print!("{}", TextDiff::unified_diff(left, right));

    Ok(())
}

/// Render segments with highlighted runs shown in reverse video
fn render_segments(segments: &[DiffSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.highlighted {
            out.push_str("\x1b[7m");
            out.push_str(&segment.text);
            out.push_str("\x1b[0m");
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}
