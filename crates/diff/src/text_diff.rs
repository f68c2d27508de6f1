use anyhow::Result;
use log::debug;
use rayon::prelude::*;

use crate::diff_row::{DiffKind, DiffRow, DiffSegment};
use crate::document_diff::DocumentDiff;
use crate::line_split::split_lines;
use crate::sequence_match::{edit_script, EditOp};

/// Wrapper around text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Create a diff between two texts
    pub fn diff(left_text: &str, right_text: &str) -> Result<DocumentDiff> {
        DocumentDiff::new(left_text, right_text)
    }

    /// Generate a signed-line diff string (like git diff without headers)
    pub fn unified_diff(left_text: &str, right_text: &str) -> String {
        let left_lines = split_lines(left_text);
        let right_lines = split_lines(right_text);

        let mut result = String::new();
        for op in edit_script(&left_lines, &right_lines) {
            let (sign, line) = match &op {
                EditOp::Delete(line) => ('-', line),
                EditOp::Insert(line) => ('+', line),
                EditOp::Equal(line) => (' ', line),
            };
            result.push(sign);
            result.push_str(line);
            result.push('\n');
        }

        result
    }
}

/// Compare two documents and produce the rows to render side-by-side.
///
/// The result covers every line of both inputs: each left line appears in
/// exactly one row with a non-Empty left side, and likewise for the
/// right. Rows are emitted in document order.
pub fn diff(left_text: &str, right_text: &str) -> Vec<DiffRow> {
    let left_lines = split_lines(left_text);
    let right_lines = split_lines(right_text);

    let ops = edit_script(&left_lines, &right_lines);
    debug!(
        "line diff: {} left lines, {} right lines, {} ops",
        left_lines.len(),
        right_lines.len(),
        ops.len()
    );

    let mut rows = Vec::new();
    let mut counter = LineCounter::new();
    let mut index = 0;

    while index < ops.len() {
        match &ops[index] {
            EditOp::Equal(line) => {
                rows.push(build_row(
                    line.clone(),
                    line.clone(),
                    DiffKind::Same,
                    DiffKind::Same,
                    &mut counter,
                ));
                index += 1;
            }
            EditOp::Delete(_) => {
                // Collect the maximal delete run and the insert run that
                // immediately follows it, then pair them index-wise.
                let mut deletes = Vec::new();
                while let Some(EditOp::Delete(line)) = ops.get(index) {
                    deletes.push(line.clone());
                    index += 1;
                }

                let mut inserts = Vec::new();
                while let Some(EditOp::Insert(line)) = ops.get(index) {
                    inserts.push(line.clone());
                    index += 1;
                }

                let pairs = deletes.len().min(inserts.len());
                for pair in 0..pairs {
                    rows.push(build_row(
                        deletes[pair].clone(),
                        inserts[pair].clone(),
                        DiffKind::Changed,
                        DiffKind::Changed,
                        &mut counter,
                    ));
                }
                for line in deletes.into_iter().skip(pairs) {
                    rows.push(build_row(
                        line,
                        String::new(),
                        DiffKind::Removed,
                        DiffKind::Empty,
                        &mut counter,
                    ));
                }
                for line in inserts.into_iter().skip(pairs) {
                    rows.push(build_row(
                        String::new(),
                        line,
                        DiffKind::Empty,
                        DiffKind::Added,
                        &mut counter,
                    ));
                }
            }
            EditOp::Insert(line) => {
                rows.push(build_row(
                    String::new(),
                    line.clone(),
                    DiffKind::Empty,
                    DiffKind::Added,
                    &mut counter,
                ));
                index += 1;
            }
        }
    }

    refine_changed_rows(&mut rows);

    rows
}

/// Per-call 1-based line counters for the two sides
struct LineCounter {
    left: usize,
    right: usize,
}

impl LineCounter {
    fn new() -> Self {
        Self { left: 1, right: 1 }
    }

    fn next_left(&mut self) -> usize {
        let line = self.left;
        self.left += 1;
        line
    }

    fn next_right(&mut self) -> usize {
        let line = self.right;
        self.right += 1;
        line
    }
}

/// Build a single row. Line counters advance only for non-Empty sides;
/// character-level segments for changed pairs are filled in afterwards by
/// `refine_changed_rows`.
fn build_row(
    left: String,
    right: String,
    left_kind: DiffKind,
    right_kind: DiffKind,
    counter: &mut LineCounter,
) -> DiffRow {
    let left_line = if left_kind == DiffKind::Empty {
        0
    } else {
        counter.next_left()
    };
    let right_line = if right_kind == DiffKind::Empty {
        0
    } else {
        counter.next_right()
    };

    let left_segments = plain_segments(&left, left_kind);
    let right_segments = plain_segments(&right, right_kind);

    DiffRow {
        left,
        right,
        left_kind,
        right_kind,
        left_line,
        right_line,
        left_segments,
        right_segments,
    }
}

/// A single unhighlighted segment covering the whole line, or no segments
/// for an Empty side
fn plain_segments(text: &str, kind: DiffKind) -> Vec<DiffSegment> {
    if kind == DiffKind::Empty {
        Vec::new()
    } else {
        vec![DiffSegment::new(text, false)]
    }
}

/// Character-level refinement for paired change rows. Each row reads only
/// its own two strings, so rows refine in parallel without changing the
/// output.
fn refine_changed_rows(rows: &mut [DiffRow]) {
    let changed = rows.iter().filter(|row| row.is_changed_pair()).count();
    debug!("refining {changed} changed rows");

    rows.par_iter_mut()
        .filter(|row| row.is_changed_pair())
        .for_each(|row| {
            let (left_segments, right_segments) = diff_chars(&row.left, &row.right);
            row.left_segments = left_segments;
            row.right_segments = right_segments;
        });
}

/// Compute character-level segments for one changed line pair
fn diff_chars(left: &str, right: &str) -> (Vec<DiffSegment>, Vec<DiffSegment>) {
    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();

    let mut left_builder = SegmentBuilder::new();
    let mut right_builder = SegmentBuilder::new();

    for op in edit_script(&left_chars, &right_chars) {
        match op {
            EditOp::Equal(ch) => {
                left_builder.push(ch, false);
                right_builder.push(ch, false);
            }
            EditOp::Delete(ch) => left_builder.push(ch, true),
            EditOp::Insert(ch) => right_builder.push(ch, true),
        }
    }

    (left_builder.build(), right_builder.build())
}

/// Accumulates characters into segments, closing the current segment on
/// every highlight-state transition
struct SegmentBuilder {
    segments: Vec<DiffSegment>,
    buffer: String,
    highlighted: bool,
}

impl SegmentBuilder {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            buffer: String::new(),
            highlighted: false,
        }
    }

    fn push(&mut self, ch: char, highlighted: bool) {
        if !self.buffer.is_empty() && highlighted != self.highlighted {
            self.flush();
        }
        self.buffer.push(ch);
        self.highlighted = highlighted;
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let text = std::mem::take(&mut self.buffer);
            self.segments.push(DiffSegment::new(text, self.highlighted));
        }
    }

    fn build(mut self) -> Vec<DiffSegment> {
        self.flush();
        self.segments
    }
}
