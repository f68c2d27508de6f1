use anyhow::Result;
use ropey::Rope;

use crate::diff_row::{DiffKind, DiffRow};
use crate::text_diff;

/// Represents a computed diff between two text documents
#[derive(Debug, Clone)]
pub struct DocumentDiff {
    /// The left (old) version of the text
    left_text: Rope,

    /// The right (new) version of the text
    right_text: Rope,

    /// The rows to render side-by-side
    rows: Vec<DiffRow>,
}

/// An immutable snapshot of a document diff
#[derive(Debug, Clone)]
pub struct DocumentDiffSnapshot {
    /// The rows in this diff
    pub rows: Vec<DiffRow>,

    /// The number of lines in the left text
    pub left_line_count: usize,

    /// The number of lines in the right text
    pub right_line_count: usize,
}

impl DocumentDiff {
    /// Create a new diff between two texts
    pub fn new(left_text: &str, right_text: &str) -> Result<Self> {
        let rows = text_diff::diff(left_text, right_text);

        Ok(Self {
            left_text: Rope::from_str(left_text),
            right_text: Rope::from_str(right_text),
            rows,
        })
    }

    /// Get a snapshot of the current diff
    pub fn snapshot(&self) -> DocumentDiffSnapshot {
        DocumentDiffSnapshot {
            rows: self.rows.clone(),
            left_line_count: self.left_line_count(),
            right_line_count: self.right_line_count(),
        }
    }

    /// Get the left text
    pub fn left_text(&self) -> &Rope {
        &self.left_text
    }

    /// Get the right text
    pub fn right_text(&self) -> &Rope {
        &self.right_text
    }

    /// Get the rows
    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&DiffRow> {
        self.rows.get(index)
    }

    /// Number of left lines, counting the trailing empty line after a
    /// final terminator. Equals the number of rows with content on the
    /// left side.
    fn left_line_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.left_kind != DiffKind::Empty)
            .count()
    }

    /// Number of right lines, counted the same way as the left
    fn right_line_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.right_kind != DiffKind::Empty)
            .count()
    }
}

impl DocumentDiffSnapshot {
    /// Create a new empty diff snapshot
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            left_line_count: 0,
            right_line_count: 0,
        }
    }

    /// Get the rows
    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&DiffRow> {
        self.rows.get(index)
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.rows.iter().any(|row| row.has_changes())
    }

    /// Get the number of unchanged rows
    pub fn same_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.left_kind == DiffKind::Same)
            .count()
    }

    /// Get the number of added rows
    pub fn added_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.right_kind == DiffKind::Added)
            .count()
    }

    /// Get the number of removed rows
    pub fn removed_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.left_kind == DiffKind::Removed)
            .count()
    }

    /// Get the number of changed row pairs
    pub fn changed_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_changed_pair()).count()
    }
}
