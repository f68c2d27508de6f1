use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of one side of a diff row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffKind {
    /// The line is identical on both sides
    #[display(fmt = "Same")]
    Same,

    /// The line only exists in the right version
    #[display(fmt = "Added")]
    Added,

    /// The line only exists in the left version
    #[display(fmt = "Removed")]
    Removed,

    /// The line exists on both sides with different content
    #[display(fmt = "Changed")]
    Changed,

    /// No content on this side for this row
    #[display(fmt = "Empty")]
    Empty,
}

/// A contiguous run of characters within one line sharing a single
/// highlight state
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffSegment {
    /// The segment text
    pub text: String,

    /// Whether the renderer should highlight this segment
    pub highlighted: bool,
}

impl DiffSegment {
    /// Create a new segment
    pub fn new(text: impl Into<String>, highlighted: bool) -> Self {
        Self {
            text: text.into(),
            highlighted,
        }
    }
}

/// One display row pairing a (possibly absent) left line with a
/// (possibly absent) right line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffRow {
    /// The left line text (empty string when the left side is Empty)
    pub left: String,

    /// The right line text (empty string when the right side is Empty)
    pub right: String,

    /// Classification of the left side
    pub left_kind: DiffKind,

    /// Classification of the right side
    pub right_kind: DiffKind,

    /// 1-based line number on the left side, 0 when the side is Empty
    pub left_line: usize,

    /// 1-based line number on the right side, 0 when the side is Empty
    pub right_line: usize,

    /// Ordered segments covering the left text exactly
    pub left_segments: Vec<DiffSegment>,

    /// Ordered segments covering the right text exactly
    pub right_segments: Vec<DiffSegment>,
}

impl DiffRow {
    /// Check if this row represents any change
    pub fn has_changes(&self) -> bool {
        self.left_kind != DiffKind::Same || self.right_kind != DiffKind::Same
    }

    /// Check if this row is a paired line change
    pub fn is_changed_pair(&self) -> bool {
        self.left_kind == DiffKind::Changed && self.right_kind == DiffKind::Changed
    }

    /// Check if any segment on either side is highlighted
    pub fn has_highlight(&self) -> bool {
        self.left_segments.iter().any(|s| s.highlighted)
            || self.right_segments.iter().any(|s| s.highlighted)
    }

    /// Concatenation of the left segment texts
    pub fn left_segment_text(&self) -> String {
        self.left_segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Concatenation of the right segment texts
    pub fn right_segment_text(&self) -> String {
        self.right_segments
            .iter()
            .map(|s| s.text.as_str())
            .collect()
    }
}
