use crate::types::TokenIndex;
use std::fmt;

/// The outcome of aligning one reference position against one hypothesis position, or
/// against a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOperation {
    Equal,
    Substitute,
    Delete,
    Insert,
}

impl EditOperation {
    /// Single character label, as used in edit vectors (e.g. `"==S=D"`).
    pub fn as_char(&self) -> char {
        match self {
            EditOperation::Equal => '=',
            EditOperation::Substitute => 'S',
            EditOperation::Delete => 'D',
            EditOperation::Insert => 'I',
        }
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditOperation::Equal => "equal",
            EditOperation::Substitute => "substitute",
            EditOperation::Delete => "delete",
            EditOperation::Insert => "insert",
        };

        write!(f, "{}", name)
    }
}

/// A run of consecutive alignment steps sharing the same operation.
///
/// Index ranges are half-open. A deletion chunk has an empty hypothesis range and an
/// insertion chunk has an empty reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentChunk {
    pub op: EditOperation,
    pub ref_start_idx: TokenIndex,
    pub ref_end_idx: TokenIndex,
    pub hyp_start_idx: TokenIndex,
    pub hyp_end_idx: TokenIndex,
}

impl AlignmentChunk {
    /// Number of alignment steps covered by this chunk.
    pub fn len(&self) -> usize {
        (self.ref_end_idx - self.ref_start_idx).max(self.hyp_end_idx - self.hyp_start_idx)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders chunks as a flat edit vector with one character per alignment step.
pub fn edit_vector(chunks: &[AlignmentChunk]) -> String {
    chunks
        .iter()
        .flat_map(|chunk| std::iter::repeat(chunk.op.as_char()).take(chunk.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_vector() {
        let chunks = vec![
            AlignmentChunk {
                op: EditOperation::Equal,
                ref_start_idx: 0,
                ref_end_idx: 2,
                hyp_start_idx: 0,
                hyp_end_idx: 2,
            },
            AlignmentChunk {
                op: EditOperation::Delete,
                ref_start_idx: 2,
                ref_end_idx: 3,
                hyp_start_idx: 2,
                hyp_end_idx: 2,
            },
        ];

        assert_eq!(edit_vector(&chunks), "==D");
    }
}
