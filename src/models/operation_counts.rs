use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Hit, substitution, deletion and insertion counts for one aligned
/// reference/hypothesis pair, or summed over many pairs.
///
/// For a single pair, `hits + substitutions + deletions` equals the reference length and
/// `hits + substitutions + insertions` equals the hypothesis length. Both identities
/// survive summation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OperationCounts {
    pub hits: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl OperationCounts {
    /// Number of reference tokens covered by these counts (`H + S + D`).
    pub fn reference_len(&self) -> usize {
        self.hits + self.substitutions + self.deletions
    }

    /// Number of hypothesis tokens covered by these counts (`H + S + I`).
    pub fn hypothesis_len(&self) -> usize {
        self.hits + self.substitutions + self.insertions
    }

    /// Unweighted number of edit operations (`S + D + I`).
    pub fn errors(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    /// Number of aligned slots (`H + S + D + I`).
    pub fn total(&self) -> usize {
        self.hits + self.substitutions + self.deletions + self.insertions
    }
}

impl Add for OperationCounts {
    type Output = OperationCounts;

    fn add(self, other: OperationCounts) -> OperationCounts {
        OperationCounts {
            hits: self.hits + other.hits,
            substitutions: self.substitutions + other.substitutions,
            deletions: self.deletions + other.deletions,
            insertions: self.insertions + other.insertions,
        }
    }
}

impl AddAssign for OperationCounts {
    fn add_assign(&mut self, other: OperationCounts) {
        *self = *self + other;
    }
}

impl Sum for OperationCounts {
    fn sum<I: Iterator<Item = OperationCounts>>(iter: I) -> OperationCounts {
        iter.fold(OperationCounts::default(), |acc, counts| acc + counts)
    }
}
