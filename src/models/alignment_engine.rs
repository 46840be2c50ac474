use crate::{AlignmentChunk, CostWeights, EditOperation, OperationCounts};

/// The move which produced the minimum cost at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Origin,
    /// Match or substitution.
    Diagonal,
    /// Deletion of a reference token.
    Vertical,
    /// Insertion of a hypothesis token.
    Horizontal,
}

/// Result of aligning one reference sequence against one hypothesis sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub counts: OperationCounts,
    /// Left-to-right runs of identical operations.
    pub chunks: Vec<AlignmentChunk>,
}

/// Weighted Levenshtein aligner.
///
/// Fills a `(|ref| + 1) x (|hyp| + 1)` cost grid, remembering at every cell which move
/// achieved the minimum, then walks back from the bottom-right corner to count hits,
/// substitutions, deletions and insertions.
///
/// When several moves reach the same minimal cost the diagonal move wins, then the
/// vertical (deletion) move, then the horizontal (insertion) move. This order decides
/// which of several equal-cost alignments is reported, so counts stay reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlignmentEngine {
    weights: CostWeights,
}

impl AlignmentEngine {
    pub fn new(weights: CostWeights) -> Self {
        AlignmentEngine { weights }
    }

    /// Aligns `hypothesis` against `reference` and returns the operation counts together
    /// with the merged alignment chunks. Either sequence may be empty.
    pub fn align<T: PartialEq>(&self, reference: &[T], hypothesis: &[T]) -> Alignment {
        let cols = hypothesis.len() + 1;
        let moves = self.fill_moves(reference, hypothesis);

        // Walk back from the bottom-right corner, collecting operations in reverse
        let mut operations = Vec::with_capacity(reference.len() + hypothesis.len());
        let mut counts = OperationCounts::default();
        let (mut i, mut j) = (reference.len(), hypothesis.len());

        while i > 0 || j > 0 {
            match moves[i * cols + j] {
                Move::Diagonal => {
                    if reference[i - 1] == hypothesis[j - 1] {
                        counts.hits += 1;
                        operations.push(EditOperation::Equal);
                    } else {
                        counts.substitutions += 1;
                        operations.push(EditOperation::Substitute);
                    }
                    i -= 1;
                    j -= 1;
                }
                Move::Vertical => {
                    counts.deletions += 1;
                    operations.push(EditOperation::Delete);
                    i -= 1;
                }
                Move::Horizontal => {
                    counts.insertions += 1;
                    operations.push(EditOperation::Insert);
                    j -= 1;
                }
                Move::Origin => break,
            }
        }

        operations.reverse();

        Alignment {
            counts,
            chunks: Self::collect_chunks(&operations),
        }
    }

    /// Same as `align`, without building alignment chunks for the caller.
    pub fn count<T: PartialEq>(&self, reference: &[T], hypothesis: &[T]) -> OperationCounts {
        self.align(reference, hypothesis).counts
    }

    /// Runs the dynamic program and returns the winning move for every cell, row-major.
    fn fill_moves<T: PartialEq>(&self, reference: &[T], hypothesis: &[T]) -> Vec<Move> {
        let rows = reference.len() + 1;
        let cols = hypothesis.len() + 1;
        let weights = &self.weights;

        let mut costs = vec![0.0f64; rows * cols];
        let mut moves = vec![Move::Origin; rows * cols];

        // Boundary column: everything deleted
        for i in 1..rows {
            costs[i * cols] = i as f64 * weights.deletion;
            moves[i * cols] = Move::Vertical;
        }

        // Boundary row: everything inserted
        for j in 1..cols {
            costs[j] = j as f64 * weights.insertion;
            moves[j] = Move::Horizontal;
        }

        for i in 1..rows {
            for j in 1..cols {
                let substitution_cost = if reference[i - 1] == hypothesis[j - 1] {
                    0.0
                } else {
                    weights.substitution
                };

                let diagonal = costs[(i - 1) * cols + (j - 1)] + substitution_cost;
                let vertical = costs[(i - 1) * cols + j] + weights.deletion;
                let horizontal = costs[i * cols + (j - 1)] + weights.insertion;

                let (cost, step) = if diagonal <= vertical && diagonal <= horizontal {
                    (diagonal, Move::Diagonal)
                } else if vertical <= horizontal {
                    (vertical, Move::Vertical)
                } else {
                    (horizontal, Move::Horizontal)
                };

                costs[i * cols + j] = cost;
                moves[i * cols + j] = step;
            }
        }

        moves
    }

    /// Merges consecutive identical operations into index-range chunks.
    fn collect_chunks(operations: &[EditOperation]) -> Vec<AlignmentChunk> {
        let mut chunks: Vec<AlignmentChunk> = Vec::new();
        let (mut ref_idx, mut hyp_idx) = (0, 0);

        for &op in operations {
            let (ref_step, hyp_step) = match op {
                EditOperation::Equal | EditOperation::Substitute => (1, 1),
                EditOperation::Delete => (1, 0),
                EditOperation::Insert => (0, 1),
            };

            match chunks.last_mut() {
                Some(chunk) if chunk.op == op => {
                    chunk.ref_end_idx += ref_step;
                    chunk.hyp_end_idx += hyp_step;
                }
                _ => chunks.push(AlignmentChunk {
                    op,
                    ref_start_idx: ref_idx,
                    ref_end_idx: ref_idx + ref_step,
                    hyp_start_idx: hyp_idx,
                    hyp_end_idx: hyp_idx + hyp_step,
                }),
            }

            ref_idx += ref_step;
            hyp_idx += hyp_step;
        }

        chunks
    }
}
