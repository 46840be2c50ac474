use crate::types::{PairAlignments, TokenSequence};
use crate::{AlignmentEngine, Error, OperationCounts};

use log::debug;

/// Operation counts summed over every aligned pair, plus the per-pair alignments.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub counts: OperationCounts,
    pub alignments: PairAlignments,
}

/// Aligns every reference/hypothesis pair and sums the resulting counts.
///
/// Pairs are independent, so the order in which they are processed has no effect on the
/// summed counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    engine: AlignmentEngine,
}

impl Aggregator {
    pub fn new(engine: AlignmentEngine) -> Self {
        Aggregator { engine }
    }

    /// Aligns `references[i]` against `hypotheses[i]` for every `i`.
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` if the two lists differ in length. The check runs
    /// before any alignment work.
    pub fn aggregate(
        &self,
        references: &[TokenSequence],
        hypotheses: &[TokenSequence],
    ) -> Result<AggregateResult, Error> {
        if references.len() != hypotheses.len() {
            return Err(Error::LengthMismatch {
                references: references.len(),
                hypotheses: hypotheses.len(),
            });
        }

        let mut counts = OperationCounts::default();
        let mut alignments = Vec::with_capacity(references.len());

        for (pair_idx, (reference, hypothesis)) in references.iter().zip(hypotheses).enumerate() {
            let alignment = self.engine.align(reference, hypothesis);

            debug!(
                "Pair {}: {} reference / {} hypothesis tokens -> {:?}",
                pair_idx,
                reference.len(),
                hypothesis.len(),
                alignment.counts
            );

            counts += alignment.counts;
            alignments.push(alignment.chunks);
        }

        debug!(
            "Aggregated {} pair(s): N = {}, {:?}",
            references.len(),
            counts.reference_len(),
            counts
        );

        Ok(AggregateResult { counts, alignments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequences(sentences: &[&str]) -> Vec<TokenSequence> {
        sentences
            .iter()
            .map(|s| s.split_whitespace().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let aggregator = Aggregator::default();
        let references = sequences(&["hello", "this", "sentence", "is fractured"]);
        let hypotheses = sequences(&["this sentence"]);

        let result = aggregator.aggregate(&references, &hypotheses);

        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                references: 4,
                hypotheses: 1
            })
        ));
    }

    #[test]
    fn test_sums_counts_over_pairs() {
        let aggregator = Aggregator::default();
        let references = sequences(&["i", "am i good"]);
        let hypotheses = sequences(&["i am", "i good"]);

        let result = aggregator.aggregate(&references, &hypotheses).unwrap();

        assert_eq!(
            result.counts,
            OperationCounts {
                hits: 3,
                substitutions: 0,
                deletions: 1,
                insertions: 1,
            }
        );
        assert_eq!(result.alignments.len(), 2);
    }

    #[test]
    fn test_permutation_invariance() {
        let aggregator = Aggregator::default();

        let forward = aggregator
            .aggregate(
                &sequences(&["i", "am i good"]),
                &sequences(&["i am", "i good"]),
            )
            .unwrap();
        let backward = aggregator
            .aggregate(
                &sequences(&["am i good", "i"]),
                &sequences(&["i good", "i am"]),
            )
            .unwrap();

        assert_eq!(forward.counts, backward.counts);
    }

    #[test]
    fn test_no_pairs() {
        let aggregator = Aggregator::default();

        let result = aggregator.aggregate(&[], &[]).unwrap();

        assert_eq!(result.counts, OperationCounts::default());
        assert!(result.alignments.is_empty());
    }
}
