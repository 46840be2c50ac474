use crate::utils::safe_ratio;
use crate::{CostWeights, Error, OperationCounts};

/// Word-level rates derived from one set of operation counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordMeasures {
    pub wer: f64,
    pub mer: f64,
    pub wip: f64,
    pub wil: f64,
}

/// Turns (aggregated) operation counts into error rates.
///
/// WER and CER weight every operation by its cost and divide by the reference length.
/// MER, WIP and WIL use the raw, unweighted counts so that they keep their usual meaning
/// regardless of the configured weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricCalculator {
    weights: CostWeights,
}

impl MetricCalculator {
    pub fn new(weights: CostWeights) -> Self {
        MetricCalculator { weights }
    }

    /// Computes WER, MER, WIP and WIL.
    ///
    /// # Errors
    /// Returns `Error::DegenerateDenominator` if the reference is empty while the
    /// hypothesis is not (WER has no finite value in that case).
    pub fn compute(&self, counts: &OperationCounts) -> Result<WordMeasures, Error> {
        let wer = self.error_rate(counts)?;
        let mer = Self::match_error_rate(counts)?;
        let wip = Self::word_information_preserved(counts)?;

        Ok(WordMeasures {
            wer,
            mer,
            wip,
            wil: 1.0 - wip,
        })
    }

    /// Weighted edit cost over the reference length. This is WER on word tokens and CER
    /// on character tokens.
    pub fn error_rate(&self, counts: &OperationCounts) -> Result<f64, Error> {
        safe_ratio(
            self.weights.weighted_errors(counts),
            counts.reference_len() as f64,
            "error rate",
        )
    }

    /// `(S + D + I) / (H + S + D + I)`
    pub fn match_error_rate(counts: &OperationCounts) -> Result<f64, Error> {
        safe_ratio(counts.errors() as f64, counts.total() as f64, "match error rate")
    }

    /// `(H / N) * (H / (H + S + I))`, or zero when either side has no tokens.
    pub fn word_information_preserved(counts: &OperationCounts) -> Result<f64, Error> {
        let hits = counts.hits as f64;

        let reference_ratio = safe_ratio(
            hits,
            counts.reference_len() as f64,
            "word information preserved",
        )?;
        let hypothesis_ratio = safe_ratio(
            hits,
            counts.hypothesis_len() as f64,
            "word information preserved",
        )?;

        Ok(reference_ratio * hypothesis_ratio)
    }
}
