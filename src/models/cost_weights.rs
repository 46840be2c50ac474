use crate::config::DEFAULT_COST_WEIGHTS;
use crate::{Error, OperationCounts};
use std::fmt;

/// Edit costs used to select the minimum-cost alignment and to weight the error
/// rates (WER / CER). A match always costs zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostWeights {
    pub substitution: f64,
    pub deletion: f64,
    pub insertion: f64,
}

impl CostWeights {
    /// Creates a validated set of weights.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if any weight is negative, NaN or infinite. Zero
    /// weights are accepted.
    pub fn new(substitution: f64, deletion: f64, insertion: f64) -> Result<Self, Error> {
        let weights = CostWeights {
            substitution,
            deletion,
            insertion,
        };

        weights.validate()?;

        Ok(weights)
    }

    /// Classic Levenshtein costs, where every edit operation counts as one.
    pub fn unweighted() -> Self {
        CostWeights {
            substitution: 1.0,
            deletion: 1.0,
            insertion: 1.0,
        }
    }

    /// Checks the weights of a (possibly hand-built) configuration.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("substitution", self.substitution),
            ("deletion", self.deletion),
            ("insertion", self.insertion),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} weight must be a finite, non-negative number; got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Sums the cost of every edit operation in `counts`. Hits contribute nothing.
    pub fn weighted_errors(&self, counts: &OperationCounts) -> f64 {
        self.substitution * counts.substitutions as f64
            + self.deletion * counts.deletions as f64
            + self.insertion * counts.insertions as f64
    }
}

impl Default for CostWeights {
    fn default() -> Self {
        DEFAULT_COST_WEIGHTS
    }
}

impl fmt::Display for CostWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CostWeights (substitution: {}, deletion: {}, insertion: {})",
            self.substitution, self.deletion, self.insertion
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = CostWeights::default();

        assert_eq!(weights.substitution, 0.2);
        assert_eq!(weights.deletion, 0.4);
        assert_eq!(weights.insertion, 0.4);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let result = CostWeights::new(0.2, -0.4, 0.4);

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        assert!(CostWeights::new(f64::NAN, 0.4, 0.4).is_err());
        assert!(CostWeights::new(0.2, 0.4, f64::INFINITY).is_err());
    }

    #[test]
    fn test_accepts_zero_weight() {
        assert!(CostWeights::new(0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_weighted_errors() {
        let counts = OperationCounts {
            hits: 3,
            substitutions: 3,
            deletions: 0,
            insertions: 4,
        };

        let weighted = CostWeights::default().weighted_errors(&counts);

        assert!((weighted - 2.2).abs() < 1e-12);
    }
}
