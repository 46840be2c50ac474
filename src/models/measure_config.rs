use crate::{CostWeights, Tokenizer};

/// Everything a measurement needs besides its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureConfig {
    pub weights: CostWeights,
    pub reference_tokenizer: Tokenizer,
    pub hypothesis_tokenizer: Tokenizer,
}

impl MeasureConfig {
    /// Uses the same tokenizer for both sides.
    pub fn new(weights: CostWeights, tokenizer: Tokenizer) -> Self {
        MeasureConfig {
            weights,
            reference_tokenizer: tokenizer,
            hypothesis_tokenizer: tokenizer,
        }
    }
}
