use crate::models::{CostWeights, MeasureConfig, Tokenizer};

pub const DEFAULT_COST_WEIGHTS: CostWeights = CostWeights {
    substitution: 0.2,
    deletion: 0.4,
    insertion: 0.4,
};

pub const DEFAULT_WORD_MEASURE_CONFIG: &MeasureConfig = &MeasureConfig {
    weights: DEFAULT_COST_WEIGHTS,
    reference_tokenizer: Tokenizer::word_parser(),
    hypothesis_tokenizer: Tokenizer::word_parser(),
};

pub const DEFAULT_CHARACTER_MEASURE_CONFIG: &MeasureConfig = &MeasureConfig {
    weights: DEFAULT_COST_WEIGHTS,
    reference_tokenizer: Tokenizer::character_parser(),
    hypothesis_tokenizer: Tokenizer::character_parser(),
};
