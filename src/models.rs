pub mod aggregator;
pub use aggregator::{AggregateResult, Aggregator};

pub mod alignment_chunk;
pub use alignment_chunk::{edit_vector, AlignmentChunk, EditOperation};

pub mod alignment_engine;
pub use alignment_engine::{Alignment, AlignmentEngine};

pub mod cost_weights;
pub use cost_weights::CostWeights;

pub mod error;
pub use error::Error;

pub mod measure_config;
pub use measure_config::MeasureConfig;

pub mod measure_output;
pub use measure_output::{CharacterOutput, WordOutput};

pub mod metric_calculator;
pub use metric_calculator::{MetricCalculator, WordMeasures};

pub mod operation_counts;
pub use operation_counts::OperationCounts;

pub mod sentence_input;
pub use sentence_input::SentenceInput;

pub mod tokenizer;
pub use tokenizer::{TokenUnit, Tokenizer};
