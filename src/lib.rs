mod config;
pub use config::{
    DEFAULT_CHARACTER_MEASURE_CONFIG, DEFAULT_COST_WEIGHTS, DEFAULT_WORD_MEASURE_CONFIG,
};
mod constants;
pub use constants::SENTENCE_JOINER;
pub mod models;
pub use models::{
    edit_vector, AggregateResult, Aggregator, Alignment, AlignmentChunk, AlignmentEngine,
    CharacterOutput, CostWeights, EditOperation, Error, MeasureConfig, MetricCalculator,
    OperationCounts, SentenceInput, TokenUnit, Tokenizer, WordMeasures, WordOutput,
};
pub mod types;
pub use types::{PairAlignments, Sentence, Token, TokenIndex, TokenSequence};
pub mod utils;

use log::info;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Computes WER, MER, WIP and WIL between `reference` and `hypothesis` using the default
/// word tokenizer (one aligned pair per sentence) and the default cost weights.
///
/// Either side may be a single sentence or a list of sentences; a single sentence is
/// treated as a one-element list.
///
/// # Errors
/// * `Error::LengthMismatch` if both sides do not hold the same number of sentences.
/// * `Error::DegenerateDenominator` if the reference has no words while the hypothesis does.
///
/// # Example
/// ```
/// let output = word_error_rate::process_words("X Y X", "X Z").unwrap();
///
/// assert_eq!(output.counts.hits, 1);
/// assert_eq!(output.counts.substitutions, 1);
/// assert_eq!(output.counts.deletions, 1);
/// assert!((output.wer - 0.2).abs() < 1e-9);
/// ```
pub fn process_words(
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<WordOutput, Error> {
    process_words_with_custom_config(DEFAULT_WORD_MEASURE_CONFIG, reference, hypothesis)
}

/// Same as `process_words`, with custom weights and tokenizers.
pub fn process_words_with_custom_config(
    config: &MeasureConfig,
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<WordOutput, Error> {
    let (references, hypotheses) = tokenize_inputs(config, reference.into(), hypothesis.into())?;
    let aggregate = align_sequences(config, &references, &hypotheses)?;

    info!("Computing word measures...");
    let measures = MetricCalculator::new(config.weights).compute(&aggregate.counts)?;

    Ok(WordOutput {
        wer: measures.wer,
        mer: measures.mer,
        wip: measures.wip,
        wil: measures.wil,
        counts: aggregate.counts,
        references,
        hypotheses,
        alignments: aggregate.alignments,
    })
}

/// Computes the character error rate between `reference` and `hypothesis` using the
/// default character tokenizer (spaces count as characters) and the default cost weights.
///
/// # Errors
/// Same as `process_words`.
pub fn process_characters(
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<CharacterOutput, Error> {
    process_characters_with_custom_config(DEFAULT_CHARACTER_MEASURE_CONFIG, reference, hypothesis)
}

/// Same as `process_characters`, with custom weights and tokenizers.
pub fn process_characters_with_custom_config(
    config: &MeasureConfig,
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<CharacterOutput, Error> {
    let (references, hypotheses) = tokenize_inputs(config, reference.into(), hypothesis.into())?;
    let aggregate = align_sequences(config, &references, &hypotheses)?;

    info!("Computing character error rate...");
    let cer = MetricCalculator::new(config.weights).error_rate(&aggregate.counts)?;

    Ok(CharacterOutput {
        cer,
        counts: aggregate.counts,
        references,
        hypotheses,
        alignments: aggregate.alignments,
    })
}

/// Word error rate with the default configuration.
pub fn wer(
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<f64, Error> {
    Ok(process_words(reference, hypothesis)?.wer)
}

/// Match error rate with the default configuration.
pub fn mer(
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<f64, Error> {
    Ok(process_words(reference, hypothesis)?.mer)
}

/// Word information preserved with the default configuration.
pub fn wip(
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<f64, Error> {
    Ok(process_words(reference, hypothesis)?.wip)
}

/// Word information lost with the default configuration.
pub fn wil(
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<f64, Error> {
    Ok(process_words(reference, hypothesis)?.wil)
}

/// Character error rate with the default configuration.
pub fn cer(
    reference: impl Into<SentenceInput>,
    hypothesis: impl Into<SentenceInput>,
) -> Result<f64, Error> {
    Ok(process_characters(reference, hypothesis)?.cer)
}

fn tokenize_inputs(
    config: &MeasureConfig,
    reference: SentenceInput,
    hypothesis: SentenceInput,
) -> Result<(Vec<TokenSequence>, Vec<TokenSequence>), Error> {
    config.weights.validate()?;

    info!("Tokenizing...");
    let references = config
        .reference_tokenizer
        .transform(&reference.into_sentences());
    let hypotheses = config
        .hypothesis_tokenizer
        .transform(&hypothesis.into_sentences());

    Ok((references, hypotheses))
}

fn align_sequences(
    config: &MeasureConfig,
    references: &[TokenSequence],
    hypotheses: &[TokenSequence],
) -> Result<AggregateResult, Error> {
    info!("Aligning {} sentence pair(s)...", references.len());

    Aggregator::new(AlignmentEngine::new(config.weights)).aggregate(references, hypotheses)
}
