use crate::constants::{HYPOTHESIS_CSV_HEADER, REFERENCE_CSV_HEADER};
use crate::types::Sentence;
use crate::Error;
use csv::ReaderBuilder;
use std::io::Cursor;

/// Reads reference/hypothesis sentence pairs from CSV text.
///
/// The CSV must have a header row naming a `reference` and a `hypothesis` column (in any
/// order; other columns are ignored). Each record becomes one sentence pair.
///
/// # Errors
/// Returns `Error::ParserError` if the headers are missing or a record cannot be read.
pub fn read_sentence_pairs_from_string(
    csv: &str,
) -> Result<(Vec<Sentence>, Vec<Sentence>), Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(csv));

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
    };

    let reference_idx = column(REFERENCE_CSV_HEADER)?;
    let hypothesis_idx = column(HYPOTHESIS_CSV_HEADER)?;

    let mut references = Vec::new();
    let mut hypotheses = Vec::new();

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        // Fields are positional, so a short record is a parse error rather than an empty sentence
        let reference = record.get(reference_idx).ok_or_else(|| {
            Error::ParserError(format!("Missing '{}' field", REFERENCE_CSV_HEADER))
        })?;
        let hypothesis = record.get(hypothesis_idx).ok_or_else(|| {
            Error::ParserError(format!("Missing '{}' field", HYPOTHESIS_CSV_HEADER))
        })?;

        references.push(reference.to_string());
        hypotheses.push(hypothesis.to_string());
    }

    Ok((references, hypotheses))
}
