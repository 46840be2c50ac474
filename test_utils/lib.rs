use csv::Reader;
use std::error::Error;
use word_error_rate::WordOutput;

pub mod constants;
use constants::RATE_TOLERANCE;

/// Expected word measures. WIP is derived from WIL.
#[derive(Debug, Clone, Copy)]
pub struct ExpectedMeasures {
    pub wer: f64,
    pub mer: f64,
    pub wip: f64,
    pub wil: f64,
}

/// Builds expected measures from WER, MER and WIL, with `wip = 1 - wil`.
pub fn all_m(wer: f64, mer: f64, wil: f64) -> ExpectedMeasures {
    ExpectedMeasures {
        wer,
        mer,
        wip: 1.0 - wil,
        wil,
    }
}

pub fn assert_almost_equal(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() < RATE_TOLERANCE,
        "{}: expected {}, got {}",
        label,
        expected,
        actual
    );
}

pub fn assert_measures_almost_equal(output: &WordOutput, expected: &ExpectedMeasures) {
    assert_almost_equal(output.wer, expected.wer, "wer");
    assert_almost_equal(output.mer, expected.mer, "mer");
    assert_almost_equal(output.wip, expected.wip, "wip");
    assert_almost_equal(output.wil, expected.wil, "wil");
}

/// Utility to load reference/hypothesis pairs from a CSV file for testing and benchmarking.
pub fn load_sentence_pairs_from_file(
    file_path: &str,
) -> Result<(Vec<String>, Vec<String>), Box<dyn Error>> {
    let mut references = Vec::new();
    let mut hypotheses = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            references.push(record[0].to_string());
            hypotheses.push(record[1].to_string());
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok((references, hypotheses))
}
