/// Separator inserted between sentences when a tokenizer runs in contiguous mode.
pub const SENTENCE_JOINER: &str = " ";

/// Column header holding the reference sentence in a sentence pair CSV.
pub const REFERENCE_CSV_HEADER: &str = "reference";

/// Column header holding the hypothesis sentence in a sentence pair CSV.
pub const HYPOTHESIS_CSV_HEADER: &str = "hypothesis";
