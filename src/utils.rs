pub mod collapse_whitespace;
pub use collapse_whitespace::collapse_whitespace;

pub mod read_sentence_pairs;
pub use read_sentence_pairs::read_sentence_pairs_from_string;

pub mod safe_ratio;
pub use safe_ratio::safe_ratio;
