// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. A token is either a single word or a single
/// character, depending on the `Tokenizer` which produced it.
pub type Token = String;

/// An ordered, possibly empty, sequence of tokens representing one sentence (or one
/// concatenated corpus when tokenized in contiguous mode).
pub type TokenSequence = Vec<Token>;

/// Represents a raw, untokenized sentence as an owned `String`.
pub type Sentence = String;

/// The index of a token within a `TokenSequence`.
pub type TokenIndex = usize;

/// Alignment chunks for every processed reference/hypothesis pair, in pair order.
pub type PairAlignments = Vec<Vec<crate::AlignmentChunk>>;
