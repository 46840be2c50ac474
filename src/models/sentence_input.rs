use crate::types::Sentence;

/// Raw input for one side (reference or hypothesis) of a comparison.
///
/// A single sentence is treated as a one-element list, so both variants reach the
/// tokenizer as a list of sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceInput {
    SingleSentence(Sentence),
    SentenceList(Vec<Sentence>),
}

impl SentenceInput {
    /// Normalizes the input into an ordered list of sentences.
    pub fn into_sentences(self) -> Vec<Sentence> {
        match self {
            SentenceInput::SingleSentence(sentence) => vec![sentence],
            SentenceInput::SentenceList(sentences) => sentences,
        }
    }
}

impl From<&str> for SentenceInput {
    fn from(sentence: &str) -> Self {
        SentenceInput::SingleSentence(sentence.to_string())
    }
}

impl From<String> for SentenceInput {
    fn from(sentence: String) -> Self {
        SentenceInput::SingleSentence(sentence)
    }
}

impl From<&String> for SentenceInput {
    fn from(sentence: &String) -> Self {
        SentenceInput::SingleSentence(sentence.clone())
    }
}

impl From<Vec<String>> for SentenceInput {
    fn from(sentences: Vec<String>) -> Self {
        SentenceInput::SentenceList(sentences)
    }
}

impl From<&[String]> for SentenceInput {
    fn from(sentences: &[String]) -> Self {
        SentenceInput::SentenceList(sentences.to_vec())
    }
}

impl From<Vec<&str>> for SentenceInput {
    fn from(sentences: Vec<&str>) -> Self {
        SentenceInput::SentenceList(sentences.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for SentenceInput {
    fn from(sentences: &[&str]) -> Self {
        SentenceInput::SentenceList(sentences.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SentenceInput {
    fn from(sentences: [&str; N]) -> Self {
        SentenceInput::SentenceList(sentences.iter().map(|s| s.to_string()).collect())
    }
}
