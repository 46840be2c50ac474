use crate::constants::SENTENCE_JOINER;
use crate::types::{Sentence, Token, TokenSequence};
use crate::utils::collapse_whitespace;

/// The unit a sentence is split into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenUnit {
    Word,
    Character,
}

/// Turns sentences into token sequences ready for alignment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    pub unit: TokenUnit,
    /// Replace every run of whitespace with a single space.
    pub collapse_whitespace: bool,
    /// Remove leading and trailing whitespace.
    pub strip: bool,
    /// Join all sentences into one before tokenizing, yielding exactly one sequence.
    pub contiguous: bool,
}

impl Tokenizer {
    /// Word tokens, one sequence per sentence
    pub const fn word_parser() -> Self {
        Self {
            unit: TokenUnit::Word,
            collapse_whitespace: true,
            strip: true,
            contiguous: false,
        }
    }

    /// Word tokens, all sentences concatenated into a single sequence
    pub const fn word_parser_contiguous() -> Self {
        Self {
            contiguous: true,
            ..Self::word_parser()
        }
    }

    /// Character tokens (spaces included), one sequence per sentence
    pub const fn character_parser() -> Self {
        Self {
            unit: TokenUnit::Character,
            collapse_whitespace: false,
            strip: true,
            contiguous: false,
        }
    }

    /// Character tokens (spaces included), all sentences concatenated into a single sequence
    pub const fn character_parser_contiguous() -> Self {
        Self {
            contiguous: true,
            ..Self::character_parser()
        }
    }

    /// Splits a single sentence into tokens.
    ///
    /// Note: This explicitly does not modify the case of the text.
    pub fn tokenize(self, sentence: &str) -> TokenSequence {
        let normalized = self.normalize(sentence);

        match self.unit {
            TokenUnit::Word => normalized.split_whitespace().map(Token::from).collect(),
            TokenUnit::Character => normalized.chars().map(Token::from).collect(),
        }
    }

    /// Tokenizes every sentence.
    ///
    /// In segmented mode the result holds one sequence per sentence, in order. In
    /// contiguous mode the (normalized, non-empty) sentences are joined with a single
    /// space first and the result holds exactly one sequence.
    pub fn transform(self, sentences: &[Sentence]) -> Vec<TokenSequence> {
        if !self.contiguous {
            return sentences
                .iter()
                .map(|sentence| self.tokenize(sentence))
                .collect();
        }

        let joined = sentences
            .iter()
            .map(|sentence| self.normalize(sentence))
            .filter(|sentence| !sentence.is_empty())
            .collect::<Vec<_>>()
            .join(SENTENCE_JOINER);

        vec![self.tokenize(&joined)]
    }

    fn normalize(self, sentence: &str) -> String {
        let collapsed = if self.collapse_whitespace {
            collapse_whitespace(sentence)
        } else {
            sentence.to_string()
        };

        if self.strip {
            collapsed.trim().to_string()
        } else {
            collapsed
        }
    }
}
