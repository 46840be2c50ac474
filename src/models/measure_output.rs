use crate::types::{PairAlignments, TokenSequence};
use crate::OperationCounts;
use std::fmt;

/// Word-level rates together with the counts and alignments that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct WordOutput {
    pub wer: f64,
    pub mer: f64,
    pub wip: f64,
    pub wil: f64,
    pub counts: OperationCounts,
    /// Tokenized references, one sequence per aligned pair.
    pub references: Vec<TokenSequence>,
    /// Tokenized hypotheses, one sequence per aligned pair.
    pub hypotheses: Vec<TokenSequence>,
    pub alignments: PairAlignments,
}

/// Character error rate together with the counts and alignments that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterOutput {
    pub cer: f64,
    pub counts: OperationCounts,
    pub references: Vec<TokenSequence>,
    pub hypotheses: Vec<TokenSequence>,
    pub alignments: PairAlignments,
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &OperationCounts) -> fmt::Result {
    writeln!(f, "number of hits: {}", counts.hits)?;
    writeln!(f, "number of substitutions: {}", counts.substitutions)?;
    writeln!(f, "number of deletions: {}", counts.deletions)?;
    write!(f, "number of insertions: {}", counts.insertions)
}

impl fmt::Display for WordOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "wer={:.4}", self.wer)?;
        writeln!(f, "mer={:.4}", self.mer)?;
        writeln!(f, "wip={:.4}", self.wip)?;
        writeln!(f, "wil={:.4}", self.wil)?;
        write_counts(f, &self.counts)
    }
}

impl fmt::Display for CharacterOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cer={:.4}", self.cer)?;
        write_counts(f, &self.counts)
    }
}

#[cfg(test)]
mod tests {
    use crate::{process_characters, process_words};

    #[test]
    fn test_word_report() {
        let output = process_words("X Y X", "X Z").unwrap();

        assert_eq!(
            output.to_string(),
            "wer=0.2000\n\
             mer=0.6667\n\
             wip=0.1667\n\
             wil=0.8333\n\
             number of hits: 1\n\
             number of substitutions: 1\n\
             number of deletions: 1\n\
             number of insertions: 0"
        );
    }

    #[test]
    fn test_character_report() {
        let output = process_characters("X Y X", "X Z").unwrap();

        assert_eq!(
            output.to_string(),
            "cer=0.2000\n\
             number of hits: 2\n\
             number of substitutions: 1\n\
             number of deletions: 2\n\
             number of insertions: 0"
        );
    }
}
