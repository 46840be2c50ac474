use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::{assert_almost_equal, load_sentence_pairs_from_file};
use word_error_rate::utils::read_sentence_pairs_from_string;
use word_error_rate::{
    edit_vector, process_words, process_words_with_custom_config, MeasureConfig, OperationCounts,
    Tokenizer, DEFAULT_COST_WEIGHTS,
};

fn corpus_path() -> String {
    format!("{}/sentence_pairs.csv", TEST_FILES_DIRECTORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmented_corpus() {
        let (references, hypotheses) =
            load_sentence_pairs_from_file(&corpus_path()).expect("Failed to load corpus");

        let output = process_words(references, hypotheses).unwrap();

        // ("i like monthy python", "i like"): 2 hits, 2 deletions
        // ("what do you mean african or european swallow", "python"): 1 substitution, 7 deletions
        assert_eq!(
            output.counts,
            OperationCounts {
                hits: 2,
                substitutions: 1,
                deletions: 9,
                insertions: 0,
            }
        );
        assert_almost_equal(output.wer, (0.2 + 9.0 * 0.4) / 12.0, "wer");
        assert_almost_equal(output.mer, 10.0 / 12.0, "mer");
        assert_eq!(output.alignments.len(), 2);
        assert_eq!(edit_vector(&output.alignments[0]), "==DD");
    }

    #[test]
    fn test_contiguous_corpus_matches_pre_joined_text() {
        let (references, hypotheses) =
            load_sentence_pairs_from_file(&corpus_path()).expect("Failed to load corpus");
        let config = MeasureConfig::new(DEFAULT_COST_WEIGHTS, Tokenizer::word_parser_contiguous());

        let contiguous =
            process_words_with_custom_config(&config, references.clone(), hypotheses.clone())
                .unwrap();
        let pre_joined = process_words(references.join(" "), hypotheses.join(" ")).unwrap();

        assert_eq!(contiguous.counts, pre_joined.counts);
        assert_almost_equal(contiguous.wer, pre_joined.wer, "wer");
        assert_almost_equal(contiguous.mer, pre_joined.mer, "mer");
        assert_almost_equal(contiguous.wil, pre_joined.wil, "wil");
    }

    #[test]
    fn test_library_csv_reader_matches_file_loader() {
        let csv = std::fs::read_to_string(corpus_path()).expect("Failed to read corpus");

        let from_string = read_sentence_pairs_from_string(&csv).unwrap();
        let from_file = load_sentence_pairs_from_file(&corpus_path()).unwrap();

        assert_eq!(from_string, from_file);
    }

    #[test]
    fn test_report_from_csv() {
        let csv = std::fs::read_to_string(corpus_path()).expect("Failed to read corpus");
        let (references, hypotheses) = read_sentence_pairs_from_string(&csv).unwrap();

        let report = process_words(references, hypotheses).unwrap().to_string();

        assert_eq!(
            report,
            "wer=0.3167\n\
             mer=0.8333\n\
             wip=0.1111\n\
             wil=0.8889\n\
             number of hits: 2\n\
             number of substitutions: 1\n\
             number of deletions: 9\n\
             number of insertions: 0"
        );
    }

    #[test]
    fn test_counts_cover_every_token() {
        let (references, hypotheses) =
            load_sentence_pairs_from_file(&corpus_path()).expect("Failed to load corpus");

        let output = process_words(references, hypotheses).unwrap();

        let reference_tokens: usize = output.references.iter().map(Vec::len).sum();
        let hypothesis_tokens: usize = output.hypotheses.iter().map(Vec::len).sum();

        assert_eq!(output.counts.reference_len(), reference_tokens);
        assert_eq!(output.counts.hypothesis_len(), hypothesis_tokens);
    }
}
