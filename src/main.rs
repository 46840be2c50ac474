use clap::Parser;
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use word_error_rate::utils::read_sentence_pairs_from_string;
use word_error_rate::{
    process_characters_with_custom_config, process_words_with_custom_config, Error, MeasureConfig,
    Tokenizer, DEFAULT_COST_WEIGHTS,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// CSV file with `reference` and `hypothesis` columns.
    csv_path: PathBuf,

    /// Report the character error rate instead of word measures.
    #[arg(long)]
    characters: bool,

    /// Align all sentences as one concatenated text per side.
    #[arg(long)]
    contiguous: bool,
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();

    match report(&args) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            error!("Error computing error rates: {}", e);
            std::process::exit(1);
        }
    }
}

fn report(args: &Args) -> Result<String, Error> {
    let csv = fs::read_to_string(&args.csv_path)?;
    let (references, hypotheses) = read_sentence_pairs_from_string(&csv)?;

    info!(
        "Loaded {} sentence pair(s) from {}",
        references.len(),
        args.csv_path.display()
    );

    let tokenizer = match (args.characters, args.contiguous) {
        (false, false) => Tokenizer::word_parser(),
        (false, true) => Tokenizer::word_parser_contiguous(),
        (true, false) => Tokenizer::character_parser(),
        (true, true) => Tokenizer::character_parser_contiguous(),
    };
    let config = MeasureConfig::new(DEFAULT_COST_WEIGHTS, tokenizer);

    info!("Using {}", config.weights);

    let report = if args.characters {
        process_characters_with_custom_config(&config, references, hypotheses)?.to_string()
    } else {
        process_words_with_custom_config(&config, references, hypotheses)?.to_string()
    };

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = "tests/test_files/sentence_pairs.csv";

    #[test]
    fn test_word_report_from_csv() {
        let args = Args::parse_from(["wer-cli", CORPUS]);

        let report = report(&args).unwrap();

        assert!(report.starts_with("wer=0.3167\n"));
        assert!(report.contains("number of hits: 2\n"));
        assert!(report.contains("number of deletions: 9\n"));
    }

    #[test]
    fn test_flags_are_parsed() {
        let args = Args::parse_from(["wer-cli", "--characters", "--contiguous", CORPUS]);

        assert!(args.characters);
        assert!(args.contiguous);
        assert_eq!(args.csv_path, PathBuf::from(CORPUS));
    }

    #[test]
    fn test_misspelled_flag_is_rejected() {
        let result = Args::try_parse_from(["wer-cli", "--contigous", CORPUS]);

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let args = Args::parse_from(["wer-cli", "tests/test_files/missing.csv"]);

        assert!(matches!(report(&args), Err(Error::IoError(_))));
    }
}
