use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Reference and hypothesis do not contain the same number of sentences.
    LengthMismatch {
        references: usize,
        hypotheses: usize,
    },
    /// A rate was requested whose denominator is zero while its numerator is not.
    DegenerateDenominator(String),
    InvalidConfig(String),
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LengthMismatch {
                references,
                hypotheses,
            } => write!(
                f,
                "Length Mismatch Error: {} reference sentence(s) but {} hypothesis sentence(s)",
                references, hypotheses
            ),
            Error::DegenerateDenominator(msg) => write!(f, "Degenerate Denominator Error: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid Config Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = Error::LengthMismatch {
            references: 4,
            hypotheses: 1,
        };

        assert_eq!(
            err.to_string(),
            "Length Mismatch Error: 4 reference sentence(s) but 1 hypothesis sentence(s)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();

        assert!(matches!(err, Error::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
