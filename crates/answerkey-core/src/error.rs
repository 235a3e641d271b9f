//! Generation error types.
//!
//! Parsing is lenient and never fails, so the only domain error is a bad
//! error ceiling, from either the command line or the config file.
//! File-system failures are reported through `anyhow` at the call sites
//! that touch the disk.

use thiserror::Error;

/// Errors that stop a generation run before any student is processed.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The max-errors value was not a non-negative integer.
    #[error("invalid max errors value: '{0}' (expected a non-negative integer)")]
    MalformedMaxErrors(String),
}

/// Parse a user-supplied max-errors value.
///
/// Surrounding whitespace is ignored; anything else that is not a
/// non-negative integer is rejected.
pub fn parse_max_errors(raw: &str) -> Result<u32, QuizError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| QuizError::MalformedMaxErrors(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_max_errors("0").unwrap(), 0);
        assert_eq!(parse_max_errors(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        for bad in ["-1", "abc", "", "2.5"] {
            let err = parse_max_errors(bad).unwrap_err();
            assert!(matches!(err, QuizError::MalformedMaxErrors(_)));
        }
    }

    #[test]
    fn error_message_names_the_value() {
        let err = parse_max_errors("lots").unwrap_err();
        assert!(err.to_string().contains("'lots'"));
    }
}
