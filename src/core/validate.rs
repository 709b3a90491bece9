//! Precondition checks for identifiers and pattern strings

use super::error::{LoggerError, Result};

/// Reject empty and whitespace-only strings.
///
/// `what` names the argument in the resulting error, so callers can report
/// which input was rejected. Empty and blank inputs fail with distinct errors.
pub fn identifier(value: &str, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(LoggerError::empty_argument(what));
    }
    if value.trim().is_empty() {
        return Err(LoggerError::blank_argument(what));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;

    #[test]
    fn test_accepts_regular_identifier() {
        assert!(identifier("app", "name").is_ok());
        assert!(identifier("  padded  ", "name").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = identifier("", "name").unwrap_err();
        assert!(matches!(err, LoggerError::EmptyArgument { name } if name == "name"));
    }

    #[test]
    fn test_rejects_blank() {
        let err = identifier("   \t", "pattern").unwrap_err();
        assert!(matches!(err, LoggerError::BlankArgument { name } if name == "pattern"));
    }
}
