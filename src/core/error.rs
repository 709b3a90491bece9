//! Error types for the logging library

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Argument was the empty string
    #[error("argument [{name}] must not be empty")]
    EmptyArgument { name: String },

    /// Argument contained only whitespace
    #[error("argument [{name}] must not be blank")]
    BlankArgument { name: String },

    /// Configuration name already registered
    #[error("loggers configuration with name [{name}] already exists")]
    DuplicateName { name: String },

    /// Pattern lacks the mandatory message-insertion token
    #[error("logging message pattern [{pattern}] must contain the [%MSG%] token")]
    MissingMessageToken { pattern: String },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Write attempted on an output that was already closed
    #[error("output '{name}' is closed")]
    OutputClosed { name: String },
}

impl LoggerError {
    /// Create an empty-argument error naming the offending argument
    pub fn empty_argument(name: impl Into<String>) -> Self {
        LoggerError::EmptyArgument { name: name.into() }
    }

    /// Create a blank-argument error naming the offending argument
    pub fn blank_argument(name: impl Into<String>) -> Self {
        LoggerError::BlankArgument { name: name.into() }
    }

    /// Create a duplicate-name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        LoggerError::DuplicateName { name: name.into() }
    }

    /// Create a missing-token error carrying the rejected pattern
    pub fn missing_message_token(pattern: impl Into<String>) -> Self {
        LoggerError::MissingMessageToken {
            pattern: pattern.into(),
        }
    }

    /// Create an IO error with operation context
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create an output-closed error
    pub fn output_closed(name: impl Into<String>) -> Self {
        LoggerError::OutputClosed { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::duplicate_name("app");
        assert!(matches!(err, LoggerError::DuplicateName { .. }));

        let err = LoggerError::blank_argument("aName");
        assert!(matches!(err, LoggerError::BlankArgument { .. }));

        let err = LoggerError::missing_message_token("%TIME% only");
        assert!(matches!(err, LoggerError::MissingMessageToken { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::duplicate_name("app");
        assert_eq!(
            err.to_string(),
            "loggers configuration with name [app] already exists"
        );

        let err = LoggerError::missing_message_token("%TIME%");
        assert_eq!(
            err.to_string(),
            "logging message pattern [%TIME%] must contain the [%MSG%] token"
        );

        let err = LoggerError::output_closed("/var/log/app.log");
        assert_eq!(err.to_string(), "output '/var/log/app.log' is closed");
    }

    #[test]
    fn test_empty_and_blank_are_distinct() {
        let empty = LoggerError::empty_argument("pattern");
        let blank = LoggerError::blank_argument("pattern");

        assert!(matches!(empty, LoggerError::EmptyArgument { .. }));
        assert!(matches!(blank, LoggerError::BlankArgument { .. }));
        assert_ne!(empty.to_string(), blank.to_string());
    }

    #[test]
    fn test_io_error_context() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io("opening log file '/var/log/app.log'", io_err);

        assert!(matches!(err, LoggerError::Io { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("access denied"));
    }
}
