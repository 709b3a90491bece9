//! Logging message patterns

use super::error::{LoggerError, Result};
use super::validate;
use std::fmt;

/// Token marking the message-insertion point. Every pattern must contain it.
pub const MSG_TOKEN: &str = "%MSG%";

/// A validated logging message pattern.
///
/// Construction rejects empty or blank strings and patterns that lack the
/// [`MSG_TOKEN`]. A configuration's pattern is fixed at construction time; the
/// first `%MSG%` occurrence is the substitution point for the message body.
///
/// # Examples
///
/// ```
/// use patternlog::MessagePattern;
///
/// let pattern = MessagePattern::new("%TIME% [%LEVEL%] %NAME%: %MSG%").unwrap();
/// assert!(MessagePattern::new("%TIME% no insertion point").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePattern(String);

impl MessagePattern {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        validate::identifier(&pattern, "pattern")?;
        if !pattern.contains(MSG_TOKEN) {
            return Err(LoggerError::missing_message_token(pattern));
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Substitute the message body into the first `%MSG%` occurrence of an already
/// decorated pattern.
///
/// Runs after every modifier, so placeholder-looking text inside the message
/// body is never rewritten.
#[must_use]
pub fn insert_message(decorated: &str, message: &str) -> String {
    decorated.replacen(MSG_TOKEN, message, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pattern() {
        let pattern = MessagePattern::new("%NAME%: %MSG%").unwrap();
        assert_eq!(pattern.as_str(), "%NAME%: %MSG%");
    }

    #[test]
    fn test_bare_message_token_is_valid() {
        assert!(MessagePattern::new("%MSG%").is_ok());
    }

    #[test]
    fn test_rejects_pattern_without_token() {
        let err = MessagePattern::new("%TIME% %NAME%").unwrap_err();
        assert!(matches!(err, LoggerError::MissingMessageToken { .. }));
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert!(matches!(
            MessagePattern::new("").unwrap_err(),
            LoggerError::EmptyArgument { .. }
        ));
        assert!(matches!(
            MessagePattern::new("   ").unwrap_err(),
            LoggerError::BlankArgument { .. }
        ));
    }

    #[test]
    fn test_insert_replaces_first_occurrence_only() {
        let line = insert_message("%MSG% and %MSG%", "hello");
        assert_eq!(line, "hello and %MSG%");
    }

    #[test]
    fn test_message_body_tokens_survive_verbatim() {
        // The message goes in last, so its own "%MSG%" text is never expanded.
        let line = insert_message("prefix %MSG%", "payload with %MSG% inside");
        assert_eq!(line, "prefix payload with %MSG% inside");
    }
}
