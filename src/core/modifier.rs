//! Pattern modifiers
//!
//! A modifier owns exactly one placeholder token and rewrites its first
//! occurrence in a pattern. The token vocabulary besides `%MSG%` is fixed, so
//! the modifier set is a closed enum rather than an open trait.

use super::level::LogLevel;
use super::time_format::TimeFormat;

/// Token owned by the time modifier.
pub const TIME_TOKEN: &str = "%TIME%";
/// Token owned by the name modifier.
pub const NAME_TOKEN: &str = "%NAME%";
/// Token owned by the level modifier.
pub const LEVEL_TOKEN: &str = "%LEVEL%";

/// A text-substitution unit recognizing one placeholder token.
///
/// Modifiers are derived from a pattern exactly once, when the pattern is set
/// on a configuration; see [`PatternModifier::derive_for_pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternModifier {
    /// Replaces `%TIME%` with the current wall-clock time.
    Time(TimeFormat),
    /// Replaces `%NAME%` with the calling logger's name.
    Name,
    /// Replaces `%LEVEL%` with the display name of the call's level.
    Level,
}

impl PatternModifier {
    /// The placeholder token this modifier owns.
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            PatternModifier::Time(_) => TIME_TOKEN,
            PatternModifier::Name => NAME_TOKEN,
            PatternModifier::Level => LEVEL_TOKEN,
        }
    }

    /// Rewrite the first occurrence of the owned token, if present.
    ///
    /// A pattern without the token passes through unchanged; absence is normal,
    /// never an error. No other token is touched.
    #[must_use]
    pub fn modify(&self, pattern: &str, logger_name: &str, level: LogLevel) -> String {
        if !pattern.contains(self.token()) {
            return pattern.to_string();
        }
        let value = match self {
            PatternModifier::Time(format) => format.now(),
            PatternModifier::Name => logger_name.to_string(),
            PatternModifier::Level => level.to_str().to_string(),
        };
        pattern.replacen(self.token(), &value, 1)
    }

    /// Scan a pattern once and instantiate the modifiers whose tokens occur in
    /// it.
    ///
    /// Scan order (time, then name, then level) is the pipeline application
    /// order. The supplied time format is attached only when the pattern
    /// activates a time modifier.
    #[must_use]
    pub fn derive_for_pattern(pattern: &str, time_format: TimeFormat) -> Vec<PatternModifier> {
        let mut modifiers = Vec::new();
        if pattern.contains(TIME_TOKEN) {
            modifiers.push(PatternModifier::Time(time_format));
        }
        if pattern.contains(NAME_TOKEN) {
            modifiers.push(PatternModifier::Name);
        }
        if pattern.contains(LEVEL_TOKEN) {
            modifiers.push(PatternModifier::Level);
        }
        modifiers
    }
}
