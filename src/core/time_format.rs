//! Time rendering for the `%TIME%` placeholder
//!
//! A configuration may carry its own time format; the default renders
//! wall-clock time as `HH:mm:ss`. Custom strftime-compatible strings cover
//! everything else.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Format applied to "now" when a pattern activates a time modifier.
///
/// # Examples
///
/// ```
/// use patternlog::TimeFormat;
///
/// let format = TimeFormat::default();
/// let rendered = format.now();
/// assert_eq!(rendered.len(), 8); // "14:03:59"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// Hours, minutes, seconds: `14:03:59`
    #[default]
    HourMinuteSecond,

    /// Custom strftime format
    ///
    /// ```
    /// use patternlog::TimeFormat;
    ///
    /// let format = TimeFormat::custom("%H:%M");
    /// ```
    Custom(String),
}

impl TimeFormat {
    /// Create a custom format from a strftime-compatible string
    pub fn custom(format: impl Into<String>) -> Self {
        TimeFormat::Custom(format.into())
    }

    /// Format a local `DateTime` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimeFormat::HourMinuteSecond => datetime.format("%H:%M:%S").to_string(),
            TimeFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Render the current wall-clock time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

impl From<&str> for TimeFormat {
    fn from(format: &str) -> Self {
        TimeFormat::Custom(format.to_string())
    }
}

impl From<String> for TimeFormat {
    fn from(format: String) -> Self {
        TimeFormat::Custom(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_format_shape() {
        let datetime = Local.with_ymd_and_hms(2024, 10, 17, 14, 3, 59).unwrap();
        assert_eq!(TimeFormat::default().format(&datetime), "14:03:59");
    }

    #[test]
    fn test_custom_format() {
        let datetime = Local.with_ymd_and_hms(2024, 10, 17, 14, 3, 59).unwrap();
        let format = TimeFormat::custom("%Y/%m/%d %H:%M");
        assert_eq!(format.format(&datetime), "2024/10/17 14:03");
    }

    #[test]
    fn test_from_str_is_custom() {
        let format: TimeFormat = "%H:%M".into();
        assert_eq!(format, TimeFormat::Custom("%H:%M".to_string()));
    }

    #[test]
    fn test_now_uses_format() {
        let rendered = TimeFormat::default().now();
        assert_eq!(rendered.len(), 8);
        assert_eq!(rendered.matches(':').count(), 2);
    }
}
