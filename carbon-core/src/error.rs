//! Errors for Carbon construction, parsing and arithmetic
//!
//! Every fallible operation returns `Result<_, CarbonError>`. Each variant
//! carries a stable machine-readable code and a short fix-it suggestion.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const TIME_PARSE: &str = "TIME_PARSE";
    pub const TIMESTAMP_PARSE: &str = "TIMESTAMP_PARSE";
    pub const LAYOUT_PARSE: &str = "LAYOUT_PARSE";
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const INVALID_OFFSET: &str = "INVALID_OFFSET";
    pub const INVALID_QUARTER: &str = "INVALID_QUARTER";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const CONFIG: &str = "CONFIG";
}

/// Error type for Carbon operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarbonError {
    /// A colon-delimited `HH:MM:SS` string could not be read
    #[error("parse time error: {0}")]
    TimeParse(String),

    /// A timestamp string was not an integer
    #[error("parse timestamp error: {0}")]
    TimestampParse(String),

    /// A value did not match its layout
    #[error("parse layout error: {0}")]
    LayoutParse(String),

    #[error("invalid unit: {0}")]
    InvalidUnit(String),

    #[error("invalid offset: {0}")]
    InvalidOffset(String),

    #[error("invalid quarter: {0} (must be 1-4)")]
    InvalidQuarter(u8),

    /// The result falls outside the representable range
    #[error("datetime overflow")]
    Overflow,

    #[error("configuration error: {0}")]
    Config(String),
}

impl CarbonError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::TimeParse(_) => codes::TIME_PARSE,
            Self::TimestampParse(_) => codes::TIMESTAMP_PARSE,
            Self::LayoutParse(_) => codes::LAYOUT_PARSE,
            Self::InvalidUnit(_) => codes::INVALID_UNIT,
            Self::InvalidOffset(_) => codes::INVALID_OFFSET,
            Self::InvalidQuarter(_) => codes::INVALID_QUARTER,
            Self::Overflow => codes::OVERFLOW,
            Self::Config(_) => codes::CONFIG,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::TimeParse(_) => "Use the HH:MM:SS format, e.g. 12:30:00",
            Self::TimestampParse(_) => "Pass whole seconds since 1970-01-01T00:00:00Z",
            Self::LayoutParse(_) => "Check that the value matches the layout tokens exactly",
            Self::InvalidUnit(_) => {
                "Use one of: year, month, week, day, hour, minute, second, millisecond, microsecond, nanosecond"
            }
            Self::InvalidOffset(_) => "Use Z, +HH:MM, +HHMM or +HH within 24 hours of UTC",
            Self::InvalidQuarter(_) => "Quarters are numbered 1 to 4",
            Self::Overflow => "Date value is out of supported range",
            Self::Config(_) => "Check the CARBON_UTC_OFFSET environment variable",
        }
    }
}

impl From<serde_json::Error> for CarbonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CarbonError::TimeParse("x".into()).code(), codes::TIME_PARSE);
        assert_eq!(CarbonError::Overflow.code(), codes::OVERFLOW);
        assert_eq!(CarbonError::InvalidQuarter(5).code(), codes::INVALID_QUARTER);
    }

    #[test]
    fn test_display() {
        let err = CarbonError::TimestampParse("abc".to_string());
        assert_eq!(err.to_string(), "parse timestamp error: abc");

        let err = CarbonError::InvalidQuarter(0);
        assert!(err.to_string().contains("1-4"));
    }
}
