//! Runtime settings
//!
//! The only setting is the local UTC offset used by `Carbon::now` and the
//! other clock-backed constructors. It comes from `CARBON_UTC_OFFSET`
//! (e.g. `+08:00`) or from a JSON document `{"utc_offset": "+08:00"}`.

use crate::clock::{Calendar, SystemClock};
use crate::{CarbonError, Offset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Offset that "local" time is viewed in (default UTC)
    pub utc_offset: Offset,
}

impl Settings {
    pub const OFFSET_ENV: &'static str = "CARBON_UTC_OFFSET";

    /// Read settings from the process environment
    ///
    /// An unset variable gives the defaults; a malformed one is an error.
    pub fn from_env() -> Result<Self, CarbonError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read settings through a variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, CarbonError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        if let Some(raw) = lookup(Self::OFFSET_ENV) {
            settings.utc_offset = raw
                .parse()
                .map_err(|err| CarbonError::Config(format!("{}: {}", Self::OFFSET_ENV, err)))?;
            tracing::debug!(offset = %settings.utc_offset, "local offset from environment");
        }
        Ok(settings)
    }

    /// Parse settings from JSON
    pub fn from_json(text: &str) -> Result<Self, CarbonError> {
        Ok(serde_json::from_str(text)?)
    }

    /// System-clock calendar in the configured offset
    pub fn calendar(&self) -> Calendar<SystemClock> {
        Calendar::system(self.utc_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vars() {
        let settings = Settings::from_vars(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.utc_offset.is_utc());

        let settings = Settings::from_vars(|key| {
            (key == Settings::OFFSET_ENV).then(|| "+05:30".to_string())
        })
        .unwrap();
        assert_eq!(settings.utc_offset, Offset::from_hm(5, 30).unwrap());
        assert_eq!(settings.calendar().offset(), settings.utc_offset);
    }

    #[test]
    fn test_from_vars_invalid() {
        let err = Settings::from_vars(|_| Some("Mars/Olympus".to_string())).unwrap_err();
        assert_eq!(err.code(), crate::codes::CONFIG);
        assert!(err.to_string().contains(Settings::OFFSET_ENV));
    }

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(r#"{"utc_offset": "-03:00"}"#).unwrap();
        assert_eq!(settings.utc_offset.seconds(), -3 * 3600);

        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());

        let err = Settings::from_json(r#"{"zone": "+01:00"}"#).unwrap_err();
        assert_eq!(err.code(), crate::codes::CONFIG);
        assert!(Settings::from_json(r#"{"utc_offset": "+99:00"}"#).is_err());
    }
}
