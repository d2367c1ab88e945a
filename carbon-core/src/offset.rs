//! Fixed UTC offsets
//!
//! Carbon does not ship a time zone database. A zone is a fixed number of
//! seconds east of UTC, written `+HH:MM`.

use crate::CarbonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const SECONDS_PER_DAY: i32 = 86_400;

/// Seconds east of UTC, strictly within one day either way
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Offset {
    seconds: i32,
}

static LOCAL: OnceLock<Offset> = OnceLock::new();

impl Offset {
    pub const UTC: Offset = Offset { seconds: 0 };

    /// Create an offset from seconds east of UTC
    pub fn from_seconds(seconds: i32) -> Result<Self, CarbonError> {
        if seconds <= -SECONDS_PER_DAY || seconds >= SECONDS_PER_DAY {
            return Err(CarbonError::InvalidOffset(format!(
                "{} seconds is not within 24 hours of UTC",
                seconds
            )));
        }
        Ok(Self { seconds })
    }

    /// Create an offset from whole hours east of UTC
    pub fn from_hours(hours: i32) -> Result<Self, CarbonError> {
        let seconds = hours
            .checked_mul(3600)
            .ok_or_else(|| CarbonError::InvalidOffset(format!("{} hours", hours)))?;
        Self::from_seconds(seconds)
    }

    /// Create an offset from hours and minutes; the sign of `hours` applies to both
    pub fn from_hm(hours: i32, minutes: i32) -> Result<Self, CarbonError> {
        if !(0..60).contains(&minutes) {
            return Err(CarbonError::InvalidOffset(format!("minute {} out of range 0-59", minutes)));
        }
        let sign = if hours < 0 { -1 } else { 1 };
        let seconds = hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(sign * minutes * 60))
            .ok_or_else(|| CarbonError::InvalidOffset(format!("{}:{:02}", hours, minutes)))?;
        Self::from_seconds(seconds)
    }

    /// The process-wide local offset
    ///
    /// Read once from [`Settings::from_env`](crate::Settings::from_env); an
    /// unreadable setting falls back to UTC with a warning.
    pub fn local() -> Self {
        *LOCAL.get_or_init(|| match crate::Settings::from_env() {
            Ok(settings) => settings.utc_offset,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring local offset setting, using UTC");
                Offset::UTC
            }
        })
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    pub fn as_nanos(&self) -> i128 {
        self.seconds as i128 * crate::civil::NANOS_PER_SECOND
    }

    pub fn is_utc(&self) -> bool {
        self.seconds == 0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, abs) = if self.seconds < 0 { ('-', -self.seconds) } else { ('+', self.seconds) };
        let hours = abs / 3600;
        let minutes = (abs % 3600) / 60;
        let seconds = abs % 60;
        if seconds == 0 {
            write!(f, "{}{:02}:{:02}", sign, hours, minutes)
        } else {
            write!(f, "{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
        }
    }
}

impl FromStr for Offset {
    type Err = CarbonError;

    /// Accepts `Z`, `UTC`, `+HH:MM:SS`, `+HH:MM`, `+HHMMSS`, `+HHMM` and `+HH` (and `-` forms)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
            return Ok(Self::UTC);
        }

        let invalid = || CarbonError::InvalidOffset(format!("'{}'", s));
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'+') => (1, &s[1..]),
            Some(b'-') => (-1, &s[1..]),
            _ => return Err(invalid()),
        };
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit() || b == b':') {
            return Err(invalid());
        }

        let parts: Vec<&str> = if rest.contains(':') {
            rest.split(':').collect()
        } else {
            match rest.len() {
                1 | 2 => vec![rest],
                4 => vec![&rest[..2], &rest[2..]],
                6 => vec![&rest[..2], &rest[2..4], &rest[4..]],
                _ => return Err(invalid()),
            }
        };
        if parts.len() > 3 || parts.iter().any(|part| part.is_empty() || part.len() > 2) {
            return Err(invalid());
        }

        let mut fields = [0i32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }
        let [hours, minutes, seconds] = fields;
        if minutes >= 60 || seconds >= 60 {
            return Err(invalid());
        }
        Self::from_seconds(sign * (hours * 3600 + minutes * 60 + seconds))
    }
}

impl TryFrom<String> for Offset {
    type Error = CarbonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Offset> for String {
    fn from(offset: Offset) -> Self {
        offset.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("Z".parse::<Offset>().unwrap(), Offset::UTC);
        assert_eq!("utc".parse::<Offset>().unwrap(), Offset::UTC);
        assert_eq!("+08:00".parse::<Offset>().unwrap().seconds(), 8 * 3600);
        assert_eq!("+0530".parse::<Offset>().unwrap().seconds(), 5 * 3600 + 30 * 60);
        assert_eq!("-03".parse::<Offset>().unwrap().seconds(), -3 * 3600);
        assert_eq!("-00:30".parse::<Offset>().unwrap().seconds(), -30 * 60);
        assert_eq!("+01:01:01".parse::<Offset>().unwrap().seconds(), 3661);
        assert_eq!("-010101".parse::<Offset>().unwrap().seconds(), -3661);
    }

    #[test]
    fn test_display_parses_back() {
        for seconds in [0, 3661, -3661, 19_800, -45_296, 86_399] {
            let offset = Offset::from_seconds(seconds).unwrap();
            assert_eq!(offset.to_string().parse::<Offset>().unwrap(), offset);
        }
    }

    #[test]
    fn test_parse_invalid() {
        for bad in ["", "08:00", "+", "+25:00", "+08:75", "+08:00:60", "+08:00:00:00", "+abc", "+123", "+1:"] {
            let err = bad.parse::<Offset>().unwrap_err();
            assert_eq!(err.code(), crate::codes::INVALID_OFFSET, "{:?}", bad);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Offset::UTC.to_string(), "+00:00");
        assert_eq!(Offset::from_hm(5, 30).unwrap().to_string(), "+05:30");
        assert_eq!(Offset::from_hours(-8).unwrap().to_string(), "-08:00");
        assert_eq!(Offset::from_seconds(3661).unwrap().to_string(), "+01:01:01");
    }

    #[test]
    fn test_bounds() {
        assert!(Offset::from_seconds(86_399).is_ok());
        assert!(Offset::from_seconds(86_400).is_err());
        assert!(Offset::from_hours(-24).is_err());
        assert!(Offset::from_hm(1, 60).is_err());
    }

    #[test]
    fn test_serde() {
        let offset = Offset::from_hours(8).unwrap();
        let json = serde_json::to_string(&offset).unwrap();
        assert_eq!(json, "\"+08:00\"");
        let back: Offset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, offset);
        assert!(serde_json::from_str::<Offset>("\"nope\"").is_err());

        let odd = Offset::from_seconds(3661).unwrap();
        let json = serde_json::to_string(&odd).unwrap();
        assert_eq!(json, "\"+01:01:01\"");
        assert_eq!(serde_json::from_str::<Offset>(&json).unwrap(), odd);
    }
}
