//! Quarters of the year

use crate::CarbonError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quarter of the year, cyclic Q4 -> Q1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quarter {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Quarter containing a month; `None` for a month outside 1-12
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=3 => Some(Quarter::Q1),
            4..=6 => Some(Quarter::Q2),
            7..=9 => Some(Quarter::Q3),
            10..=12 => Some(Quarter::Q4),
            _ => None,
        }
    }

    /// 1-4
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Following quarter (Q4 -> Q1)
    pub fn next(self) -> Self {
        match self {
            Quarter::Q1 => Quarter::Q2,
            Quarter::Q2 => Quarter::Q3,
            Quarter::Q3 => Quarter::Q4,
            Quarter::Q4 => Quarter::Q1,
        }
    }

    /// Preceding quarter (Q1 -> Q4)
    pub fn last(self) -> Self {
        match self {
            Quarter::Q1 => Quarter::Q4,
            Quarter::Q2 => Quarter::Q1,
            Quarter::Q3 => Quarter::Q2,
            Quarter::Q4 => Quarter::Q3,
        }
    }

    /// First month of the quarter
    pub fn first_month(self) -> u32 {
        (self.number() as u32 - 1) * 3 + 1
    }

    /// Last month of the quarter
    pub fn last_month(self) -> u32 {
        self.first_month() + 2
    }
}

impl TryFrom<u8> for Quarter {
    type Error = CarbonError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Quarter::Q1),
            2 => Ok(Quarter::Q2),
            3 => Ok(Quarter::Q3),
            4 => Ok(Quarter::Q4),
            other => Err(CarbonError::InvalidQuarter(other)),
        }
    }
}

impl From<Quarter> for u8 {
    fn from(quarter: Quarter) -> Self {
        quarter.number()
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_month() {
        assert_eq!(Quarter::from_month(1), Some(Quarter::Q1));
        assert_eq!(Quarter::from_month(3), Some(Quarter::Q1));
        assert_eq!(Quarter::from_month(4), Some(Quarter::Q2));
        assert_eq!(Quarter::from_month(9), Some(Quarter::Q3));
        assert_eq!(Quarter::from_month(12), Some(Quarter::Q4));
        assert_eq!(Quarter::from_month(0), None);
        assert_eq!(Quarter::from_month(13), None);
    }

    #[test]
    fn test_all_matches_months() {
        for (index, quarter) in Quarter::ALL.into_iter().enumerate() {
            assert_eq!(quarter.number() as usize, index + 1);
            for month in quarter.first_month()..=quarter.last_month() {
                assert_eq!(Quarter::from_month(month), Some(quarter));
            }
        }
    }

    #[test]
    fn test_cycle() {
        assert_eq!(Quarter::Q4.next(), Quarter::Q1);
        assert_eq!(Quarter::Q1.last(), Quarter::Q4);
        assert_eq!(Quarter::Q2.next(), Quarter::Q3);
        assert_eq!(Quarter::Q3.last(), Quarter::Q2);

        let mut q = Quarter::Q1;
        for _ in 0..4 {
            q = q.next();
        }
        assert_eq!(q, Quarter::Q1);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Quarter::try_from(4).unwrap(), Quarter::Q4);
        assert_eq!(Quarter::try_from(0), Err(CarbonError::InvalidQuarter(0)));
        assert_eq!(Quarter::try_from(5), Err(CarbonError::InvalidQuarter(5)));
    }

    #[test]
    fn test_months() {
        assert_eq!(Quarter::Q1.first_month(), 1);
        assert_eq!(Quarter::Q3.first_month(), 7);
        assert_eq!(Quarter::Q4.last_month(), 12);
        assert_eq!(Quarter::Q2.to_string(), "Q2");
    }
}
