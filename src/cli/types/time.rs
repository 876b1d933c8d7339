//! Season and week numbers, plus the calendar helpers the week resolver needs.

use crate::error::{EspnError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NFL season by starting year, e.g. `2025` for the 2025-26 season. Used as
/// the `seasonId` ESPN tags stat splits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Regular-season kickoff: the Thursday after Labor Day (first Monday of September).
    pub fn kickoff_date(&self) -> Option<NaiveDate> {
        let labor_day =
            NaiveDate::from_weekday_of_month_opt(i32::from(self.0), 9, Weekday::Mon, 1)?;
        let kickoff = labor_day + Duration::days(3);
        debug_assert_eq!(kickoff.weekday(), Weekday::Thu);
        Some(kickoff)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Scoring period number; 0 is ESPN's season-aggregate period and real
/// weeks start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    /// Last regular-season week of the 17-game schedule.
    pub const MAX: Week = Week(18);

    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| EspnError::InvalidDate {
        value: s.to_string(),
    })
}
