// src/models/year.rs

//! Year range selection for snapshot searches.
//!
//! Both ends of the range are drawn from a fixed set of options: a sentinel
//! (`beginning` for the start, `current` for the end) or one of the supported
//! years. No ordering is enforced between the two ends.

use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, Result};

/// First year offered by the year selectors.
pub const FIRST_YEAR: u16 = 2002;

/// Number of years offered after the sentinel.
pub const YEAR_COUNT: u16 = 20;

/// Sentinel value for an open start.
pub const BEGINNING: &str = "beginning";

/// Sentinel value for an open end.
pub const CURRENT: &str = "current";

/// All selectable years, oldest first.
pub fn supported_years() -> impl Iterator<Item = u16> {
    FIRST_YEAR..FIRST_YEAR + YEAR_COUNT
}

fn parse_year(value: &str) -> Result<u16> {
    supported_years()
        .find(|year| year.to_string() == value)
        .ok_or_else(|| AppError::validation(format!("unsupported year '{value}'")))
}

/// Start of the searched range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartYear {
    #[default]
    Beginning,
    Year(u16),
}

impl fmt::Display for StartYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartYear::Beginning => f.write_str(BEGINNING),
            StartYear::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for StartYear {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        if value == BEGINNING {
            Ok(StartYear::Beginning)
        } else {
            parse_year(value).map(StartYear::Year)
        }
    }
}

/// End of the searched range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndYear {
    #[default]
    Current,
    Year(u16),
}

impl fmt::Display for EndYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndYear::Current => f.write_str(CURRENT),
            EndYear::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for EndYear {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        if value == CURRENT {
            Ok(EndYear::Current)
        } else {
            parse_year(value).map(EndYear::Year)
        }
    }
}

/// Which end of the range a selector controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearField {
    Start,
    End,
}

impl YearField {
    /// Form field name (`start` / `end`).
    pub fn name(&self) -> &'static str {
        match self {
            YearField::Start => "start",
            YearField::End => "end",
        }
    }
}

/// Selected start and end of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearRange {
    pub start: StartYear,
    pub end: EndYear,
}

impl YearRange {
    /// Replace one end of the range, leaving the other untouched.
    ///
    /// `value` must be one of the options the selector for `field` offers.
    pub fn set(&mut self, field: YearField, value: &str) -> Result<()> {
        match field {
            YearField::Start => self.start = value.parse()?,
            YearField::End => self.end = value.parse()?,
        }
        Ok(())
    }

    /// Current value of one end, as it appears in a query string.
    pub fn value(&self, field: YearField) -> String {
        match field {
            YearField::Start => self.start.to_string(),
            YearField::End => self.end.to_string(),
        }
    }
}
