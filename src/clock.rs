// ⏰ Clock - "current date" is an explicit dependency
// Buy/sell parsing reads it once when no d/ field is supplied.

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Today's calendar date
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date (tests, replays)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
