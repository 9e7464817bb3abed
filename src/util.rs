use crate::error::{Result, WikiStatsError};
use chrono::{DateTime, Datelike, Utc};

pub fn year_key(timestamp: &DateTime<Utc>) -> String {
    format!("{:04}", timestamp.year())
}

pub fn month_key(timestamp: &DateTime<Utc>) -> String {
    format!("{:04} {:02}", timestamp.year(), timestamp.month())
}

/// Calendar year plus ISO week number. Around New Year the ISO week can
/// belong to the neighbouring ISO year; the calendar year is kept so week
/// buckets line up with the year buckets.
pub fn week_key(timestamp: &DateTime<Utc>) -> String {
    format!("{:04} {:02}", timestamp.year(), timestamp.iso_week().week())
}

/// A `YYYY-MM` or `YYYY-WW` lower bound for the month/week buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoff {
    pub year: i32,
    pub period: u32,
}

impl Cutoff {
    pub fn month(input: &str) -> Result<Self> {
        Self::parse(input, 12, "YYYY-MM")
    }

    pub fn week(input: &str) -> Result<Self> {
        // ISO week numbers run up to 53
        Self::parse(input, 53, "YYYY-WW")
    }

    fn parse(input: &str, max_period: u32, shape: &str) -> Result<Self> {
        let invalid = || WikiStatsError::InvalidCutoff(format!("expected {shape}, got '{input}'"));

        let (year, period) = input.split_once('-').ok_or_else(|| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let period: u32 = period.parse().map_err(|_| invalid())?;

        if !(1..=max_period).contains(&period) {
            return Err(invalid());
        }

        Ok(Self { year, period })
    }

    /// True when `(year, period)` is at or after the cutoff.
    pub fn admits(&self, year: i32, period: u32) -> bool {
        (year, period) >= (self.year, self.period)
    }
}
