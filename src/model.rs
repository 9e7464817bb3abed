use crate::error::{Result, WikiStatsError};
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default lower bound for the totals report.
pub const ALLTIME_SINCE: &str = "2017-07-01T00:00:00Z";
/// Default lower bound for per-user stats.
pub const PERUSER_SINCE: &str = "2008-12-01T00:00:00Z";
/// Per-user fetch cap so a prolific account cannot stall the run.
pub const MAX_CONTRIBS: usize = 10_000;

/// A single edit attributed to a user, as returned by the contribution
/// listing. Oldest-revision data is not carried here; it is fetched lazily
/// through the source only when a filter needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub title: String,
    pub namespace: i64,
    pub revid: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub edit_count: u64,
}

/// The first-ever revision of a page, used for the creation-only and
/// redirect filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OldestRevision {
    pub revid: u64,
    pub content: String,
}

/// One row of the totals report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTotal {
    pub user: String,
    pub edits: u64,
}

/// Per-user counts bucketed by calendar year, year-month, and year-week.
/// Absent keys mean zero; the maps stay sorted for deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerUserStats {
    pub years: BTreeMap<String, u64>,
    pub months: BTreeMap<String, u64>,
    pub weeks: BTreeMap<String, u64>,
}

/// Collection window. `asof` is the newer bound, `since` the older one; the
/// upstream listing enumerates from `asof` backward to `since`.
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    pub asof: DateTime<Utc>,
    pub since: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window from the raw CLI values, falling back to the current
    /// time for `asof` and a mode-specific epoch for `since`.
    pub fn resolve(asof: Option<&str>, since: Option<&str>, default_since: &str) -> Result<Self> {
        let asof = match asof {
            Some(s) => parse_timestamp(s)?,
            None => Utc::now(),
        };
        let since = parse_timestamp(since.unwrap_or(default_since))?;

        if since > asof {
            return Err(WikiStatsError::InvalidDate(format!(
                "Invalid window: since ({since}) is after asof ({asof})"
            )));
        }

        Ok(Self { asof, since })
    }

    /// Wire value for the listing's start parameter (enumeration starts at
    /// the newest instant).
    pub fn start_param(&self) -> String {
        self.asof.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Wire value for the listing's end parameter (the older bound).
    pub fn end_param(&self) -> String {
        self.since.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    // YYYY-MM-DD, midnight UTC
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }

    Err(WikiStatsError::InvalidDate(format!(
        "invalid timestamp '{input}' (expected RFC3339 or YYYY-MM-DD)"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_rfc3339_timestamp() {
        let dt = parse_timestamp("2019-07-28T00:00:00Z").unwrap();
        assert_eq!(dt.to_rfc3339_opts(SecondsFormat::Secs, true), "2019-07-28T00:00:00Z");
    }

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        let dt = parse_timestamp("2019-07-28").unwrap();
        assert_eq!(dt.to_rfc3339_opts(SecondsFormat::Secs, true), "2019-07-28T00:00:00Z");
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn window_defaults_since_per_mode() {
        let totals = TimeWindow::resolve(None, None, ALLTIME_SINCE).unwrap();
        assert_eq!(totals.end_param(), "2017-07-01T00:00:00Z");

        let peruser = TimeWindow::resolve(None, None, PERUSER_SINCE).unwrap();
        assert_eq!(peruser.end_param(), "2008-12-01T00:00:00Z");
    }

    #[test]
    fn window_start_is_asof_end_is_since() {
        let w = TimeWindow::resolve(Some("2020-06-01"), Some("2020-01-01"), ALLTIME_SINCE).unwrap();
        assert_eq!(w.start_param(), "2020-06-01T00:00:00Z");
        assert_eq!(w.end_param(), "2020-01-01T00:00:00Z");
    }

    #[test]
    fn window_rejects_inverted_bounds() {
        let err = TimeWindow::resolve(Some("2020-01-01"), Some("2020-06-01"), ALLTIME_SINCE);
        assert!(err.is_err());
    }
}
