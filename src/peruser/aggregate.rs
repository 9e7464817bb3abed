use crate::api::ContributionSource;
use crate::error::Result;
use crate::model::{Contribution, OldestRevision, PerUserStats};
use crate::redirect::RedirectDetector;
use crate::util::{self, Cutoff};
use chrono::Datelike;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

pub struct AggregateOptions {
    pub created_only: bool,
    pub include_redirects: bool,
    pub month_cutoff: Option<Cutoff>,
    pub week_cutoff: Option<Cutoff>,
    pub excludes: HashSet<String>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            created_only: false,
            include_redirects: false,
            month_cutoff: None,
            week_cutoff: None,
            excludes: HashSet::new(),
        }
    }
}

/// Bucket one user's contributions by year, year-month, and year-week.
///
/// Filters short-circuit per contribution: exclusion, then creation-only,
/// then redirect. Oldest revisions are fetched only when one of the last
/// two filters is active, and at most once per title. The year bucket is
/// unconditional once the filters pass; the month and week buckets are
/// gated independently by their cutoffs.
pub fn aggregate(
    source: &impl ContributionSource,
    contribs: &[Contribution],
    opts: &AggregateOptions,
    redirects: &RedirectDetector,
) -> Result<PerUserStats> {
    let mut stats = PerUserStats::default();
    let mut oldest_by_title: HashMap<String, OldestRevision> = HashMap::new();

    for contrib in contribs {
        if opts.excludes.contains(&contrib.title) {
            continue;
        }

        if opts.created_only || !opts.include_redirects {
            let oldest = match oldest_by_title.entry(contrib.title.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(source.oldest_revision(&contrib.title)?),
            };

            if opts.created_only && contrib.revid != oldest.revid {
                continue;
            }
            if !opts.include_redirects && redirects.is_redirect(&oldest.content) {
                continue;
            }
        }

        let ts = &contrib.timestamp;
        *stats.years.entry(util::year_key(ts)).or_insert(0) += 1;

        let month_admitted = opts
            .month_cutoff
            .map_or(true, |cutoff| cutoff.admits(ts.year(), ts.month()));
        if month_admitted {
            *stats.months.entry(util::month_key(ts)).or_insert(0) += 1;
        }

        let week_admitted = opts
            .week_cutoff
            .map_or(true, |cutoff| cutoff.admits(ts.year(), ts.iso_week().week()));
        if week_admitted {
            *stats.weeks.entry(util::week_key(ts)).or_insert(0) += 1;
        }
    }

    Ok(stats)
}
