use crate::api::{ContributionSource, MediaWikiClient, Site};
use crate::cli::Cli;
use crate::error::Result;
use crate::model::{TimeWindow, UserTotal, ALLTIME_SINCE, MAX_CONTRIBS};
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;

pub fn exec(args: &Cli) -> anyhow::Result<()> {
    let site = Site::parse(&args.wiki).context("Failed to resolve wiki site")?;
    let window = TimeWindow::resolve(args.asof.as_deref(), args.since.as_deref(), ALLTIME_SINCE)
        .context("Failed to resolve time window")?;
    let client = MediaWikiClient::new(&site).context("Failed to build API client")?;

    let excludes: HashSet<String> = args.exclude_pages.iter().cloned().collect();

    let totals = compute_totals(&client, &window, &excludes, MAX_CONTRIBS)
        .context("Failed to compute totals")?;

    output_table(&totals);
    Ok(())
}

/// Count each active user's contributions inside the window, minus excluded
/// pages. Rows are pushed in user-encounter order; the descending sort is
/// stable, so ties keep that order. Nothing is printed until the whole pass
/// succeeds — any fetch error discards the run.
pub fn compute_totals(
    source: &impl ContributionSource,
    window: &TimeWindow,
    excludes: &HashSet<String>,
    limit: usize,
) -> Result<Vec<UserTotal>> {
    let users = source.active_users()?;

    let pb = ProgressBar::new(users.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut totals = Vec::new();
    for user in users {
        pb.set_message(user.name.clone());

        let contribs = source.contributions(&user.name, window, &[], limit)?;
        let edits = contribs
            .iter()
            .filter(|c| !excludes.contains(&c.title))
            .count() as u64;

        if edits > 0 {
            totals.push(UserTotal {
                user: user.name,
                edits,
            });
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    totals.sort_by(|a, b| b.edits.cmp(&a.edits));
    Ok(totals)
}

fn output_table(totals: &[UserTotal]) {
    for row in totals {
        println!("{} {}", row.edits, row.user);
    }
}
