use super::{aggregate, output_stats, AggregateOptions};
use crate::api::{ContributionSource, MediaWikiClient, Site};
use crate::cli::Cli;
use crate::model::{TimeWindow, MAX_CONTRIBS, PERUSER_SINCE};
use crate::redirect::RedirectDetector;
use crate::util::Cutoff;
use anyhow::Context;

pub fn exec(args: &Cli, user: &str) -> anyhow::Result<()> {
    // Validate everything argument-shaped before touching the network.
    let month_cutoff = args
        .month_stats_since
        .as_deref()
        .map(Cutoff::month)
        .transpose()
        .context("Invalid --month-stats-since")?;
    let week_cutoff = args
        .week_stats_since
        .as_deref()
        .map(Cutoff::week)
        .transpose()
        .context("Invalid --week-stats-since")?;

    let site = Site::parse(&args.wiki).context("Failed to resolve wiki site")?;
    let window = TimeWindow::resolve(args.asof.as_deref(), args.since.as_deref(), PERUSER_SINCE)
        .context("Failed to resolve time window")?;
    let redirects = RedirectDetector::new().context("Failed to build redirect matcher")?;

    let client = MediaWikiClient::new(&site).context("Failed to build API client")?;
    let contribs = client
        .contributions(user, &window, &args.namespace, MAX_CONTRIBS)
        .context("Failed to fetch contributions")?;

    let opts = AggregateOptions {
        created_only: args.created_only,
        include_redirects: args.include_redirects,
        month_cutoff,
        week_cutoff,
        excludes: args.exclude_pages.iter().cloned().collect(),
    };

    let stats = aggregate(&client, &contribs, &opts, &redirects)
        .context("Failed to aggregate contributions")?;

    output_stats(&stats).context("Failed to print stats")?;
    Ok(())
}
