use anyhow::Result;
use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "wikistats")]
#[command(about = "User activity statistics for Wikimedia-style wikis")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["totals", "user"])))]
pub struct Cli {
    #[arg(help = "Wiki to get stats from, in lang.family format (e.g. en.wikipedia)")]
    pub wiki: String,

    #[arg(short, long, help = "Show total contributions for all active users")]
    pub totals: bool,

    #[arg(
        short,
        long,
        value_name = "NAME",
        help = "Show detailed stats for a user (without the \"User:\" prefix)"
    )]
    pub user: Option<String>,

    #[arg(
        short,
        long,
        value_name = "TIMESTAMP",
        help = "Only collect data before this timestamp, e.g. 2019-07-28T00:00:00Z (default is the current time)"
    )]
    pub asof: Option<String>,

    #[arg(
        short,
        long,
        value_name = "TIMESTAMP",
        help = "Only collect data since this timestamp (default is 2017-07-01T00:00:00Z for totals and 2008-12-01T00:00:00Z for user stats)"
    )]
    pub since: Option<String>,

    #[arg(
        short = 'm',
        long = "month-stats-since",
        value_name = "YYYY-MM",
        help = "Produce month stats since this month"
    )]
    pub month_stats_since: Option<String>,

    #[arg(
        short = 'w',
        long = "week-stats-since",
        value_name = "YYYY-WW",
        help = "Produce week stats since this ISO week"
    )]
    pub week_stats_since: Option<String>,

    #[arg(
        short,
        long = "namespace",
        value_name = "NS",
        help = "For user stats, only include this namespace (may be specified multiple times)"
    )]
    pub namespace: Vec<i64>,

    #[arg(short, long, help = "Only include the pages created by the user")]
    pub created_only: bool,

    #[arg(short = 'r', long, help = "Also include redirect pages")]
    pub include_redirects: bool,

    #[arg(
        short = 'x',
        long = "exclude-pages",
        value_name = "FULLPAGENAME",
        help = "Exclude a page from the stats (may be specified multiple times)"
    )]
    pub exclude_pages: Vec<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        if let Some(user) = self.user.clone() {
            crate::peruser::exec(&self, &user)
        } else {
            crate::totals::exec(&self)
        }
    }
}
