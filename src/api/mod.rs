pub mod client;
pub mod types;

#[cfg(test)]
pub mod mock;

pub use client::MediaWikiClient;

use crate::error::{Result, WikiStatsError};
use crate::model::{Contribution, OldestRevision, TimeWindow, UserInfo};

/// A wiki identified as `lang.family`, e.g. `en.wikipedia`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub lang: String,
    pub family: String,
}

impl Site {
    /// Split on the first `.`; both halves must be nonempty.
    pub fn parse(wiki: &str) -> Result<Self> {
        let (lang, family) = wiki
            .split_once('.')
            .ok_or_else(|| invalid_site(wiki))?;

        if lang.is_empty() || family.is_empty() {
            return Err(invalid_site(wiki));
        }

        Ok(Self {
            lang: lang.to_string(),
            family: family.to_string(),
        })
    }

    pub fn api_url(&self) -> String {
        format!("https://{}.{}.org/w/api.php", self.lang, self.family)
    }
}

fn invalid_site(wiki: &str) -> WikiStatsError {
    WikiStatsError::InvalidSite(format!("expected lang.family (e.g. en.wikipedia), got '{wiki}'"))
}

/// Read-only view of the wiki the aggregators run against. The production
/// implementation is [`MediaWikiClient`]; tests script one in memory.
pub trait ContributionSource {
    /// All users with a nonzero lifetime edit count.
    fn active_users(&self) -> Result<Vec<UserInfo>>;

    /// One user's contributions inside `window`, newest first, optionally
    /// restricted to `namespaces`, capped at `limit` records.
    fn contributions(
        &self,
        user: &str,
        window: &TimeWindow,
        namespaces: &[i64],
        limit: usize,
    ) -> Result<Vec<Contribution>>;

    /// The first-ever revision of a page.
    fn oldest_revision(&self, title: &str) -> Result<OldestRevision>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_lang_family() {
        let site = Site::parse("en.wikipedia").unwrap();
        assert_eq!(site.lang, "en");
        assert_eq!(site.family, "wikipedia");
        assert_eq!(site.api_url(), "https://en.wikipedia.org/w/api.php");
    }

    #[test]
    fn splits_on_first_dot_only() {
        let site = Site::parse("bg.wikipedia").unwrap();
        assert_eq!(site.api_url(), "https://bg.wikipedia.org/w/api.php");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(Site::parse("enwiki").is_err());
        assert!(Site::parse("").is_err());
        assert!(Site::parse(".wikipedia").is_err());
        assert!(Site::parse("en.").is_err());
    }
}
