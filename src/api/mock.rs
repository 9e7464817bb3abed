//! In-memory [`ContributionSource`] for aggregator tests.

use super::ContributionSource;
use crate::error::{Result, WikiStatsError};
use crate::model::{Contribution, OldestRevision, TimeWindow, UserInfo};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Default)]
pub struct ScriptedSource {
    pub users: Vec<UserInfo>,
    pub contribs: HashMap<String, Vec<Contribution>>,
    pub oldest: HashMap<String, OldestRevision>,
}

impl ScriptedSource {
    pub fn with_user(mut self, name: &str, edit_count: u64) -> Self {
        self.users.push(UserInfo {
            name: name.to_string(),
            edit_count,
        });
        self
    }

    pub fn with_contrib(mut self, user: &str, title: &str, revid: u64, timestamp: &str) -> Self {
        self.contribs
            .entry(user.to_string())
            .or_default()
            .push(Contribution {
                title: title.to_string(),
                namespace: 0,
                revid,
                timestamp: parse(timestamp),
            });
        self
    }

    pub fn with_oldest(mut self, title: &str, revid: u64, content: &str) -> Self {
        self.oldest.insert(
            title.to_string(),
            OldestRevision {
                revid,
                content: content.to_string(),
            },
        );
        self
    }
}

fn parse(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("scripted timestamp must be RFC3339")
        .with_timezone(&Utc)
}

impl ContributionSource for ScriptedSource {
    fn active_users(&self) -> Result<Vec<UserInfo>> {
        Ok(self.users.clone())
    }

    fn contributions(
        &self,
        user: &str,
        window: &TimeWindow,
        _namespaces: &[i64],
        limit: usize,
    ) -> Result<Vec<Contribution>> {
        Ok(self
            .contribs
            .get(user)
            .map(|contribs| {
                contribs
                    .iter()
                    .filter(|c| c.timestamp >= window.since && c.timestamp < window.asof)
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Errors when a title was not scripted, which doubles as a check that
    /// the aggregators only fetch oldest revisions when a filter needs them.
    fn oldest_revision(&self, title: &str) -> Result<OldestRevision> {
        self.oldest.get(title).cloned().ok_or_else(|| {
            WikiStatsError::Response(format!("no oldest revision scripted for '{title}'"))
        })
    }
}
