use super::types::ApiResponse;
use super::{ContributionSource, Site};
use crate::error::{Result, WikiStatsError};
use crate::model::{Contribution, OldestRevision, TimeWindow, UserInfo};
use reqwest::blocking::Client;
use std::collections::BTreeMap;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Hard per-request ceiling for `list=` queries on anonymous clients.
const PAGE_LIMIT: usize = 500;

/// Blocking MediaWiki read-API client.
pub struct MediaWikiClient {
    http: Client,
    endpoint: String,
}

impl MediaWikiClient {
    pub fn new(site: &Site) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("wikistats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: site.api_url(),
        })
    }

    fn query(&self, params: &[(String, String)]) -> Result<ApiResponse> {
        let mut full: Vec<(String, String)> = vec![
            ("action".into(), "query".into()),
            ("format".into(), "json".into()),
            ("formatversion".into(), "2".into()),
        ];
        full.extend_from_slice(params);

        let response = self.http.get(&self.endpoint).query(&full).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiStatsError::Response(format!(
                "HTTP {status} from {}",
                self.endpoint
            )));
        }

        let body: ApiResponse = response.json()?;
        if let Some(error) = body.error {
            return Err(WikiStatsError::Api {
                code: error.code,
                info: error.info,
            });
        }

        Ok(body)
    }
}

/// The API hands back opaque continuation values that must be echoed on the
/// next request verbatim.
fn continuation_params(
    continuation: Option<BTreeMap<String, serde_json::Value>>,
) -> Vec<(String, String)> {
    continuation
        .into_iter()
        .flatten()
        .map(|(key, value)| {
            let value = match value.as_str() {
                Some(s) => s.to_string(),
                None => value.to_string(),
            };
            (key, value)
        })
        .collect()
}

impl ContributionSource for MediaWikiClient {
    fn active_users(&self) -> Result<Vec<UserInfo>> {
        let mut users = Vec::new();
        let mut cont: Vec<(String, String)> = Vec::new();

        loop {
            let mut params: Vec<(String, String)> = vec![
                ("list".into(), "allusers".into()),
                ("auprop".into(), "editcount".into()),
                ("auwitheditsonly".into(), "1".into()),
                ("aulimit".into(), PAGE_LIMIT.to_string()),
            ];
            params.append(&mut cont);

            let body = self.query(&params)?;

            if let Some(query) = body.query {
                users.extend(
                    query
                        .allusers
                        .into_iter()
                        .filter(|u| u.editcount > 0)
                        .map(|u| UserInfo {
                            name: u.name,
                            edit_count: u.editcount,
                        }),
                );
            }

            cont = continuation_params(body.continuation);
            if cont.is_empty() {
                break;
            }
        }

        Ok(users)
    }

    fn contributions(
        &self,
        user: &str,
        window: &TimeWindow,
        namespaces: &[i64],
        limit: usize,
    ) -> Result<Vec<Contribution>> {
        let mut contribs = Vec::new();
        let mut cont: Vec<(String, String)> = Vec::new();

        loop {
            let batch = PAGE_LIMIT.min(limit - contribs.len());
            let mut params: Vec<(String, String)> = vec![
                ("list".into(), "usercontribs".into()),
                ("ucuser".into(), user.into()),
                ("ucprop".into(), "ids|title|timestamp".into()),
                ("ucstart".into(), window.start_param()),
                ("ucend".into(), window.end_param()),
                ("uclimit".into(), batch.to_string()),
            ];
            if !namespaces.is_empty() {
                let joined = namespaces
                    .iter()
                    .map(|ns| ns.to_string())
                    .collect::<Vec<_>>()
                    .join("|");
                params.push(("ucnamespace".into(), joined));
            }
            params.append(&mut cont);

            let body = self.query(&params)?;

            if let Some(query) = body.query {
                for uc in query.usercontribs {
                    contribs.push(Contribution {
                        title: uc.title,
                        namespace: uc.ns,
                        revid: uc.revid,
                        timestamp: uc.timestamp,
                    });
                    if contribs.len() >= limit {
                        return Ok(contribs);
                    }
                }
            }

            cont = continuation_params(body.continuation);
            if cont.is_empty() {
                break;
            }
        }

        Ok(contribs)
    }

    fn oldest_revision(&self, title: &str) -> Result<OldestRevision> {
        let params: Vec<(String, String)> = vec![
            ("prop".into(), "revisions".into()),
            ("titles".into(), title.into()),
            ("rvdir".into(), "newer".into()),
            ("rvlimit".into(), "1".into()),
            ("rvprop".into(), "ids|content".into()),
            ("rvslots".into(), "main".into()),
        ];

        let body = self.query(&params)?;

        let page = body
            .query
            .and_then(|q| q.pages.into_iter().next())
            .ok_or_else(|| {
                WikiStatsError::Response(format!("no revision data for '{title}'"))
            })?;

        if page.missing {
            return Err(WikiStatsError::Response(format!(
                "page '{title}' does not exist"
            )));
        }

        let revision = page.revisions.into_iter().next().ok_or_else(|| {
            WikiStatsError::Response(format!("page '{title}' has no revisions"))
        })?;

        let content = revision.slots.map(|s| s.main.content).unwrap_or_default();

        Ok(OldestRevision {
            revid: revision.revid,
            content,
        })
    }
}
