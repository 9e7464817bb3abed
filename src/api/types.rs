//! Response envelopes for `action=query` with `formatversion=2`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "continue", default)]
    pub continuation: Option<BTreeMap<String, serde_json::Value>>,
    pub error: Option<ApiError>,
    pub query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub info: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryBody {
    #[serde(default)]
    pub allusers: Vec<AllUser>,
    #[serde(default)]
    pub usercontribs: Vec<UserContrib>,
    #[serde(default)]
    pub pages: Vec<PageRevisions>,
}

#[derive(Debug, Deserialize)]
pub struct AllUser {
    pub name: String,
    #[serde(default)]
    pub editcount: u64,
}

#[derive(Debug, Deserialize)]
pub struct UserContrib {
    pub title: String,
    #[serde(default)]
    pub ns: i64,
    pub revid: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct PageRevisions {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

#[derive(Debug, Deserialize)]
pub struct Revision {
    pub revid: u64,
    pub slots: Option<Slots>,
}

#[derive(Debug, Deserialize)]
pub struct Slots {
    pub main: MainSlot,
}

#[derive(Debug, Deserialize)]
pub struct MainSlot {
    #[serde(default)]
    pub content: String,
}
