use thiserror::Error;

pub type Result<T> = std::result::Result<T, WikiStatsError>;

#[derive(Error, Debug)]
pub enum WikiStatsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {code}: {info}")]
    Api { code: String, info: String },
    #[error("Malformed API response: {0}")]
    Response(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Regex error: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Invalid wiki: {0}")]
    InvalidSite(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid cutoff: {0}")]
    InvalidCutoff(String),
}
