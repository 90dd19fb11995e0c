use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures to obtain data. Absent data is never an error; lookups return `Option`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value for {var}: {reason}")]
    Config { var: &'static str, reason: String },

    #[error("id {0:?} is not a single URL path segment")]
    InvalidId(String),

    #[error("fixture document rejected: {0}")]
    Fixture(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}
