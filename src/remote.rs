use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info, info_span, instrument};

use crate::error::{Error, Result};

pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Blocking client for the third-party cricket API.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    base_url: String,
    api_key: String,
}

impl RemoteApi {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, api_key: api_key.into() }
    }

    /// `{base}/{resource}`
    pub fn collection_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource.trim_matches('/'))
    }

    /// `{base}/{resource}/{id}`; the id must be a single plain path segment.
    pub fn item_url(&self, resource: &str, id: &str) -> Result<String> {
        check_segment(id)?;
        Ok(format!("{}/{}", self.collection_url(resource), id))
    }

    /// GET a URL and return the body, or `None` on HTTP 404.
    ///
    /// Every other failure is returned as is; there is no retry.
    #[instrument(level = "info", skip(self))]
    pub fn get_body(&self, url: &str) -> Result<Option<String>> {
        let response_result = {
            let _span = info_span!("cricket_api_fetch", url = %url).entered();
            ureq::get(url).header(AUTH_HEADER, &self.api_key).call()
        };
        match response_result {
            Ok(response) => {
                let status = response.status().as_u16();
                let mut body_reader = response.into_body();
                match body_reader.read_to_string() {
                    Ok(body) => {
                        info!(status, bytes = body.len(), "Fetched from cricket API");
                        Ok(Some(body))
                    }
                    Err(e) => {
                        error!(error = %e, url = %url, "Failed to read response body");
                        Err(Error::Body { url: url.to_string(), source: e })
                    }
                }
            }
            Err(ureq::Error::StatusCode(404)) => {
                info!(url = %url, "Cricket API reported not found");
                Ok(None)
            }
            Err(ureq::Error::StatusCode(status)) => {
                error!(status, url = %url, "Cricket API returned an error status");
                Err(Error::Status { url: url.to_string(), status })
            }
            Err(e) => {
                error!(error = %e, url = %url, "Request failed");
                Err(Error::Transport { url: url.to_string(), source: e })
            }
        }
    }

    pub fn get_all<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = self.collection_url(resource);
        match self.get_body(&url)? {
            Some(body) => decode(&body, resource),
            None => Ok(Vec::new()),
        }
    }

    pub fn get_by_id<T: DeserializeOwned>(&self, resource: &str, id: &str) -> Result<Option<T>> {
        let url = self.item_url(resource, id)?;
        self.get_body(&url)?
            .map(|body| decode(&body, resource))
            .transpose()
    }

    /// `{base}/{resource}/{id}/{sub}`, e.g. the innings of one match.
    pub fn get_nested<T: DeserializeOwned>(&self, resource: &str, id: &str, sub: &str) -> Result<Option<T>> {
        let url = format!("{}/{}", self.item_url(resource, id)?, sub.trim_matches('/'));
        self.get_body(&url)?
            .map(|body| decode(&body, sub))
            .transpose()
    }
}

/// Ids go into the URL path verbatim, so only unreserved characters are allowed.
fn check_segment(id: &str) -> Result<()> {
    let plain = !id.is_empty()
        && id != "."
        && id != ".."
        && id.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
    if plain {
        Ok(())
    } else {
        Err(Error::InvalidId(id.to_string()))
    }
}

/// Decode an API body, accepting both bare and `{"data": ...}` payloads.
pub fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T> {
    let decode_err = |source| Error::Decode { what: what.to_string(), source };
    let inner = match serde_json::from_str::<Value>(body).map_err(decode_err)? {
        Value::Object(mut fields) => match fields.remove("data") {
            Some(data) => data,
            None => Value::Object(fields),
        },
        other => other,
    };
    serde_json::from_value(inner).map_err(decode_err)
}
