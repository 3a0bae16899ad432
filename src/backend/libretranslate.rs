//! Client for LibreTranslate-compatible translation services.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

/// HTTP client posting to `<endpoint>/translate`.
#[derive(Debug, Clone)]
pub struct LibreTranslateClient {
    http: reqwest::Client,
    url: Url,
    source: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    /// Create a client for `endpoint`, translating from `source`.
    pub fn new(endpoint: &str, source: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let url = translate_url(endpoint)?;
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { http, url, source: source.into(), api_key })
    }

    /// The full URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Translate one string into `target`.
    pub async fn translate(&self, text: &str, target: &str) -> Result<String> {
        let request = TranslateRequest {
            q: text,
            source: &self.source,
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self.http.post(self.url.clone()).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::translation(format!(
                "{} returned {}: {}",
                self.url,
                status,
                body.trim()
            )));
        }

        let body: TranslateResponse = response.json().await?;
        Ok(body.translated_text)
    }
}

/// Build `<endpoint>/translate`, keeping any path prefix of the endpoint.
fn translate_url(endpoint: &str) -> Result<Url> {
    let mut base = Url::parse(endpoint)
        .map_err(|e| Error::invalid_arg(format!("Invalid endpoint '{endpoint}': {e}")))?;

    if base.cannot_be_a_base() {
        return Err(Error::invalid_arg(format!("Invalid endpoint '{endpoint}'")));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join("translate")
        .map_err(|e| Error::invalid_arg(format!("Invalid endpoint '{endpoint}': {e}")))
}
