//! HTTP client for the BatteryIncluded documents API.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::context::{PipelineContext, StepLog};
use crate::error::{AdapterError, RequestFailure, Result};
use crate::query::Query;

pub const API_KEY_HEADER: &str = "x-bi-api-key";
const CONTENT_TYPE_NDJSON: &str = "application/x-ndjson";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Document endpoints exposed by a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Browse,
    Suggest,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Browse => "/browse",
            Endpoint::Suggest => "/suggest",
        }
    }
}

pub struct BatteryIncludedClient {
    http: reqwest::Client,
    base_url: String,
    collection: String,
    log: Arc<dyn StepLog>,
}

impl BatteryIncludedClient {
    /// Builds a client from the step context, failing fast on missing
    /// `publicApiKey`, `baseUrl` or `collection`.
    pub fn new(ctx: &PipelineContext) -> Result<Self> {
        Self::with_timeout(ctx, REQUEST_TIMEOUT)
    }

    pub(crate) fn with_timeout(ctx: &PipelineContext, timeout: Duration) -> Result<Self> {
        let config = &ctx.config;
        config.validate()?;

        let mut api_key = HeaderValue::from_str(config.public_api_key.trim()).map_err(|_| {
            AdapterError::Configuration("publicApiKey is not a valid header value".into())
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_NDJSON));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| AdapterError::RequestFailed {
                status: None,
                cause: RequestFailure::Transport(e),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            collection: config.collection.trim().to_string(),
            log: ctx.log.clone(),
        })
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/api/v1/collections/{}/documents{}",
            self.base_url,
            self.collection,
            endpoint.path()
        )
    }

    /// Sends one GET request and returns the JSON body as-is.
    ///
    /// Any transport failure, non-2xx status or undecodable body is logged
    /// and returned as [`AdapterError::RequestFailed`]. There are no retries.
    pub async fn call(&self, endpoint: Endpoint, query: &Query) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        let query_keys: Vec<&str> = query.keys().collect();
        self.log.debug(&format!(
            "BatteryIncluded: request start url={url} query_keys={query_keys:?}"
        ));

        let response = match self.http.get(&url).query(&query.to_pairs()).send().await {
            Ok(response) => response,
            Err(e) => {
                let status = e.status().map(|s| s.as_u16());
                return Err(self.failed(&url, status, RequestFailure::Transport(e)));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let failure = RequestFailure::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            };
            return Err(self.failed(&url, Some(status.as_u16()), failure));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| self.failed(&url, Some(status.as_u16()), RequestFailure::Transport(e)))
    }

    fn failed(&self, url: &str, status: Option<u16>, cause: RequestFailure) -> AdapterError {
        let (status_text, body) = match &cause {
            RequestFailure::Status {
                status_text, body, ..
            } => (status_text.as_str(), body.as_str()),
            RequestFailure::Transport(_) => ("", ""),
        };
        let kind = match &cause {
            RequestFailure::Transport(e) if e.is_timeout() => "timeout",
            RequestFailure::Transport(e) if e.is_connect() => "connect",
            RequestFailure::Transport(e) if e.is_decode() => "decode",
            RequestFailure::Transport(_) => "transport",
            RequestFailure::Status { .. } => "status",
        };
        let status_display = status.map_or_else(|| "-".to_string(), |s| s.to_string());
        self.log.error(&format!(
            "BatteryIncluded: request failed url={url} status={status_display} \
             status_text={status_text:?} body={body:?} kind={kind} error={cause}"
        ));
        AdapterError::RequestFailed { status, cause }
    }
}
