//! Executes one JSON-over-HTTP exchange per call, racing it against the
//! call's cancellation signal and deadline.
//!
//! The executor validates the transport (HTTP status, content type) and
//! decodes the body, but never looks at the application-level `Status` field;
//! that is the facade's job.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::context::{CallContext, CancelReason};
use crate::errors::{truncate_body, Error};

const JSON_CONTENT_TYPE: &str = "application/json";

/// What came back from one completed exchange.
struct RawExchange {
    status: StatusCode,
    content_type: String,
    body: String,
}

/// Sends requests to `<base_url>/<endpoint>.json`.
///
/// Holds only the base URL and a `reqwest::Client`, whose connection pool is
/// shared by clones. Calls are independent and may run concurrently.
#[derive(Clone, Debug)]
pub struct RequestExecutor {
    http: reqwest::Client,
    base_url: String,
}

impl RequestExecutor {
    /// Creates an executor with a default HTTP client. No client-level
    /// timeout is set; deadlines come from each call's context.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::ClientBuild(e)
        })?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Creates an executor that shares an existing HTTP client.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}.json", self.base_url, endpoint)
    }

    /// Performs one exchange for `endpoint` and decodes the response body.
    ///
    /// Returns `Error::Canceled` without any network I/O if `ctx` is already
    /// canceled or its deadline has passed. Otherwise the exchange races
    /// `ctx`: if cancellation wins, the in-flight exchange is dropped (closing
    /// its connection) and its result is never observed.
    pub async fn execute<Req, Resp>(
        &self,
        ctx: &CallContext,
        endpoint: &str,
        request: &Req,
    ) -> Result<Resp, Error>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let canceled = |reason: CancelReason| {
            tracing::warn!(method = endpoint, %reason, "Call canceled");
            Error::Canceled {
                method: endpoint.to_string(),
                reason,
            }
        };

        if ctx.token().is_cancelled() {
            return Err(canceled(CancelReason::Requested));
        }
        let timeout = match ctx.remaining() {
            Some(remaining) if remaining.is_zero() => {
                return Err(canceled(CancelReason::DeadlineElapsed))
            }
            remaining => remaining,
        };

        let body = serde_json::to_vec(request).map_err(|source| {
            tracing::error!(method = endpoint, "Failed to serialize request: {}", source);
            Error::Serialization {
                method: endpoint.to_string(),
                source,
            }
        })?;

        let url_text = self.endpoint_url(endpoint);
        let transport = |source: crate::errors::BoxError| {
            tracing::error!(method = endpoint, url = %url_text, "Request failed: {}", source);
            Error::Transport {
                method: endpoint.to_string(),
                url: url_text.clone(),
                source,
            }
        };
        let url = Url::parse(&url_text).map_err(|e| transport(Box::new(e)))?;

        let mut builder = self
            .http
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(method = endpoint, url = %url_text, ?timeout, "Dispatching request");
        let outcome = tokio::select! {
            biased;
            reason = ctx.done() => Err(reason),
            result = exchange(builder) => Ok(result),
        };

        let raw = match outcome {
            Err(reason) => return Err(canceled(reason)),
            // The transport timeout is derived from the deadline.
            Ok(Err(e)) if e.is_timeout() && timeout.is_some() => {
                return Err(canceled(CancelReason::DeadlineElapsed))
            }
            Ok(Err(e)) => return Err(transport(Box::new(e))),
            Ok(Ok(raw)) => raw,
        };

        if raw.status != StatusCode::OK {
            let body = truncate_body(&raw.body);
            tracing::error!(method = endpoint, "Request failed with status {}: {}", raw.status, body);
            return Err(Error::HttpStatus {
                method: endpoint.to_string(),
                status: raw.status,
                body,
            });
        }

        if raw.content_type != JSON_CONTENT_TYPE {
            let body = truncate_body(&raw.body);
            tracing::error!(
                method = endpoint,
                "Unexpected content type {:?}: {}",
                raw.content_type,
                body
            );
            return Err(Error::ContentType {
                method: endpoint.to_string(),
                content_type: raw.content_type,
                body,
            });
        }

        let parsed = serde_json::from_str::<Resp>(&raw.body).map_err(|source| {
            let body = truncate_body(&raw.body);
            tracing::error!(method = endpoint, "Failed to parse response: {} | body: {}", source, body);
            Error::MalformedResponse {
                method: endpoint.to_string(),
                source,
                body,
            }
        })?;

        tracing::debug!(method = endpoint, "Request completed");
        Ok(parsed)
    }
}

/// Sends the request and reads the whole body.
async fn exchange(builder: reqwest::RequestBuilder) -> Result<RawExchange, reqwest::Error> {
    let resp = builder.send().await?;
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();
    let body = resp.text().await?;
    Ok(RawExchange {
        status,
        content_type,
        body,
    })
}
