//! Error types for the controller client.

use crate::context::CancelReason;
use crate::status::StatusError;

/// Boxed cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every way a call to the controller can fail.
///
/// All variants carry the method name so an error can be diagnosed without
/// re-running the call.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The call's context was canceled or its deadline passed. Nothing from
    /// the exchange, if one was started, is observed.
    #[error("{method}: {reason}")]
    Canceled { method: String, reason: CancelReason },

    /// The request could not be serialized. Nothing was sent.
    #[error("failed to serialize {method} request: {source}")]
    Serialization {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// Connection, DNS, TLS, URL or body-read failure.
    #[error("{method} request to {url} failed: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: BoxError,
    },

    /// The controller answered with something other than HTTP 200.
    #[error("{method}: unexpected HTTP status: {status} with body: {body:?}")]
    HttpStatus {
        method: String,
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response was not labeled `application/json`.
    #[error("{method}: unexpected response content type: {content_type:?} with body: {body:?}")]
    ContentType {
        method: String,
        content_type: String,
        body: String,
    },

    /// The body did not parse into the expected response shape.
    #[error("{method}: JSON error: {source} while parsing body: {body:?}")]
    MalformedResponse {
        method: String,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The exchange succeeded but the controller reported a non-zero status.
    #[error("{method}: {source}")]
    Status {
        method: String,
        #[source]
        source: StatusError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl Error {
    /// The method the failed call was for, if any.
    pub fn method(&self) -> Option<&str> {
        match self {
            Error::Canceled { method, .. }
            | Error::Serialization { method, .. }
            | Error::Transport { method, .. }
            | Error::HttpStatus { method, .. }
            | Error::ContentType { method, .. }
            | Error::MalformedResponse { method, .. }
            | Error::Status { method, .. } => Some(method.as_str()),
            Error::ClientBuild(_) => None,
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Error::Canceled { .. })
    }

    /// The application-level status error, when the transport succeeded.
    pub fn status(&self) -> Option<&StatusError> {
        match self {
            Error::Status { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Bodies are kept verbatim up to this many bytes.
const MAX_BODY_BYTES: usize = 2000;

pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_BYTES {
        return body.to_string();
    }
    let mut end = MAX_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
