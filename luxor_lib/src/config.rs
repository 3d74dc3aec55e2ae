//! Connection settings read from the environment.

use std::time::Duration;

use luxor_api::{CallContext, CancellationToken, Controller, DEFAULT_BASE_URL};

use crate::error::LuxorError;

pub const BASE_URL_VAR: &str = "LUXOR_BASE_URL";
pub const TIMEOUT_VAR: &str = "LUXOR_TIMEOUT_SECS";

/// Per-call deadline used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the controller lives and how long each call may take.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    /// Deadline applied to every call, measured from when its context is made.
    /// `None` leaves calls bounded only by explicit cancellation.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl Config {
    /// Reads `LUXOR_BASE_URL` and `LUXOR_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, LuxorError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] but with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LuxorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = env_string(&lookup, BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(raw) = env_string(&lookup, TIMEOUT_VAR) {
            config.timeout = Some(parse_timeout(&raw, TIMEOUT_VAR)?);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a controller client for the configured address.
    pub fn controller(&self) -> Result<Controller, LuxorError> {
        Ok(Controller::with_base_url(&self.base_url)?)
    }

    /// A context for one call: canceled with `token`, and carrying the
    /// configured deadline starting now.
    pub fn call_context(&self, token: &CancellationToken) -> CallContext {
        let ctx = CallContext::from_token(token.child_token());
        match self.timeout {
            Some(timeout) => ctx.with_timeout(timeout),
            None => ctx,
        }
    }
}

fn env_string<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses a positive number of seconds, fractions allowed. `source` names
/// where the value came from (a variable or a flag) in the error message.
pub fn parse_timeout(raw: &str, source: &str) -> Result<Duration, LuxorError> {
    let secs: f64 = raw.trim().parse().map_err(|_| {
        LuxorError::Config(format!(
            "{} must be a number of seconds, got {:?}",
            source, raw
        ))
    })?;
    match Duration::try_from_secs_f64(secs) {
        Ok(timeout) if !timeout.is_zero() => Ok(timeout),
        _ => Err(LuxorError::Config(format!(
            "{} must be greater than zero, got {:?}",
            source, raw
        ))),
    }
}
