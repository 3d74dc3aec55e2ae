//! Typed client for the Luxor ZD controller.

use crate::context::CallContext;
use crate::executor::RequestExecutor;
use crate::method::Method;
use crate::status::{error_for_status, DeviceStatus};
use crate::types::HasStatus;
use crate::Error;

/// Default address of the controller on a home network.
pub const DEFAULT_BASE_URL: &str = "http://luxor";

/// Client for the controller's JSON-over-HTTP methods.
///
/// Each method issues exactly one HTTP exchange and fails if either the
/// exchange fails or the controller reports a non-zero `Status`. The client
/// holds no per-call state, so one instance can serve concurrent calls.
#[derive(Clone, Debug)]
pub struct Controller {
    executor: RequestExecutor,
}

/// A decoded response together with the status it carried.
///
/// Returned by [`Controller::call_with_status`] once the exchange itself has
/// succeeded, so the response data is available even when the controller
/// reported a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    /// Name of the method that produced the response.
    pub method: &'static str,
    pub response: T,
    pub status: DeviceStatus,
}

impl<T> Reply<T> {
    /// Converts to the facade result, failing on a non-zero status.
    pub fn into_result(self) -> Result<T, Error> {
        match error_for_status(self.status.code()) {
            Ok(()) => Ok(self.response),
            Err(source) => Err(Error::Status {
                method: self.method.to_string(),
                source,
            }),
        }
    }
}

impl Controller {
    /// Creates a client pointing at the controller's default address.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            executor: RequestExecutor::new(base_url)?,
        })
    }

    /// Creates a client around an existing executor.
    pub fn with_executor(executor: RequestExecutor) -> Self {
        Self { executor }
    }

    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }

    /// Calls method `M`, failing on transport errors and non-zero statuses.
    pub async fn call<M: Method>(
        &self,
        ctx: &CallContext,
        request: &M::Request,
    ) -> Result<M::Response, Error> {
        self.call_with_status::<M>(ctx, request)
            .await?
            .into_result()
    }

    /// Calls method `M`, failing only on transport and decoding errors.
    pub async fn call_with_status<M: Method>(
        &self,
        ctx: &CallContext,
        request: &M::Request,
    ) -> Result<Reply<M::Response>, Error> {
        let response: M::Response = self.executor.execute(ctx, M::NAME, request).await?;
        let status = DeviceStatus::from_code(response.status());
        if !status.is_ok() {
            tracing::warn!(method = M::NAME, code = status.code(), "Controller reported {}", status);
        }
        Ok(Reply {
            method: M::NAME,
            response,
            status,
        })
    }
}
