//! Calls controller methods chosen at runtime by name, with JSON text as the
//! request and a JSON value as the response.
//!
//! Every method is registered explicitly; each entry decodes the request into
//! the method's typed request, calls it through [`Controller::call`] and
//! encodes the typed response.

use std::collections::BTreeMap;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;

use luxor_api::{visit_methods, CallContext, Controller, Method, MethodVisitor};
use serde_json::Value;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Errors from dispatching a method by name.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("no such method {0:?}")]
    UnknownMethod(String),
    #[error("invalid {method} request: {source}")]
    BadRequest {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Call(#[from] luxor_api::Error),
    #[error("failed to encode {method} response: {source}")]
    Encode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

trait Handler: Send + Sync {
    fn invoke(
        &self,
        controller: Controller,
        ctx: CallContext,
        request: Option<&str>,
    ) -> BoxFuture<Result<Value, DispatchError>>;
}

struct MethodHandler<M>(PhantomData<fn() -> M>);

impl<M: Method> Handler for MethodHandler<M> {
    fn invoke(
        &self,
        controller: Controller,
        ctx: CallContext,
        request: Option<&str>,
    ) -> BoxFuture<Result<Value, DispatchError>> {
        let decoded = decode_request::<M>(request);
        Box::pin(async move {
            let request = decoded?;
            let response = controller.call::<M>(&ctx, &request).await?;
            serde_json::to_value(&response).map_err(|source| DispatchError::Encode {
                method: M::NAME,
                source,
            })
        })
    }
}

/// Absent or blank request text means the method's default request.
fn decode_request<M: Method>(request: Option<&str>) -> Result<M::Request, DispatchError> {
    match request.map(str::trim).filter(|text| !text.is_empty()) {
        None => Ok(M::Request::default()),
        Some(text) => serde_json::from_str(text).map_err(|source| DispatchError::BadRequest {
            method: M::NAME,
            source,
        }),
    }
}

/// Name-to-method table for dynamic dispatch.
#[derive(Default)]
pub struct Registry {
    handlers: BTreeMap<&'static str, Box<dyn Handler>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every controller method.
    pub fn with_all_methods() -> Self {
        let mut registry = Self::new();
        visit_methods(&mut registry);
        registry
    }

    pub fn register<M: Method>(&mut self) -> &mut Self {
        self.handlers
            .insert(M::NAME, Box::new(MethodHandler::<M>(PhantomData)));
        self
    }

    /// Registered method names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Calls the method named `name` with `request` as its JSON request.
    ///
    /// A missing or blank request uses the method's default request. The
    /// call follows the same rules as the typed [`Controller`] methods,
    /// including failing on a non-zero status.
    pub async fn dispatch(
        &self,
        controller: &Controller,
        ctx: &CallContext,
        name: &str,
        request: Option<&str>,
    ) -> Result<Value, DispatchError> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| DispatchError::UnknownMethod(name.to_string()))?;
        tracing::debug!(method = name, "Dispatching by name");
        handler
            .invoke(controller.clone(), ctx.clone(), request)
            .await
    }
}

impl MethodVisitor for Registry {
    fn visit<M: Method>(&mut self) {
        self.register::<M>();
    }
}
