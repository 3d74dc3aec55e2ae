//! Library layer for the Luxor controller: configuration, input validation,
//! a by-name method registry, checked list edits and multi-call helpers.
//!
//! Wraps the `luxor_api` crate, which owns the wire protocol and the
//! per-call execution rules.

pub mod config;
pub mod error;
pub mod lists;
pub mod registry;
pub mod scenes;
pub mod validation;

pub use luxor_api;
pub use luxor_api::types;
pub use luxor_api::{
    methods, CallContext, CancelReason, CancellationToken, Controller, DeviceStatus, Method,
    Reply, METHOD_NAMES,
};

pub use config::Config;
pub use error::LuxorError;
pub use registry::{DispatchError, Registry};
