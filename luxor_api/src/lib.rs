//! Client for the FX Luminaire Luxor ZD wi-fi lighting controller.
//!
//! Every controller method is a JSON-over-HTTP endpoint. A call serializes a
//! typed request, performs one exchange raced against the caller's
//! [`CallContext`], checks the transport, decodes the response and finally
//! maps the response's `Status` field to an error.
mod client;
mod context;
mod errors;
mod executor;
mod method;
pub mod status;
pub mod types;
pub use self::client::{Controller, Reply, DEFAULT_BASE_URL};
pub use self::context::{CallContext, CancelReason};
pub use self::errors::{BoxError, Error};
pub use self::executor::RequestExecutor;
pub use self::method::{methods, visit_methods, Method, MethodVisitor, METHOD_NAMES};
pub use self::status::{error_for_status, DeviceStatus, StatusError};

pub use tokio_util::sync::CancellationToken;
