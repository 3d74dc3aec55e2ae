//! Application-level status codes reported in the `Status` field of every response.

use std::fmt;

/// A status code reported by the controller.
///
/// The known codes are the ones documented for the Luxor ZD module. Any other
/// integer is still a valid status and is kept as `Unrecognized` so the raw
/// value reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceStatus {
    Ok,
    UnknownMethod,
    UnparseableRequest,
    InvalidRequest,
    PreconditionFailed,
    GroupNameInUse,
    GroupNumberInUse,
    ThemeIndexOutOfRange,
    Unrecognized(i64),
}

/// Code and description of every known status.
const STATUS_TABLE: &[(DeviceStatus, i64, &str)] = &[
    (DeviceStatus::Ok, 0, "ok"),
    (DeviceStatus::UnknownMethod, 1, "unknown method"),
    (DeviceStatus::UnparseableRequest, 101, "unparseable request"),
    (DeviceStatus::InvalidRequest, 102, "invalid request"),
    (DeviceStatus::PreconditionFailed, 201, "precondition failed"),
    (DeviceStatus::GroupNameInUse, 202, "group name in use"),
    (DeviceStatus::GroupNumberInUse, 205, "group number in use"),
    (DeviceStatus::ThemeIndexOutOfRange, 243, "theme index out of range"),
];

impl DeviceStatus {
    /// All statuses with a documented code, in ascending code order.
    pub const KNOWN: [DeviceStatus; 8] = [
        DeviceStatus::Ok,
        DeviceStatus::UnknownMethod,
        DeviceStatus::UnparseableRequest,
        DeviceStatus::InvalidRequest,
        DeviceStatus::PreconditionFailed,
        DeviceStatus::GroupNameInUse,
        DeviceStatus::GroupNumberInUse,
        DeviceStatus::ThemeIndexOutOfRange,
    ];

    pub fn from_code(code: i64) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(status, _, _)| *status)
            .unwrap_or(DeviceStatus::Unrecognized(code))
    }

    pub fn code(self) -> i64 {
        match self {
            DeviceStatus::Unrecognized(code) => code,
            known => STATUS_TABLE
                .iter()
                .find(|(s, _, _)| *s == known)
                .map(|(_, code, _)| *code)
                .unwrap_or_default(),
        }
    }

    /// The table description, or `None` for an unrecognized code.
    pub fn description(self) -> Option<&'static str> {
        STATUS_TABLE
            .iter()
            .find(|(s, _, _)| *s == self)
            .map(|(_, _, description)| *description)
    }

    pub fn is_ok(self) -> bool {
        self == DeviceStatus::Ok
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => f.write_str(description),
            None => write!(f, "unknown status {}", self.code()),
        }
    }
}

/// A non-zero status reported by the controller.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{status}")]
pub struct StatusError {
    status: DeviceStatus,
}

impl StatusError {
    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    pub fn code(&self) -> i64 {
        self.status.code()
    }
}

/// Returns `Ok(())` for status 0 and a `StatusError` for anything else.
///
/// Known codes produce an error whose message is exactly the table
/// description; unknown codes produce `unknown status <code>`.
pub fn error_for_status(code: i64) -> Result<(), StatusError> {
    match DeviceStatus::from_code(code) {
        DeviceStatus::Ok => Ok(()),
        status => Err(StatusError { status }),
    }
}
