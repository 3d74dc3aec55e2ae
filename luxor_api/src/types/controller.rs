//! Controller-wide methods: naming, light assignment and all-lights switching.

use serde::{Deserialize, Serialize};

use super::HasStatus;

/// Assigns a light to a group number by its serial number.
///
/// Serial numbers are normally learned with a dongle attached to the phone's
/// audio port, through a separate protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssignLightRequest {
    pub serial_number: i64,
    pub group_number: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AssignLightResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ControllerNameRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ControllerNameResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
    /// The controller's configured name.
    pub controller: String,
}

/// Sets every group to 0%, switches all themes off and leaves flash mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExtinguishAllRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExtinguishAllResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

/// Enters (`on_off != 0`) or leaves the mode used while assigning lights.
///
/// In this mode every light is on at 100%, which group intensities do not
/// reflect. Leaving it turns all lights off and resets intensities to 0%.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FlashLightsRequest {
    pub on_off: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FlashLightsResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

/// Illuminates every light at 75%.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IlluminateAllRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IlluminateAllResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

impl_has_status!(
    AssignLightResponse,
    ControllerNameResponse,
    ExtinguishAllResponse,
    FlashLightsResponse,
    IlluminateAllResponse,
);
