//! Group types. A group names one group number and is shown in a
//! user-controlled order; groups persist across controller restarts.

use serde::{Deserialize, Serialize};

use super::HasStatus;

/// A named group and the current intensity of its group number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Group {
    pub group_number: u8,
    pub intensity: u8,
    pub name: String,
}

/// Appends a group to the list. Names longer than
/// [`MAX_NAME_LENGTH`](super::MAX_NAME_LENGTH) are truncated by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListAddRequest {
    pub group_number: u8,
    pub name: String,
}

/// Status is `GroupNumberInUse` or `GroupNameInUse` when either is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListAddResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListClearRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListClearResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
    pub group_list: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListDeleteRequest {
    pub name: String,
}

/// Status is `PreconditionFailed` if the group does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListDeleteResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListGetRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListGetResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
    pub group_list: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListRenameRequest {
    pub old_name: String,
    pub new_name: String,
}

/// Status is `GroupNameInUse` if the new name is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListRenameResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

/// The new order must list every existing group number exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListReorderRequest {
    pub group_numbers: Vec<u8>,
}

/// Status is `PreconditionFailed` if the order was not a permutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupListReorderResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

/// Sets one group number's intensity without touching the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IlluminateGroupRequest {
    pub group_number: u8,
    pub intensity: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IlluminateGroupResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

impl_has_status!(
    GroupListAddResponse,
    GroupListClearResponse,
    GroupListDeleteResponse,
    GroupListGetResponse,
    GroupListRenameResponse,
    GroupListReorderResponse,
    IlluminateGroupResponse,
);
