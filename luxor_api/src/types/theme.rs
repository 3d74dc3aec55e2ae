//! Theme types.
//!
//! A theme is a stored list of (group number, intensity) pairs, addressed by
//! an index in `0..=25` that the app shows as a letter. Switching a theme on
//! sets its groups to the stored intensities; switching it off sets them to
//! 0%. If a theme lists a group more than once, the last entry wins.

use serde::{Deserialize, Serialize};

use super::HasStatus;

/// A theme as listed by `ThemeListGet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Theme {
    pub name: String,
    pub theme_index: u8,
    /// Whether the last `IlluminateTheme` or `ExtinguishAll` left it on.
    pub on_off: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeGroup {
    pub group_number: u8,
    pub intensity: u8,
}

/// Switches a theme on (`on_off != 0`) or off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IlluminateThemeRequest {
    pub theme_index: u8,
    pub on_off: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IlluminateThemeResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

/// Removes every group from a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeClearRequest {
    pub theme_index: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeClearResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeGetRequest {
    pub theme_index: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeGetResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
    pub groups: Vec<ThemeGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListAddRequest {
    pub theme_index: u8,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListAddResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListClearRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListClearResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListDeleteRequest {
    pub name: String,
}

/// Status is `InvalidRequest` when themes are restricted, or
/// `PreconditionFailed` when the theme does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListDeleteResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListGetRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListGetResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
    /// Non-zero when themes are restricted in the controller's setup menu,
    /// in which case some theme operations are refused.
    pub restricted: i64,
    pub theme_list: Vec<Theme>,
}

impl ThemeListGetResponse {
    pub fn is_restricted(&self) -> bool {
        self.restricted != 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListRenameRequest {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListRenameResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListReorderRequest {
    pub theme_indexes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeListReorderResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

/// Replaces a theme's (group, intensity) list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeSetRequest {
    pub theme_index: u8,
    pub groups: Vec<ThemeGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ThemeSetResponse {
    #[serde(deserialize_with = "super::null_as_zero")]
    pub status: i64,
}

impl_has_status!(
    IlluminateThemeResponse,
    ThemeClearResponse,
    ThemeGetResponse,
    ThemeListAddResponse,
    ThemeListClearResponse,
    ThemeListDeleteResponse,
    ThemeListGetResponse,
    ThemeListRenameResponse,
    ThemeListReorderResponse,
    ThemeSetResponse,
);
