//! Request and response types for every controller method.
//!
//! Field names follow the controller's PascalCase JSON. Fields missing from a
//! response decode to their defaults, including `Status`, which then reads as
//! success.

use serde::Deserialize;

/// Highest intensity that produces more light; larger values are accepted by
/// the controller but are no brighter.
pub const MAX_INTENSITY: u8 = 100;

/// Highest theme index; themes are shown as letters `A` through `Z`.
pub const MAX_THEME_INDEX: u8 = 25;

/// Longest group or theme name in bytes. The controller truncates longer names.
pub const MAX_NAME_LENGTH: usize = 19;

/// Reads `"Status": null` as 0, the same as a missing `Status`.
fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Access to the application-level `Status` field every response carries.
pub trait HasStatus {
    fn status(&self) -> i64;
}

macro_rules! impl_has_status {
    ($($response:ty),* $(,)?) => {
        $(
            impl HasStatus for $response {
                fn status(&self) -> i64 {
                    self.status
                }
            }
        )*
    };
}

mod controller;
pub use self::controller::{
    AssignLightRequest, AssignLightResponse, ControllerNameRequest, ControllerNameResponse,
    ExtinguishAllRequest, ExtinguishAllResponse, FlashLightsRequest, FlashLightsResponse,
    IlluminateAllRequest, IlluminateAllResponse,
};

mod group;
pub use self::group::{
    Group, GroupListAddRequest, GroupListAddResponse, GroupListClearRequest,
    GroupListClearResponse, GroupListDeleteRequest, GroupListDeleteResponse, GroupListGetRequest,
    GroupListGetResponse, GroupListRenameRequest, GroupListRenameResponse,
    GroupListReorderRequest, GroupListReorderResponse, IlluminateGroupRequest,
    IlluminateGroupResponse,
};

mod theme;
pub use self::theme::{
    IlluminateThemeRequest, IlluminateThemeResponse, Theme, ThemeClearRequest,
    ThemeClearResponse, ThemeGetRequest, ThemeGetResponse, ThemeGroup, ThemeListAddRequest,
    ThemeListAddResponse, ThemeListClearRequest, ThemeListClearResponse, ThemeListDeleteRequest,
    ThemeListDeleteResponse, ThemeListGetRequest, ThemeListGetResponse, ThemeListRenameRequest,
    ThemeListRenameResponse, ThemeListReorderRequest, ThemeListReorderResponse, ThemeSetRequest,
    ThemeSetResponse,
};
