//! The method catalogue: one marker type per controller method, plus a typed
//! function on [`Controller`] for each.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::CallContext;
use crate::types::*;
use crate::{Controller, Error};

/// A controller method: its endpoint name and request/response shapes.
pub trait Method: 'static {
    /// Endpoint name; the method is served at `<base>/<NAME>.json`.
    const NAME: &'static str;
    /// An empty JSON object decodes to the default request.
    type Request: Serialize + DeserializeOwned + Default + Send + Sync + 'static;
    type Response: Serialize + DeserializeOwned + HasStatus + Send + 'static;
}

/// Receives every method in the catalogue, see [`visit_methods`].
pub trait MethodVisitor {
    fn visit<M: Method>(&mut self);
}

macro_rules! catalogue {
    ($(
        $(#[$doc:meta])*
        $name:ident => $fn_name:ident($request:ident) -> $response:ident;
    )*) => {
        /// Marker types for every controller method.
        pub mod methods {
            use super::Method;
            use crate::types::*;

            $(
                $(#[$doc])*
                #[derive(Debug, Clone, Copy, Default)]
                pub struct $name;

                impl Method for $name {
                    const NAME: &'static str = stringify!($name);
                    type Request = $request;
                    type Response = $response;
                }
            )*
        }

        /// Names of every controller method, in catalogue order.
        pub const METHOD_NAMES: &[&str] = &[$(stringify!($name)),*];

        /// Calls `visitor` once per method, in catalogue order.
        pub fn visit_methods<V: MethodVisitor>(visitor: &mut V) {
            $(visitor.visit::<methods::$name>();)*
        }

        impl Controller {
            $(
                $(#[$doc])*
                pub async fn $fn_name(
                    &self,
                    ctx: &CallContext,
                    request: &$request,
                ) -> Result<$response, Error> {
                    self.call::<methods::$name>(ctx, request).await
                }
            )*
        }
    };
}

catalogue! {
    /// Assigns a light to a group number by serial number.
    AssignLight => assign_light(AssignLightRequest) -> AssignLightResponse;
    /// Returns the controller's name.
    ControllerName => controller_name(ControllerNameRequest) -> ControllerNameResponse;
    /// Sets every group to 0%, switches all themes off and leaves flash mode.
    ExtinguishAll => extinguish_all(ExtinguishAllRequest) -> ExtinguishAllResponse;
    /// Enters or leaves the mode used while assigning lights to groups.
    FlashLights => flash_lights(FlashLightsRequest) -> FlashLightsResponse;
    /// Adds a group at the end of the list.
    GroupListAdd => group_list_add(GroupListAddRequest) -> GroupListAddResponse;
    /// Deletes all groups.
    GroupListClear => group_list_clear(GroupListClearRequest) -> GroupListClearResponse;
    /// Deletes a group by name.
    GroupListDelete => group_list_delete(GroupListDeleteRequest) -> GroupListDeleteResponse;
    /// Lists all groups with their current intensity.
    GroupListGet => group_list_get(GroupListGetRequest) -> GroupListGetResponse;
    /// Renames a group.
    GroupListRename => group_list_rename(GroupListRenameRequest) -> GroupListRenameResponse;
    /// Reorders the group list.
    GroupListReorder => group_list_reorder(GroupListReorderRequest) -> GroupListReorderResponse;
    /// Illuminates all lights at 75%.
    IlluminateAll => illuminate_all(IlluminateAllRequest) -> IlluminateAllResponse;
    /// Sets one group's intensity without affecting the others.
    IlluminateGroup => illuminate_group(IlluminateGroupRequest) -> IlluminateGroupResponse;
    /// Switches a theme on or off.
    IlluminateTheme => illuminate_theme(IlluminateThemeRequest) -> IlluminateThemeResponse;
    /// Removes all groups from a theme.
    ThemeClear => theme_clear(ThemeClearRequest) -> ThemeClearResponse;
    /// Returns a theme's (group, intensity) list.
    ThemeGet => theme_get(ThemeGetRequest) -> ThemeGetResponse;
    /// Adds a theme.
    ThemeListAdd => theme_list_add(ThemeListAddRequest) -> ThemeListAddResponse;
    /// Deletes all themes.
    ThemeListClear => theme_list_clear(ThemeListClearRequest) -> ThemeListClearResponse;
    /// Deletes a theme by name.
    ThemeListDelete => theme_list_delete(ThemeListDeleteRequest) -> ThemeListDeleteResponse;
    /// Lists themes and whether each is on, without their definitions.
    ThemeListGet => theme_list_get(ThemeListGetRequest) -> ThemeListGetResponse;
    /// Renames a theme.
    ThemeListRename => theme_list_rename(ThemeListRenameRequest) -> ThemeListRenameResponse;
    /// Reorders the theme list.
    ThemeListReorder => theme_list_reorder(ThemeListReorderRequest) -> ThemeListReorderResponse;
    /// Redefines a theme's (group, intensity) list.
    ThemeSet => theme_set(ThemeSetRequest) -> ThemeSetResponse;
}
