//! Checked edits of the group and theme lists.
//!
//! Each helper validates its input before any request is sent, since the
//! controller truncates or clamps bad values instead of rejecting them.

use luxor_api::types::{
    GroupListAddRequest, GroupListGetRequest, GroupListRenameRequest, GroupListReorderRequest,
    IlluminateGroupRequest, ThemeListGetRequest, ThemeListReorderRequest,
};
use luxor_api::{CallContext, Controller};

use crate::error::LuxorError;
use crate::validation;

/// Appends a group for `group_number`. Returns the trimmed name sent.
pub async fn add_group(
    controller: &Controller,
    ctx: &CallContext,
    group_number: u8,
    name: &str,
) -> Result<String, LuxorError> {
    let name = validation::validate_name(name)?;
    controller
        .group_list_add(
            ctx,
            &GroupListAddRequest {
                group_number,
                name: name.clone(),
            },
        )
        .await?;
    Ok(name)
}

pub async fn rename_group(
    controller: &Controller,
    ctx: &CallContext,
    old_name: &str,
    new_name: &str,
) -> Result<String, LuxorError> {
    let new_name = validation::validate_name(new_name)?;
    controller
        .group_list_rename(
            ctx,
            &GroupListRenameRequest {
                old_name: old_name.trim().to_string(),
                new_name: new_name.clone(),
            },
        )
        .await?;
    Ok(new_name)
}

/// Sets one group's intensity, leaving the others as they are.
pub async fn set_group_intensity(
    controller: &Controller,
    ctx: &CallContext,
    group_number: u8,
    intensity: u8,
) -> Result<(), LuxorError> {
    let intensity = validation::validate_intensity(intensity)?;
    controller
        .illuminate_group(
            ctx,
            &IlluminateGroupRequest {
                group_number,
                intensity,
            },
        )
        .await?;
    Ok(())
}

/// Reorders the group list. `order` must name every current group number
/// exactly once; the current list is fetched to check that first.
pub async fn reorder_groups(
    controller: &Controller,
    ctx: &CallContext,
    order: &[u8],
) -> Result<(), LuxorError> {
    let current: Vec<u8> = controller
        .group_list_get(ctx, &GroupListGetRequest {})
        .await?
        .group_list
        .iter()
        .map(|group| group.group_number)
        .collect();
    validation::validate_reorder(&current, order)?;
    tracing::info!(?order, "Reordering groups");
    controller
        .group_list_reorder(
            ctx,
            &GroupListReorderRequest {
                group_numbers: order.to_vec(),
            },
        )
        .await?;
    Ok(())
}

/// Reorders the theme list, checked against the current theme indexes.
pub async fn reorder_themes(
    controller: &Controller,
    ctx: &CallContext,
    order: &[u8],
) -> Result<(), LuxorError> {
    let current: Vec<u8> = controller
        .theme_list_get(ctx, &ThemeListGetRequest {})
        .await?
        .theme_list
        .iter()
        .map(|theme| theme.theme_index)
        .collect();
    validation::validate_reorder(&current, order)?;
    tracing::info!(?order, "Reordering themes");
    controller
        .theme_list_reorder(
            ctx,
            &ThemeListReorderRequest {
                theme_indexes: order.to_vec(),
            },
        )
        .await?;
    Ok(())
}
