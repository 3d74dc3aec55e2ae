//! Helpers that combine several controller calls.

use luxor_api::types::{IlluminateThemeRequest, Theme, ThemeListGetRequest};
use luxor_api::{CallContext, Controller};

use crate::error::LuxorError;
use crate::validation;

/// Switches every theme on, one after another, in list order.
///
/// Stops at the first failed call. Returns the themes that were switched on.
pub async fn illuminate_all_themes(
    controller: &Controller,
    ctx: &CallContext,
) -> Result<Vec<Theme>, LuxorError> {
    let themes = controller
        .theme_list_get(ctx, &ThemeListGetRequest {})
        .await?
        .theme_list;
    for theme in &themes {
        tracing::info!(theme = %theme.name, index = theme.theme_index, "Illuminating theme");
        controller
            .illuminate_theme(
                ctx,
                &IlluminateThemeRequest {
                    theme_index: theme.theme_index,
                    on_off: 1,
                },
            )
            .await?;
    }
    Ok(themes)
}

/// Switches one theme, given as a letter or an index, on or off.
pub async fn set_theme(
    controller: &Controller,
    ctx: &CallContext,
    theme: &str,
    on: bool,
) -> Result<u8, LuxorError> {
    let theme_index = validation::parse_theme(theme)?;
    controller
        .illuminate_theme(
            ctx,
            &IlluminateThemeRequest {
                theme_index,
                on_off: u8::from(on),
            },
        )
        .await?;
    Ok(theme_index)
}
