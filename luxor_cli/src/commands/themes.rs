use anyhow::Result;
use clap::Args;
use luxor_lib::types::ThemeListGetRequest;
use luxor_lib::{lists, scenes, validation, CancellationToken, Config};

use crate::output::{print_json, print_themes_table, OutputFormat};

#[derive(Args)]
pub struct ThemeArgs {
    /// Theme letter (A-Z) or index (0-25)
    pub theme: String,

    /// Switch the theme off instead of on
    #[arg(long)]
    pub off: bool,
}

#[derive(Args)]
pub struct ThemeReorderArgs {
    /// Every current theme, as letters or indexes, in the new order
    #[arg(required = true, num_args = 1..)]
    pub themes: Vec<String>,
}

pub async fn run(config: &Config, shutdown: &CancellationToken, format: &OutputFormat) -> Result<()> {
    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    let resp = controller.theme_list_get(&ctx, &ThemeListGetRequest {}).await?;
    if resp.is_restricted() {
        tracing::warn!("Themes are restricted in the controller's setup menu");
    }
    match format {
        OutputFormat::Table => print_themes_table(&resp.theme_list),
        OutputFormat::Json => print_json(&resp),
    }
    Ok(())
}

pub async fn set(args: &ThemeArgs, config: &Config, shutdown: &CancellationToken) -> Result<()> {
    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    let index = scenes::set_theme(&controller, &ctx, &args.theme, !args.off).await?;
    tracing::info!(index, on = !args.off, "Theme switched");
    Ok(())
}

pub async fn illuminate_all(
    config: &Config,
    shutdown: &CancellationToken,
    format: &OutputFormat,
) -> Result<()> {
    let controller = config.controller()?;
    // One deadline covers the whole sequence of calls.
    let ctx = config.call_context(shutdown);
    let themes = scenes::illuminate_all_themes(&controller, &ctx).await?;
    match format {
        OutputFormat::Table => print_themes_table(&themes),
        OutputFormat::Json => print_json(&themes),
    }
    Ok(())
}

pub async fn reorder(
    args: &ThemeReorderArgs,
    config: &Config,
    shutdown: &CancellationToken,
) -> Result<()> {
    let order = args
        .themes
        .iter()
        .map(|theme| validation::parse_theme(theme))
        .collect::<Result<Vec<u8>, _>>()?;
    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    lists::reorder_themes(&controller, &ctx, &order).await?;
    Ok(())
}
