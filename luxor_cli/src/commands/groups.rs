use anyhow::Result;
use clap::Args;
use luxor_lib::types::GroupListGetRequest;
use luxor_lib::{lists, CancellationToken, Config};

use crate::output::{print_groups_table, print_json, OutputFormat};

pub async fn run(config: &Config, shutdown: &CancellationToken, format: &OutputFormat) -> Result<()> {
    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    let resp = controller.group_list_get(&ctx, &GroupListGetRequest {}).await?;
    match format {
        OutputFormat::Table => print_groups_table(&resp.group_list),
        OutputFormat::Json => print_json(&resp.group_list),
    }
    Ok(())
}

#[derive(Args)]
pub struct GroupAddArgs {
    /// Group number the new group controls
    pub number: u8,

    /// Group name, at most 19 bytes
    pub name: String,
}

#[derive(Args)]
pub struct GroupRenameArgs {
    pub old_name: String,
    pub new_name: String,
}

#[derive(Args)]
pub struct GroupReorderArgs {
    /// Every current group number, in the new order
    #[arg(required = true, num_args = 1..)]
    pub numbers: Vec<u8>,
}

#[derive(Args)]
pub struct IntensityArgs {
    /// Group number
    pub group: u8,

    /// Intensity in percent (0-100)
    pub intensity: u8,
}

pub async fn add(args: &GroupAddArgs, config: &Config, shutdown: &CancellationToken) -> Result<()> {
    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    let name = lists::add_group(&controller, &ctx, args.number, &args.name).await?;
    tracing::info!(group = args.number, %name, "Group added");
    Ok(())
}

pub async fn rename(
    args: &GroupRenameArgs,
    config: &Config,
    shutdown: &CancellationToken,
) -> Result<()> {
    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    let name = lists::rename_group(&controller, &ctx, &args.old_name, &args.new_name).await?;
    tracing::info!(old = %args.old_name, new = %name, "Group renamed");
    Ok(())
}

pub async fn reorder(
    args: &GroupReorderArgs,
    config: &Config,
    shutdown: &CancellationToken,
) -> Result<()> {
    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    lists::reorder_groups(&controller, &ctx, &args.numbers).await?;
    Ok(())
}

pub async fn set_intensity(
    args: &IntensityArgs,
    config: &Config,
    shutdown: &CancellationToken,
) -> Result<()> {
    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    lists::set_group_intensity(&controller, &ctx, args.group, args.intensity).await?;
    tracing::info!(group = args.group, intensity = args.intensity, "Group intensity set");
    Ok(())
}
