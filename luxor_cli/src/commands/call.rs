use anyhow::Result;
use clap::Args;
use luxor_lib::{CancellationToken, Config, Registry};

use crate::output::{print_json, print_methods_table, OutputFormat};

#[derive(Args)]
pub struct CallArgs {
    /// Method name, e.g. ThemeGet (see `luxor methods`)
    pub method: String,

    /// Request as JSON, e.g. '{"ThemeIndex":0}'. Defaults to an empty request.
    pub request: Option<String>,
}

pub async fn run(args: &CallArgs, config: &Config, shutdown: &CancellationToken) -> Result<()> {
    let registry = Registry::with_all_methods();
    if !registry.contains(&args.method) {
        let names: Vec<_> = registry.names().collect();
        anyhow::bail!(
            "No such method {:?}. Valid methods:\n    {}",
            args.method,
            names.join("\n    ")
        );
    }

    let controller = config.controller()?;
    let ctx = config.call_context(shutdown);
    let response = registry
        .dispatch(&controller, &ctx, &args.method, args.request.as_deref())
        .await?;
    print_json(&response);
    Ok(())
}

pub fn list_methods(format: &OutputFormat) {
    let registry = Registry::with_all_methods();
    let names: Vec<&str> = registry.names().collect();
    match format {
        OutputFormat::Table => print_methods_table(&names),
        OutputFormat::Json => print_json(&names),
    }
}
