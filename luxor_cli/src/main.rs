mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use luxor_lib::{CancellationToken, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "luxor")]
#[command(about = "Talk to an FX Luminaire Luxor ZD lighting controller")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Controller base URL (overrides LUXOR_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-call deadline in seconds (overrides LUXOR_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call any method by name with an optional JSON request
    Call(commands::call::CallArgs),
    /// List the methods `call` accepts
    Methods,
    /// List groups and their current intensity
    Groups,
    /// Add a group for a group number
    GroupAdd(commands::groups::GroupAddArgs),
    /// Rename a group
    GroupRename(commands::groups::GroupRenameArgs),
    /// Reorder the group list
    GroupReorder(commands::groups::GroupReorderArgs),
    /// Set one group's intensity
    Intensity(commands::groups::IntensityArgs),
    /// List themes and whether each is on
    Themes,
    /// Switch one theme on or off
    Theme(commands::themes::ThemeArgs),
    /// Reorder the theme list
    ThemeReorder(commands::themes::ThemeReorderArgs),
    /// Switch every theme on, one at a time
    IlluminateAll,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("luxor=info".parse()?),
        )
        .with_target(false)
        .init();

    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let mut config = Config::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(raw) = &cli.timeout_secs {
        let timeout: Duration = luxor_lib::config::parse_timeout(raw, "--timeout-secs")?;
        config = config.with_timeout(Some(timeout));
    }

    let shutdown = CancellationToken::new();
    let on_interrupt = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, canceling in-flight call");
            on_interrupt.cancel();
        }
    });

    match &cli.command {
        Commands::Call(args) => commands::call::run(args, &config, &shutdown).await?,
        Commands::Methods => commands::call::list_methods(&format),
        Commands::Groups => commands::groups::run(&config, &shutdown, &format).await?,
        Commands::GroupAdd(args) => commands::groups::add(args, &config, &shutdown).await?,
        Commands::GroupRename(args) => commands::groups::rename(args, &config, &shutdown).await?,
        Commands::GroupReorder(args) => commands::groups::reorder(args, &config, &shutdown).await?,
        Commands::Intensity(args) => {
            commands::groups::set_intensity(args, &config, &shutdown).await?
        }
        Commands::Themes => commands::themes::run(&config, &shutdown, &format).await?,
        Commands::Theme(args) => commands::themes::set(args, &config, &shutdown).await?,
        Commands::ThemeReorder(args) => commands::themes::reorder(args, &config, &shutdown).await?,
        Commands::IlluminateAll => {
            commands::themes::illuminate_all(&config, &shutdown, &format).await?
        }
    }

    Ok(())
}
