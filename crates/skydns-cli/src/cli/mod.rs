//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Flags and environment win over the config file
    let ctx = commands::Context {
        url: cli.url.or_else(|| config.url.clone()),
        secret: cli.secret.or_else(|| config.secret.clone()),
        domain: cli
            .domain
            .or_else(|| config.domain.clone())
            .unwrap_or_else(|| skydns::DEFAULT_DOMAIN.to_string()),
        dns_port: cli.dns_port.or(config.dns_port).unwrap_or(0),
        output_format: cli
            .output
            .or(config.output_format)
            .unwrap_or(OutputFormat::Pretty),
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Add(args) => commands::services::add(ctx, args).await,
        Commands::Get { uuid } => commands::services::get(ctx, &uuid).await,
        Commands::Delete { uuid } => commands::services::delete(ctx, &uuid).await,
        Commands::Update { uuid, ttl } => commands::services::update(ctx, &uuid, ttl).await,
        Commands::List => commands::services::list(ctx).await,
        Commands::Regions { dns } => commands::directory::regions(ctx, dns).await,
        Commands::Environments => commands::directory::environments(ctx).await,
        Commands::Callback(args) => commands::callback::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}

/// Send library events to stderr, filtered by `RUST_LOG` or `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
