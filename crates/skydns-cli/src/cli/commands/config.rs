//! `skydnsctl config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    let masked = Config {
        secret: config.masked_secret(),
        ..config.clone()
    };
    if ctx.output_format.print_structured(&masked)? {
        return Ok(());
    }

    let unset = || "(not set)".dimmed().to_string();

    println!("{}", "Current Configuration:".bold());
    println!();
    println!("  {} {}", "url:".bold(), config.url.clone().unwrap_or_else(unset));
    println!("  {} {}", "secret:".bold(), masked.secret.unwrap_or_else(unset));
    println!(
        "  {} {}",
        "domain:".bold(),
        config.domain.clone().unwrap_or_else(|| skydns::DEFAULT_DOMAIN.to_string())
    );
    println!(
        "  {} {}",
        "dns_port:".bold(),
        config.dns_port.filter(|p| *p != 0).unwrap_or(skydns::DEFAULT_DNS_PORT)
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or(OutputFormat::Pretty)
    );

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("{} {} set.", "Success:".green().bold(), key.cyan());

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}
