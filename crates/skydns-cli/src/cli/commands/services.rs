//! `skydnsctl add|get|delete|update|list` - Service registration.

use anyhow::Result;
use colored::Colorize;
use skydns::Service;

use super::Context;
use crate::cli::args::AddArgs;

pub async fn add(ctx: Context, args: AddArgs) -> Result<()> {
    let client = ctx.client()?;

    let service = Service::new(args.name, args.host, args.port)
        .with_uuid(args.uuid.as_str())
        .with_version(args.service_version)
        .with_environment(args.environment)
        .with_region(args.region)
        .with_ttl(args.ttl);

    client.services().add(&args.uuid, &service).await?;

    if !ctx.output_format.print_structured(&service)? {
        println!("{} Service {} registered.", "Success:".green().bold(), args.uuid.cyan());
    }

    Ok(())
}

pub async fn get(ctx: Context, uuid: &str) -> Result<()> {
    let client = ctx.client()?;
    let service = client.services().get(uuid).await?;

    if !ctx.output_format.print_structured(&service)? {
        print_service(uuid, &service);
    }

    Ok(())
}

pub async fn delete(ctx: Context, uuid: &str) -> Result<()> {
    let client = ctx.client()?;
    client.services().delete(uuid).await?;

    if !ctx
        .output_format
        .print_structured(&serde_json::json!({ "deleted": uuid }))?
    {
        println!("{} Service {} deleted.", "Success:".green().bold(), uuid.cyan());
    }

    Ok(())
}

pub async fn update(ctx: Context, uuid: &str, ttl: u32) -> Result<()> {
    let client = ctx.client()?;
    client.services().update_ttl(uuid, ttl).await?;

    if !ctx
        .output_format
        .print_structured(&serde_json::json!({ "uuid": uuid, "ttl": ttl }))?
    {
        println!(
            "{} TTL of {} set to {}s.",
            "Success:".green().bold(),
            uuid.cyan(),
            ttl
        );
    }

    Ok(())
}

pub async fn list(ctx: Context) -> Result<()> {
    let client = ctx.client()?;
    let services = client.services().list().await?;

    if ctx.output_format.print_structured(&services)? {
        return Ok(());
    }

    println!("{}", "Registered Services:".bold());
    println!();

    if services.is_empty() {
        println!("  No services registered.");
        println!();
        println!(
            "  Register one with: {} add <UUID> --name <NAME> --host <HOST> --port <PORT>",
            "skydnsctl".cyan()
        );
    } else {
        for service in &services {
            print_service(&service.uuid, service);
        }
    }

    Ok(())
}

fn print_service(uuid: &str, service: &Service) {
    println!(
        "  {} {} {}:{}",
        uuid.cyan(),
        service.name.bold(),
        service.host,
        service.port
    );

    let placement: Vec<&str> = [
        service.version.as_str(),
        service.environment.as_str(),
        service.region.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect();
    if !placement.is_empty() {
        println!("    {}", placement.join(" / "));
    }

    println!("    TTL: {}s", service.ttl);
    if let Some(expires) = &service.expires {
        println!("    Expires: {}", expires.to_rfc3339());
    }
    println!();
}
