//! `skydnsctl regions|environments` - Aggregate counts.

use anyhow::Result;
use colored::Colorize;
use skydns::NameCount;

use super::Context;

pub async fn regions(ctx: Context, dns: bool) -> Result<()> {
    let client = ctx.client()?;

    let counts = if dns {
        client.dns().regions().await?
    } else {
        client.directory().regions().await?
    };

    let title = if dns { "Regions (DNS):" } else { "Regions:" };
    print_counts(&ctx, title, &counts)
}

pub async fn environments(ctx: Context) -> Result<()> {
    let client = ctx.client()?;
    let counts = client.directory().environments().await?;
    print_counts(&ctx, "Environments:", &counts)
}

fn print_counts(ctx: &Context, title: &str, counts: &NameCount) -> Result<()> {
    if ctx.output_format.print_structured(counts)? {
        return Ok(());
    }

    println!("{}", title.bold());
    println!();

    if counts.is_empty() {
        println!("  (none)");
    }

    for (name, count) in sorted(counts) {
        println!("  {:<24} {}", name.cyan(), count);
    }

    Ok(())
}

/// Largest count first, then by name.
fn sorted(counts: &NameCount) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}
