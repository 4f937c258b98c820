//! `skydnsctl callback` - Attach a callback to a service.

use anyhow::Result;
use colored::Colorize;
use skydns::Callback;

use super::Context;
use crate::cli::args::CallbackArgs;

pub async fn execute(ctx: Context, args: CallbackArgs) -> Result<()> {
    let client = ctx.client()?;

    let callback = Callback {
        version: args.service_version,
        environment: args.environment,
        region: args.region,
        ..Callback::new(args.name, args.host, args.port).with_reply(args.reply)
    };

    client.callbacks().add(&args.uuid, &callback).await?;

    if !ctx.output_format.print_structured(&callback)? {
        println!(
            "{} Callback to {}:{} attached to {}.",
            "Success:".green().bold(),
            callback.host,
            callback.port,
            args.uuid.cyan()
        );
    }

    Ok(())
}
