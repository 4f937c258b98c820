//! skydnsctl - SkyDNS directory CLI
//!
//! Registers, refreshes and inspects services in a SkyDNS directory.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    skydns_cli::run().await
}
