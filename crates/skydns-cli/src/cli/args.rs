//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use crate::output::OutputFormat;

/// Command-line interface for the SkyDNS service directory
///
/// Register services over HTTP and resolve them over DNS.
#[derive(Parser, Debug)]
#[command(name = "skydnsctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory base URL, e.g. http://10.0.0.1:8080
    #[arg(short, long, env = "SKYDNS_URL", global = true)]
    pub url: Option<String>,

    /// Shared secret sent as the Authorization header
    #[arg(short, long, env = "SKYDNS_SECRET", global = true, hide_env_values = true)]
    pub secret: Option<String>,

    /// Directory domain
    #[arg(short, long, env = "SKYDNS_DOMAIN", global = true)]
    pub domain: Option<String>,

    /// DNS port of the directory (0 = 53)
    #[arg(long, env = "SKYDNS_DNS_PORT", global = true)]
    pub dns_port: Option<u16>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log requests (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a service
    Add(AddArgs),

    /// Show a registered service
    Get {
        /// Service UUID
        uuid: String,
    },

    /// Remove a service
    Delete {
        /// Service UUID
        uuid: String,
    },

    /// Refresh the TTL of a service
    Update {
        /// Service UUID
        uuid: String,

        /// New time to live in seconds
        ttl: u32,
    },

    /// List every registered service
    List,

    /// Count services per region
    Regions {
        /// Ask the DNS interface instead of the HTTP API
        #[arg(long)]
        dns: bool,
    },

    /// Count services per environment
    Environments,

    /// Attach a callback to a service
    Callback(CallbackArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Add command
// ============================================================================

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Service UUID (must be unused)
    pub uuid: String,

    /// Service name
    #[arg(long)]
    pub name: String,

    /// Host name or address
    #[arg(long)]
    pub host: String,

    /// Port
    #[arg(long)]
    pub port: u16,

    /// Service version
    #[arg(long = "service-version", default_value = "")]
    pub service_version: String,

    /// Environment
    #[arg(long, default_value = "")]
    pub environment: String,

    /// Region
    #[arg(long, default_value = "")]
    pub region: String,

    /// Time to live in seconds
    #[arg(long, default_value = "0")]
    pub ttl: u32,
}

// ============================================================================
// Callback command
// ============================================================================

#[derive(Args, Debug)]
pub struct CallbackArgs {
    /// UUID of the service to watch
    pub uuid: String,

    /// Name of the watched service
    #[arg(long)]
    pub name: String,

    /// Host to notify
    #[arg(long)]
    pub host: String,

    /// Port to notify
    #[arg(long)]
    pub port: u16,

    /// Reply identifier passed back on notification
    #[arg(long, default_value = "")]
    pub reply: String,

    /// Version of the watched service
    #[arg(long = "service-version", default_value = "")]
    pub service_version: String,

    /// Environment of the watched service
    #[arg(long, default_value = "")]
    pub environment: String,

    /// Region of the watched service
    #[arg(long, default_value = "")]
    pub region: String,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (url, secret, domain, dns_port, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
