//! # skydns-cli
//!
//! Command-line interface for the SkyDNS service directory.
//!
//! ## Features
//!
//! - **Control plane**: add, get, update, delete and list services; attach callbacks
//! - **Data plane**: resolve region counts over DNS with `regions --dns`
//! - **Configuration**: flags, `SKYDNS_*` environment variables, or a config file
//! - **Multiple output formats**: Pretty, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
