//! Client for the SkyDNS service directory.
//!
//! The directory is reachable two ways: a mutating HTTP control plane and a
//! read-only DNS data plane. [`SkydnsClient`] wraps both behind one handle.
//!
//! ```rust,no_run
//! use skydns_client::{Service, SkydnsClient};
//!
//! # async fn run() -> skydns_client::Result<()> {
//! let client = SkydnsClient::builder("http://10.0.0.1:8080")
//!     .secret("s3cret")
//!     .domain("skydns.local")
//!     .build()?;
//!
//! let service = Service::new("web", "10.0.0.5", 80).with_ttl(30);
//! client.services().add("1234", &service).await?;
//! client.services().update_ttl("1234", 60).await?;
//!
//! let regions = client.dns().regions().await?;
//! println!("{regions:?}");
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/skydns-client/0.1.0")]

mod client;
mod config;
mod transport;
pub mod api;

pub use client::{SkydnsClient, SkydnsClientBuilder};
pub use config::*;
pub use skydns_core::*;
