//! Rust client for the SkyDNS service directory.
//!
//! The directory exposes the same data twice: a mutating HTTP control plane
//! for registering, refreshing and removing services, and a read-only DNS
//! data plane that answers standard queries for them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skydns::{Service, SkydnsClient, SkydnsError};
//!
//! #[tokio::main]
//! async fn main() -> skydns::Result<()> {
//!     let client = SkydnsClient::new(
//!         "http://10.0.0.1:8080",
//!         Some("s3cret".to_string()),
//!         "skydns.local",
//!         0,
//!     )?;
//!
//!     let service = Service::new("web", "10.0.0.5", 80)
//!         .with_environment("production")
//!         .with_region("east")
//!         .with_ttl(30);
//!
//!     match client.services().add("1234", &service).await {
//!         Ok(()) | Err(SkydnsError::ConflictingUuid) => {}
//!         Err(e) => return Err(e),
//!     }
//!
//!     // Control plane view
//!     let regions = client.directory().regions().await?;
//!     println!("HTTP: {regions:?}");
//!
//!     // Data plane view
//!     let regions = client.dns().regions().await?;
//!     println!("DNS: {regions:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/skydns/0.1.0")]

// Re-export core types
pub use skydns_core::*;

// Re-export client
pub use skydns_client::{api, ClientConfig, SkydnsClient, SkydnsClientBuilder};
pub use skydns_client::{fqdn, DEFAULT_DNS_PORT, DEFAULT_DOMAIN};

// Re-export runtime for convenience
pub use tokio;
pub use serde;
pub use serde_json;
