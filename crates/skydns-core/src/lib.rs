//! Core types for the SkyDNS directory client.
//!
//! This crate provides the foundational types shared by the client crates:
//!
//! - **Types**: the directory's service and callback records, and the
//!   name/count mappings returned by aggregate queries
//! - **Errors**: the error taxonomy in [`SkydnsError`]
//!
//! # Example
//!
//! ```rust
//! use skydns_core::Service;
//!
//! let service = Service::new("web", "10.0.0.5", 8080)
//!     .with_environment("production")
//!     .with_region("east")
//!     .with_ttl(30);
//!
//! assert_eq!(service.port, 8080);
//! ```

#![doc(html_root_url = "https://docs.rs/skydns-core/0.1.0")]

mod error;
pub mod types;

pub use error::{Result, SkydnsError};
pub use types::*;
