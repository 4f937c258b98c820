//! API endpoint modules.

mod callbacks;
mod directory;
mod dns;
mod services;

pub use callbacks::CallbacksApi;
pub use directory::DirectoryApi;
pub use dns::DnsApi;
pub use services::ServicesApi;
