mod callback;
mod common;
mod service;
mod srv;

pub use callback::*;
pub use common::*;
pub use service::*;
pub use srv::*;
