mod ai;
mod attendance;
mod auth;
pub mod client;
mod employee;
pub mod error;
mod leave;
pub mod request;
mod salary;
pub mod transport;
pub mod types;
mod user;

pub use client::*;
pub use error::ApiError;
pub use request::ApiRequest;
pub use transport::{Envelope, HttpTransport, Transport};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
