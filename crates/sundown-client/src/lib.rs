//! Sundown signup API client.

mod client;
mod error;
mod types;

pub use client::SundownClient;
pub use error::SundownError;
pub use types::CreateRequest;
