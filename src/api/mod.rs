pub mod client;
pub mod error;
pub mod models;
pub mod rage4;

pub use client::DnsApiClient;
pub use error::ApiError;
pub use rage4::Rage4Client;
