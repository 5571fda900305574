pub mod client;
pub mod error;

pub use client::NetworkService;
pub use error::NetworkError;
