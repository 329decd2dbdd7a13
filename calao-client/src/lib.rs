//! Calao Client - HTTP client for the POS backend
//!
//! Network-based REST calls for the order, auth and stats endpoints.

pub mod config;
pub mod error;
pub mod http;
pub mod orders;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use orders::OrderApi;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
