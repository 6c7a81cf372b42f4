//! JWT access token issuance and verification

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
