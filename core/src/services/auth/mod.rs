//! Account registration, password login and Google sign-in

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
pub use types::{GoogleProfile, RegisterInput};
