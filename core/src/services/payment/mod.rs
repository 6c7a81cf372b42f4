//! Tutor registration fee through an external payment gateway
//!
//! The gateway creates orders and signs completed payments; this module
//! decides who may pay and records the outcome on the tutor.

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::PaymentServiceConfig;
pub use service::{PaymentService, RegistrationOrder};
pub use traits::PaymentGateway;
