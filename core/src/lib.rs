//! # TutorConnect Core
//!
//! Core business logic and domain layer for the TutorConnect backend.
//! This crate contains domain entities, business services, repository interfaces
//! with in-memory implementations, and the error types shared by all layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
