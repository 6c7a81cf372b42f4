//! Tutor discovery and profile management

mod service;


pub use service::{TutorFilter, TutorService};
