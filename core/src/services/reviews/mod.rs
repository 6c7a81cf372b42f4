//! Tutor reviews and rating aggregation

mod service;


pub use service::{ReviewOutcome, ReviewService};
