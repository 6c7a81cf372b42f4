//! Request and response bodies of the HTTP surface
//!
//! Field names are camelCase on the wire, except the Razorpay checkout
//! callback which keeps the gateway's snake_case names.

pub mod ai;
pub mod auth;
pub mod favorites;
pub mod messages;
pub mod otp;
pub mod payment;
pub mod tutors;

pub use ai::*;
pub use auth::*;
pub use favorites::*;
pub use messages::*;
pub use otp::*;
pub use payment::*;
pub use tutors::*;
