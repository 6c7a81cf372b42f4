//! Payment gateway clients

pub mod razorpay;

pub use razorpay::{sign_payment, RazorpayGateway};
