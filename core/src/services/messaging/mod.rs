//! Direct messaging between parents and tutors
//!
//! Conversations are derived from messages; see
//! [`derive_conversation_id`](crate::domain::entities::derive_conversation_id).
//! Delivery is pull based: clients poll the inbox and unread badge.

mod service;

#[cfg(test)]
mod tests;

pub use service::MessagingService;
