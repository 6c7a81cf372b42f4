//! Value objects representing the public shape of domain data.
//!
//! These are what the HTTP surface serializes, so field names are camelCase.

pub mod profiles;
pub mod session;

pub use profiles::{ConversationSummary, ParticipantSummary, PublicUser, ReviewList, TutorCard};
pub use session::AuthSession;
