//! Repository interfaces and their in-memory implementations.
//!
//! Traits describe persistence in domain terms; `tc_infra` provides the MySQL
//! and Redis implementations. The in-memory implementations back development
//! runs without a database and every service test.

pub mod favorite;
pub mod message;
pub mod otp;
pub mod review;
pub mod user;

pub use favorite::{FavoriteRepository, InMemoryFavoriteRepository};
pub use message::{InMemoryMessageRepository, MessageRepository};
pub use otp::{InMemoryOtpStore, OtpStore};
pub use review::ReviewRepository;
pub use user::{InMemoryUserRepository, UserRepository};
