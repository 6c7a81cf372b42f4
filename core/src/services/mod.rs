//! Business services containing domain logic and use cases.

pub mod ai;
pub mod auth;
pub mod favorites;
pub mod messaging;
pub mod otp;
pub mod payment;
pub mod reviews;
pub mod token;
pub mod tutors;

// Re-export commonly used types
pub use ai::{AiAssistantService, ChatRole, ChatTurn, HintProvider};
pub use auth::{AuthService, AuthServiceConfig, GoogleProfile, RegisterInput};
pub use favorites::FavoritesService;
pub use messaging::MessagingService;
pub use otp::{
    OtpService, OtpServiceConfig, OtpSweeper, SendOtpResult, SmsServiceTrait, VerifyOtpResult,
};
pub use payment::{PaymentGateway, PaymentService, PaymentServiceConfig, RegistrationOrder};
pub use reviews::{ReviewOutcome, ReviewService};
pub use token::{TokenService, TokenServiceConfig};
pub use tutors::{TutorFilter, TutorService};
