//! Application state and factory
//!
//! This module wires repositories and external collaborators into the core
//! services and provides the factory for creating the Actix-web application.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use tc_core::repositories::{
    FavoriteRepository, InMemoryFavoriteRepository, InMemoryMessageRepository, InMemoryOtpStore,
    InMemoryUserRepository, MessageRepository, OtpStore, ReviewRepository, UserRepository,
};
use tc_core::services::{
    AiAssistantService, AuthService, AuthServiceConfig, FavoritesService, HintProvider,
    MessagingService, OtpService, OtpServiceConfig, PaymentGateway, PaymentService,
    PaymentServiceConfig, ReviewService, SmsServiceTrait, TokenService, TutorService,
};
use tc_shared::{AppConfig, CorsConfig, ErrorResponse};

use crate::handlers::ApiError;
use crate::middleware::cors::create_cors;
use crate::routes;

/// Persistence backends
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub otp_store: Arc<dyn OtpStore>,
    /// Label reported by `/health`
    pub backend: &'static str,
}

impl Repositories {
    /// Process-local stores for development and tests
    pub fn in_memory() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        Self {
            users: users.clone(),
            reviews: users,
            messages: Arc::new(InMemoryMessageRepository::new()),
            favorites: Arc::new(InMemoryFavoriteRepository::new()),
            otp_store: Arc::new(InMemoryOtpStore::new()),
            backend: "memory",
        }
    }
}

/// Third-party collaborators
pub struct Integrations {
    pub sms: Arc<dyn SmsServiceTrait>,
    pub payments: Arc<dyn PaymentGateway>,
    pub hints: Arc<dyn HintProvider>,
}

/// Application state that holds shared services
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub auth: AuthService,
    pub messaging: MessagingService,
    pub otp: OtpService,
    pub favorites: FavoritesService,
    pub tutors: TutorService,
    pub reviews: ReviewService,
    pub payments: PaymentService,
    pub assistant: AiAssistantService,
    pub backend: &'static str,
}

impl AppState {
    pub fn new(repos: Repositories, integrations: Integrations, config: &AppConfig) -> Self {
        let tokens = Arc::new(TokenService::new(config.jwt.clone().into()));
        let users = repos.users;

        Self {
            auth: AuthService::new(users.clone(), tokens.clone(), AuthServiceConfig::default()),
            messaging: MessagingService::new(repos.messages, users.clone()),
            otp: OtpService::new(
                repos.otp_store,
                integrations.sms,
                users.clone(),
                OtpServiceConfig::from_settings(&config.otp, &config.sms),
            ),
            favorites: FavoritesService::new(repos.favorites, users.clone()),
            tutors: TutorService::new(users.clone()),
            reviews: ReviewService::new(repos.reviews, users.clone()),
            payments: PaymentService::new(
                integrations.payments,
                users,
                PaymentServiceConfig::from(&config.payment),
            ),
            assistant: AiAssistantService::new(integrations.hints),
            tokens,
            backend: repos.backend,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: web::Data<AppState>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let tokens = state.tokens.clone();

    App::new()
        .app_data(state)
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(|err, _| ApiError::validation(err.to_string()).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _| ApiError::validation(err.to_string()).into()),
        )
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/api")
                .configure(routes::auth::configure(tokens.clone()))
                .configure(routes::messages::configure(tokens.clone()))
                .configure(routes::otp::configure(tokens.clone()))
                .configure(routes::favorites::configure(tokens.clone()))
                .configure(routes::tutors::configure(tokens.clone()))
                .configure(routes::payment::configure(tokens))
                .configure(routes::ai::configure),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}
