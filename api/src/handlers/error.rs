//! Mapping of domain errors onto HTTP responses
//!
//! Handlers return `ApiResult`; `?` on any domain result converts into
//! `ApiError`, whose `ResponseError` impl picks the status from
//! `DomainError::kind()` and renders the `{"success": false, ...}` body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use once_cell::sync::Lazy;
use std::fmt;

use tc_core::errors::{
    AuthError, ConversationError, DomainError, ErrorKind, MarketplaceError, OtpError, TokenError,
    ValidationError,
};
use tc_shared::{Environment, ErrorResponse};

/// Whether 5xx bodies carry the underlying cause
static EXPOSE_DETAILS: Lazy<bool> = Lazy::new(|| Environment::from_env().exposes_error_details());

pub type ApiResult<T = HttpResponse> = Result<T, ApiError>;

/// A domain error on its way out of a handler
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
}

impl ApiError {
    /// 400 with a free-form message
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: DomainError::Validation {
                message: message.into(),
            },
        }
    }

    pub fn domain(&self) -> &DomainError {
        &self.error
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Message safe to show to clients
    fn public_message(&self) -> String {
        match (&self.error, self.kind()) {
            (_, ErrorKind::Internal) => "Server error".to_string(),
            (DomainError::External { service, .. }, _) => {
                format!("The {} service is currently unavailable", service)
            }
            (DomainError::Otp(OtpError::SmsServiceFailure { .. }), _) => {
                "Failed to send OTP".to_string()
            }
            (DomainError::Validation { message }, _) => message.clone(),
            (error, _) => error.to_string(),
        }
    }

    fn to_body(&self, expose_details: bool) -> ErrorResponse {
        let body = ErrorResponse::new(self.public_message());
        match self.kind() {
            ErrorKind::Internal | ErrorKind::Upstream if expose_details => {
                body.with_details(self.error.to_string())
            }
            _ => body,
        }
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::DomainState => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Upstream | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.error, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.error, "Request rejected");
        }
        HttpResponse::build(status).json(self.to_body(*EXPOSE_DETAILS))
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self { error }
    }
}

macro_rules! bridge_domain_error {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for ApiError {
                fn from(error: $source) -> Self {
                    Self { error: error.into() }
                }
            }
        )*
    };
}

bridge_domain_error!(
    AuthError,
    TokenError,
    ValidationError,
    OtpError,
    ConversationError,
    MarketplaceError,
);

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for field: {}", field));
                    (field.clone(), message)
                })
            })
            .collect();
        messages.sort();

        match messages.into_iter().next() {
            Some((_, message)) => ApiError::validation(message),
            None => ApiError::validation("Invalid request"),
        }
    }
}
