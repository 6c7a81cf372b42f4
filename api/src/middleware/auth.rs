//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the core `TokenService` and injects an `AuthContext`
//! into the request extensions.
//!
//! The middleware works in two modes:
//! 1. Required: a missing, invalid or expired token is rejected with 401
//! 2. Optional: requests without a token pass through anonymously; a token
//!    that is present must still be valid

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use tc_core::domain::entities::{Claims, UserRole};
use tc_core::errors::TokenError;
use tc_core::services::TokenService;

use crate::handlers::ApiError;

/// Authenticated caller, injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// User ID extracted from the `sub` claim
    pub user_id: Uuid,
    /// Role at token issuance
    pub role: UserRole,
}

impl AuthContext {
    /// Creates a new authentication context from JWT claims
    pub fn from_claims(claims: &Claims) -> Result<Self, TokenError> {
        Ok(Self {
            user_id: claims.user_id()?,
            role: claims.role,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    tokens: Arc<TokenService>,
    required: bool,
}

impl JwtAuth {
    /// Rejects requests without a valid bearer token
    pub fn required(tokens: Arc<TokenService>) -> Self {
        Self {
            tokens,
            required: true,
        }
    }

    /// Authenticates the caller when a token is presented
    pub fn optional(tokens: Arc<TokenService>) -> Self {
        Self {
            tokens,
            required: false,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
            required: self.required,
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
    required: bool,
}

impl<S> JwtAuthMiddleware<S> {
    fn authenticate(&self, req: &ServiceRequest) -> Result<Option<AuthContext>, TokenError> {
        match extract_bearer_token(req) {
            Some(token) => {
                let claims = self.tokens.verify(&token)?;
                AuthContext::from_claims(&claims).map(Some)
            }
            None if self.required => Err(TokenError::MissingToken),
            None => Ok(None),
        }
    }
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.authenticate(&req) {
            Ok(Some(context)) => {
                tracing::debug!(user_id = %context.user_id, path = req.path(), "Request authenticated");
                req.extensions_mut().insert(context);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(error = %e, path = req.path(), "Authentication rejected");
                let response = ApiError::from(e).error_response();
                return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
            }
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(TokenError::MissingToken));

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use tc_core::services::TokenServiceConfig;

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: "middleware-test-secret".into(),
            expiry_seconds: 3600,
            issuer: "tutorconnect".into(),
        }))
    }

    async fn whoami(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().body(auth.user_id.to_string())
    }

    async fn maybe_whoami(auth: OptionalAuth) -> HttpResponse {
        match auth.0 {
            Some(ctx) => HttpResponse::Ok().body(ctx.user_id.to_string()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[::core::prelude::v1::test]
    fn test_extract_bearer_token() {
        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[actix_web::test]
    async fn test_required_mode() {
        let tokens = token_service();
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id, UserRole::Parent).unwrap();

        let app = test::init_service(
            App::new().service(
                web::resource("/me")
                    .wrap(JwtAuth::required(tokens.clone()))
                    .route(web::get().to(whoami)),
            ),
        )
        .await;

        let ok = test::TestRequest::get()
            .uri("/me")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, ok).await;
        assert_eq!(body, user_id.to_string());

        let missing = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, missing).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let forged = test::TestRequest::get()
            .uri("/me")
            .insert_header((AUTHORIZATION, "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, forged).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_optional_mode() {
        let tokens = token_service();
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id, UserRole::Tutor).unwrap();

        let app = test::init_service(
            App::new().service(
                web::resource("/maybe")
                    .wrap(JwtAuth::optional(tokens.clone()))
                    .route(web::get().to(maybe_whoami)),
            ),
        )
        .await;

        let anonymous = test::TestRequest::get().uri("/maybe").to_request();
        assert_eq!(test::call_and_read_body(&app, anonymous).await, "anonymous");

        let authenticated = test::TestRequest::get()
            .uri("/maybe")
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        assert_eq!(
            test::call_and_read_body(&app, authenticated).await,
            user_id.to_string()
        );

        let forged = test::TestRequest::get()
            .uri("/maybe")
            .insert_header((AUTHORIZATION, "Bearer forged"))
            .to_request();
        let resp = test::call_service(&app, forged).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
