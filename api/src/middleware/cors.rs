//! CORS middleware configuration for the single-page client.
//!
//! Origins come from `CorsConfig`: a `*` entry allows any origin (the
//! development default), otherwise only the listed origins are accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use tc_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("CORS allows any origin");
        return cors.allow_any_origin();
    }

    let mut cors = config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| {
            tracing::info!(origin = %origin, "Adding allowed origin");
            cors.allowed_origin(origin)
        });

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn probe(config: CorsConfig, origin: &str) -> Option<String> {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .to_request();
        let resp = test::call_service(&app, req).await;
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    #[actix_web::test]
    async fn test_configured_origin_is_allowed() {
        let config = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".into()],
            ..Default::default()
        };
        assert_eq!(
            probe(config, "http://localhost:3000").await.as_deref(),
            Some("http://localhost:3000")
        );
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let origin = probe(CorsConfig::development(), "http://192.168.1.20:5173").await;
        assert!(origin.is_some());
    }
}
