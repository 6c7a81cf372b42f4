//! HTTP tests for registration, sign-in and the bearer middleware

mod common;

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::json;
    use tc_api::create_app;

    use super::common::*;

    #[actix_web::test]
    async fn test_register_login_and_me() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;

        let (token, user_id) = register(&app, "Asha", "Asha@Example.com", "parent").await;

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer(&token))
            .to_request();
        let (status, body) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], user_id.as_str());
        assert_eq!(body["data"]["email"], "asha@example.com");
        assert_eq!(body["data"]["role"], "parent");
        assert!(body["data"].get("passwordHash").is_none());

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "asha@example.com", "password": PASSWORD}))
            .to_request();
        let (status, body) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["token"].as_str().is_some());
        assert_eq!(body["data"]["user"]["id"], user_id.as_str());
    }

    #[actix_web::test]
    async fn test_register_rejections() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;
        register(&app, "Asha", "asha@example.com", "parent").await;

        let duplicate = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"name": "Other", "email": "ASHA@example.com", "password": PASSWORD}))
            .to_request();
        let (status, body) = call_json(&app, duplicate).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User already exists");

        let bad_email = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"name": "X", "email": "not-an-email", "password": PASSWORD}))
            .to_request();
        let (status, body) = call_json(&app, bad_email).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email format");

        let short_password = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"name": "X", "email": "x@example.com", "password": "123"}))
            .to_request();
        let (status, _) = call_json(&app, short_password).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let malformed = test::TestRequest::post()
            .uri("/api/auth/register")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let (status, body) = call_json(&app, malformed).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_wrong_credentials_and_missing_token() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;
        register(&app, "Ravi", "ravi@example.com", "tutor").await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "ravi@example.com", "password": "wrong-password"}))
            .to_request();
        let (status, body) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid email or password");

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let (status, body) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(bearer("garbage"))
            .to_request();
        let (status, _) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_google_login_is_idempotent() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;

        let profile = json!({"email": "meera@gmail.com", "name": "Meera", "picture": "https://img/meera.png"});
        let first = test::TestRequest::post()
            .uri("/api/auth/google")
            .set_json(profile.clone())
            .to_request();
        let (status, first) = call_json(&app, first).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["data"]["user"]["authProvider"], "google");

        let second = test::TestRequest::post()
            .uri("/api/auth/google")
            .set_json(profile)
            .to_request();
        let (_, second) = call_json(&app, second).await;
        assert_eq!(first["data"]["user"]["id"], second["data"]["user"]["id"]);

        // No password was ever set for the account
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "meera@gmail.com", "password": PASSWORD}))
            .to_request();
        let (status, _) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_health_and_unknown_route() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;

        let (status, body) = call_json(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "memory");

        let (status, body) =
            call_json(&app, test::TestRequest::get().uri("/api/nope").to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }
}
