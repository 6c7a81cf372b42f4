//! HTTP tests for tutor profiles, registration payment, favorites and reviews

mod common;

#[cfg(test)]
mod tests {
    use actix_http::Request;
    use actix_web::{
        body::MessageBody,
        dev::{Service, ServiceResponse},
        http::StatusCode,
        test,
    };
    use serde_json::{json, Value};
    use tc_api::create_app;

    use super::common::*;

    /// Completes the profile and pays the fee so the tutor is listed
    async fn list_tutor<S, B>(app: &S, token: &str) -> Value
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let req = test::TestRequest::put()
            .uri("/api/tutors/profile")
            .insert_header(bearer(token))
            .set_json(json!({
                "subjects": ["Maths", "Physics"],
                "qualifications": "M.Sc. Physics",
                "monthlyRate": 2500,
                "bio": "Ten years of board exam coaching",
                "classes": ["10", "12"],
                "location": "Pune"
            }))
            .to_request();
        let (status, body) = call_json(app, req).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["data"]["tutorProfile"]["profileCompleted"], true);

        let req = test::TestRequest::post()
            .uri("/api/razorpay/create-order")
            .insert_header(bearer(token))
            .to_request();
        let (status, body) = call_json(app, req).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["data"]["order"]["amount"], 50000);
        assert_eq!(body["data"]["order"]["currency"], "INR");
        let order_id = body["data"]["order"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/razorpay/verify")
            .insert_header(bearer(token))
            .set_json(json!({
                "razorpay_order_id": order_id,
                "razorpay_payment_id": "pay_1",
                "razorpay_signature": StubGateway::sign(&order_id, "pay_1"),
            }))
            .to_request();
        let (status, body) = call_json(app, req).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body
    }

    #[actix_web::test]
    async fn test_tutor_listing_requires_profile_and_payment() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;
        let (token, tutor_id) = register(&app, "Ravi", "ravi@example.com", "tutor").await;

        let listing = || test::TestRequest::get().uri("/api/tutors").to_request();
        let (_, body) = call_json(&app, listing()).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);

        let paid = list_tutor(&app, &token).await;
        assert_eq!(paid["data"]["paymentStatus"], "paid");

        let (_, body) = call_json(&app, listing()).await;
        assert_eq!(body["data"][0]["id"], tutor_id.as_str());

        let filtered = test::TestRequest::get()
            .uri("/api/tutors?subject=maths&maxRate=3000")
            .to_request();
        let (_, body) = call_json(&app, filtered).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let excluded = test::TestRequest::get()
            .uri("/api/tutors?subject=chemistry")
            .to_request();
        let (_, body) = call_json(&app, excluded).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);

        let detail = test::TestRequest::get()
            .uri(&format!("/api/tutors/{}", tutor_id))
            .to_request();
        let (status, body) = call_json(&app, detail).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["monthlyRate"], 2500);

        // Paying twice is refused
        let again = test::TestRequest::post()
            .uri("/api/razorpay/create-order")
            .insert_header(bearer(&token))
            .to_request();
        let (status, body) = call_json(&app, again).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Registration fee already paid");
    }

    #[actix_web::test]
    async fn test_payment_rejections() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;
        let (parent_token, _) = register(&app, "Asha", "asha@example.com", "parent").await;
        let (tutor_token, _) = register(&app, "Ravi", "ravi@example.com", "tutor").await;

        let req = test::TestRequest::post()
            .uri("/api/razorpay/create-order")
            .insert_header(bearer(&parent_token))
            .to_request();
        let (status, _) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/razorpay/create-order")
            .insert_header(bearer(&tutor_token))
            .to_request();
        let (_, body) = call_json(&app, req).await;
        let order_id = body["data"]["order"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/razorpay/verify")
            .insert_header(bearer(&tutor_token))
            .set_json(json!({
                "razorpay_order_id": order_id,
                "razorpay_payment_id": "pay_1",
                "razorpay_signature": "forged",
            }))
            .to_request();
        let (status, body) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Payment verification failed");

        let req = test::TestRequest::post()
            .uri("/api/razorpay/verify")
            .insert_header(bearer(&tutor_token))
            .set_json(json!({"razorpay_order_id": order_id}))
            .to_request();
        let (status, _) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let req = test::TestRequest::put()
            .uri("/api/tutors/profile")
            .insert_header(bearer(&parent_token))
            .set_json(json!({"bio": "not a tutor"}))
            .to_request();
        let (status, _) = call_json(&app, req).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_favorites() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;
        let (parent_token, _) = register(&app, "Asha", "asha@example.com", "parent").await;
        let (tutor_token, tutor_id) = register(&app, "Ravi", "ravi@example.com", "tutor").await;

        let toggle = || {
            test::TestRequest::post()
                .uri(&format!("/api/favorites/toggle/{}", tutor_id))
                .insert_header(bearer(&parent_token))
                .to_request()
        };
        let (status, body) = call_json(&app, toggle()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["isFavorite"], true);

        let list = test::TestRequest::get()
            .uri("/api/favorites")
            .insert_header(bearer(&parent_token))
            .to_request();
        let (_, body) = call_json(&app, list).await;
        assert_eq!(body["data"][0]["id"], tutor_id.as_str());

        let duplicate = test::TestRequest::post()
            .uri("/api/favorites")
            .insert_header(bearer(&parent_token))
            .set_json(json!({"tutorId": tutor_id}))
            .to_request();
        let (status, body) = call_json(&app, duplicate).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Tutor already in favorites");

        let (_, body) = call_json(&app, toggle()).await;
        assert_eq!(body["data"]["isFavorite"], false);

        let check = test::TestRequest::get()
            .uri(&format!("/api/favorites/check/{}", tutor_id))
            .insert_header(bearer(&parent_token))
            .to_request();
        let (_, body) = call_json(&app, check).await;
        assert_eq!(body["data"]["isFavorite"], false);

        let remove = test::TestRequest::delete()
            .uri(&format!("/api/favorites/{}", tutor_id))
            .insert_header(bearer(&parent_token))
            .to_request();
        let (status, _) = call_json(&app, remove).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let by_tutor = test::TestRequest::post()
            .uri(&format!("/api/favorites/toggle/{}", tutor_id))
            .insert_header(bearer(&tutor_token))
            .to_request();
        let (status, _) = call_json(&app, by_tutor).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let unknown = test::TestRequest::post()
            .uri("/api/favorites/toggle/not-a-uuid")
            .insert_header(bearer(&parent_token))
            .to_request();
        let (status, _) = call_json(&app, unknown).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_review_replaces_previous() {
        let ctx = context();
        let app = test::init_service(create_app(ctx.state.clone(), &cors(), 1 << 20)).await;
        let (parent_token, _) = register(&app, "Asha", "asha@example.com", "parent").await;
        let (tutor_token, tutor_id) = register(&app, "Ravi", "ravi@example.com", "tutor").await;

        let review = |token: &str, rating: i64| {
            test::TestRequest::post()
                .uri(&format!("/api/tutors/{}/reviews", tutor_id))
                .insert_header(bearer(token))
                .set_json(json!({"rating": rating, "comment": "Clear explanations"}))
                .to_request()
        };

        let (status, body) = call_json(&app, review(&parent_token, 5)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["rating"], 5.0);

        let (_, body) = call_json(&app, review(&parent_token, 3)).await;
        assert_eq!(body["data"]["rating"], 3.0);
        assert_eq!(body["data"]["reviewCount"], 1);

        let listing = test::TestRequest::get()
            .uri(&format!("/api/tutors/{}/reviews", tutor_id))
            .to_request();
        let (status, body) = call_json(&app, listing).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["reviews"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"]["reviews"][0]["reviewerName"], "Asha");

        let (status, body) = call_json(&app, review(&tutor_token, 5)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "You cannot review yourself");

        let (status, _) = call_json(&app, review(&parent_token, 6)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let anonymous = test::TestRequest::post()
            .uri(&format!("/api/tutors/{}/reviews", tutor_id))
            .set_json(json!({"rating": 4}))
            .to_request();
        let (status, _) = call_json(&app, anonymous).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let missing = test::TestRequest::get()
            .uri(&format!("/api/tutors/{}/reviews", uuid::Uuid::new_v4()))
            .to_request();
        let (status, _) = call_json(&app, missing).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
