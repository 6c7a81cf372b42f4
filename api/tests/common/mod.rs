//! Shared fixtures for the HTTP tests: in-memory stores plus hand-written
//! SMS, payment and AI collaborators.

#![allow(dead_code)]

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tc_api::{AppState, Integrations, Repositories};
use tc_core::domain::entities::PaymentOrder;
use tc_core::errors::DomainError;
use tc_core::services::{ChatTurn, HintProvider, PaymentGateway, SmsServiceTrait};
use tc_shared::{AppConfig, CorsConfig};

pub const PASSWORD: &str = "secret123";

/// Records the last code sent to each number, or fails when `down`
#[derive(Default)]
pub struct CapturingSms {
    pub down: bool,
    pub codes: Mutex<HashMap<String, String>>,
}

impl CapturingSms {
    /// Last code sent to a local number (the service adds `+91`)
    pub fn code_for(&self, phone: &str) -> Option<String> {
        self.codes
            .lock()
            .unwrap()
            .get(&format!("+91{}", phone))
            .cloned()
    }
}

#[async_trait]
impl SmsServiceTrait for CapturingSms {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        if self.down {
            return Err("carrier rejected the message".to_string());
        }
        self.codes
            .lock()
            .unwrap()
            .insert(phone.to_string(), code.to_string());
        Ok(format!("sms_{}", phone))
    }
}

/// Accepts `sig:{order}|{payment}` as the only valid signature
pub struct StubGateway;

impl StubGateway {
    pub fn sign(order_id: &str, payment_id: &str) -> String {
        format!("sig:{}|{}", order_id, payment_id)
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, DomainError> {
        Ok(PaymentOrder {
            id: format!("order_{}", &receipt[receipt.len().saturating_sub(8)..]),
            amount,
            currency: currency.to_string(),
            receipt: receipt.to_string(),
        })
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        signature == Self::sign(order_id, payment_id)
    }
}

/// Echoes the number of turns it was given, or fails when `down`
#[derive(Default)]
pub struct StubHints {
    pub down: bool,
    pub last_instruction: Mutex<Option<String>>,
}

#[async_trait]
impl HintProvider for StubHints {
    async fn generate(&self, system_instruction: &str, turns: &[ChatTurn]) -> Result<String, DomainError> {
        if self.down {
            return Err(DomainError::External {
                service: "ai".into(),
                message: "quota exceeded".into(),
            });
        }
        *self.last_instruction.lock().unwrap() = Some(system_instruction.to_string());
        Ok(format!("hint for {} turn(s)", turns.len()))
    }
}

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub sms: Arc<CapturingSms>,
    pub hints: Arc<StubHints>,
}

pub fn context() -> TestContext {
    context_with_hints(StubHints::default())
}

pub fn context_with_hints(hints: StubHints) -> TestContext {
    context_with(CapturingSms::default(), hints)
}

pub fn context_with_sms(sms: CapturingSms) -> TestContext {
    context_with(sms, StubHints::default())
}

fn context_with(sms: CapturingSms, hints: StubHints) -> TestContext {
    let sms = Arc::new(sms);
    let hints = Arc::new(hints);
    let integrations = Integrations {
        sms: sms.clone(),
        payments: Arc::new(StubGateway),
        hints: hints.clone(),
    };
    let state = AppState::new(Repositories::in_memory(), integrations, &AppConfig::default());
    TestContext {
        state: web::Data::new(state),
        sms,
        hints,
    }
}

pub fn cors() -> CorsConfig {
    CorsConfig::development()
}

/// Call the app and decode the JSON body
pub async fn call_json<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// Register an account and return `(token, user_id)`
pub async fn register<S, B>(app: &S, name: &str, email: &str, role: &str) -> (String, String)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": name, "email": email, "password": PASSWORD, "role": role}))
        .to_request();
    let (status, body) = call_json(app, req).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    (
        body["data"]["token"].as_str().unwrap().to_string(),
        body["data"]["user"]["id"].as_str().unwrap().to_string(),
    )
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
