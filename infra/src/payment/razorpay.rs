//! Razorpay implementation of the PaymentGateway trait
//!
//! Orders are created over the REST API with basic auth. Checkout callbacks
//! carry `razorpay_signature`, the hex HMAC-SHA256 of `"{order_id}|{payment_id}"`
//! keyed with the account secret.

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::time::Duration;

use tc_core::domain::entities::PaymentOrder;
use tc_core::errors::DomainError;
use tc_core::services::PaymentGateway;
use tc_shared::config::PaymentConfig;

use crate::InfrastructureError;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    amount: u64,
    currency: &'a str,
    receipt: &'a str,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
    amount: u64,
    currency: String,
    #[serde(default)]
    receipt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    description: String,
}

/// Expected checkout signature for an order and payment
pub fn sign_payment(key_secret: &str, order_id: &str, payment_id: &str) -> Result<String, InfrastructureError> {
    let mut mac = HmacSha256::new_from_slice(key_secret.as_bytes())
        .map_err(|e| InfrastructureError::Config(format!("Invalid payment key secret: {}", e)))?;
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

pub struct RazorpayGateway {
    client: reqwest::Client,
    config: PaymentConfig,
}

impl RazorpayGateway {
    pub fn new(config: PaymentConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            tracing::warn!("Razorpay credentials missing; order creation will fail");
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }

    async fn request_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, InfrastructureError> {
        if !self.config.is_configured() {
            return Err(InfrastructureError::Gateway {
                service: "payment",
                message: "payment gateway is not configured".to_string(),
            });
        }

        let response = self
            .client
            .post(format!("{}/orders", self.config.base_url))
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&CreateOrderRequest {
                amount,
                currency,
                receipt,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorEnvelope>()
                .await
                .map(|e| e.error.description)
                .unwrap_or_else(|_| status.to_string());
            return Err(InfrastructureError::Gateway {
                service: "payment",
                message,
            });
        }

        let order: OrderResponse = response.json().await?;
        Ok(PaymentOrder {
            id: order.id,
            amount: order.amount,
            currency: order.currency,
            receipt: order.receipt.unwrap_or_else(|| receipt.to_string()),
        })
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, DomainError> {
        let order = self.request_order(amount, currency, receipt).await.map_err(|e| {
            tracing::error!(error = %e, receipt, "Razorpay order creation failed");
            e
        })?;
        tracing::info!(order_id = %order.id, amount = order.amount, "Razorpay order created");
        Ok(order)
    }

    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        match sign_payment(&self.config.key_secret, order_id, payment_id) {
            Ok(expected) => constant_time_eq::constant_time_eq(
                expected.as_bytes(),
                signature.to_ascii_lowercase().as_bytes(),
            ),
            Err(e) => {
                tracing::error!(error = %e, "Cannot compute payment signature");
                false
            }
        }
    }
}
