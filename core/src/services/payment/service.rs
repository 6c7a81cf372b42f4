//! Registration payment service implementation

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{registration_receipt, PaymentOrder, User};
use crate::domain::value_objects::PublicUser;
use crate::errors::{AuthError, DomainResult, MarketplaceError, ValidationError};
use crate::repositories::UserRepository;

use super::config::PaymentServiceConfig;
use super::traits::PaymentGateway;

/// Order plus the public key the client needs to open checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOrder {
    pub order: PaymentOrder,
    pub key_id: String,
}

pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    users: Arc<dyn UserRepository>,
    config: PaymentServiceConfig,
}

impl PaymentService {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        users: Arc<dyn UserRepository>,
        config: PaymentServiceConfig,
    ) -> Self {
        Self {
            gateway,
            users,
            config,
        }
    }

    /// Create the registration fee order for a tutor
    ///
    /// # Errors
    ///
    /// * `MarketplaceError::NotATutor` - Caller is not a tutor
    /// * `MarketplaceError::AlreadyPaid` - Fee already settled
    /// * `DomainError::External` - Gateway failure
    pub async fn create_registration_order(&self, tutor_id: Uuid) -> DomainResult<RegistrationOrder> {
        let mut tutor = self.load_unpaid_tutor(tutor_id).await?;

        let receipt = registration_receipt(tutor_id);
        let order = self
            .gateway
            .create_order(self.config.registration_fee, &self.config.currency, &receipt)
            .await
            .map_err(|e| {
                tracing::error!(tutor_id = %tutor_id, error = %e, event = "order_failed", "Payment order creation failed");
                e
            })?;

        tutor.attach_registration_order(order.id.clone());
        self.users.update(tutor).await?;

        tracing::info!(
            tutor_id = %tutor_id,
            order_id = %order.id,
            amount = order.amount,
            event = "order_created",
            "Registration order created"
        );
        Ok(RegistrationOrder {
            order,
            key_id: self.config.key_id.clone(),
        })
    }

    /// Verify a completed checkout and mark the tutor as paid
    ///
    /// The order must be the one created for this tutor, and the signature
    /// must be valid for `order_id|payment_id`.
    pub async fn verify_registration_payment(
        &self,
        tutor_id: Uuid,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> DomainResult<PublicUser> {
        for (field, value) in [
            ("razorpay_order_id", order_id),
            ("razorpay_payment_id", payment_id),
            ("razorpay_signature", signature),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::RequiredField { field: field.into() }.into());
            }
        }

        let mut tutor = self.load_unpaid_tutor(tutor_id).await?;

        let expected_order = tutor
            .tutor_profile
            .as_ref()
            .and_then(|p| p.payment.order_id.as_deref());
        if expected_order.is_some_and(|expected| expected != order_id)
            || !self.gateway.verify_signature(order_id, payment_id, signature)
        {
            tracing::warn!(
                tutor_id = %tutor_id,
                order_id = %order_id,
                event = "payment_rejected",
                "Payment signature verification failed"
            );
            return Err(MarketplaceError::InvalidPaymentSignature.into());
        }

        tutor.mark_registration_paid(order_id.to_string(), payment_id.to_string());
        let tutor = self.users.update(tutor).await?;

        tracing::info!(
            tutor_id = %tutor_id,
            order_id = %order_id,
            event = "payment_verified",
            "Registration fee paid"
        );
        Ok(PublicUser::from(&tutor))
    }

    async fn load_unpaid_tutor(&self, tutor_id: Uuid) -> DomainResult<User> {
        let user = self
            .users
            .find_by_id(tutor_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        if !user.is_tutor() {
            return Err(MarketplaceError::NotATutor.into());
        }
        if user.has_paid_registration() {
            return Err(MarketplaceError::AlreadyPaid.into());
        }
        Ok(user)
    }
}
