use async_trait::async_trait;

use crate::domain::entities::PaymentOrder;
use crate::errors::DomainError;

/// Payment gateway operations used by the registration flow
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order for `amount` (smallest currency unit)
    ///
    /// # Errors
    /// `DomainError::External` when the gateway is unreachable or refuses
    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<PaymentOrder, DomainError>;

    /// Check the signature the gateway attached to a completed payment
    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
}
