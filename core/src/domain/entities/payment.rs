//! Registration fee orders created at the payment gateway.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order returned by the gateway, handed to the client checkout widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    /// Gateway order id
    pub id: String,
    /// Amount in the smallest currency unit
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
}

/// Receipt reference for a tutor's registration order.
///
/// Gateways cap receipts at 40 characters, so the simple uuid form is used.
pub fn registration_receipt(tutor_id: Uuid) -> String {
    format!("reg_{}", tutor_id.simple())
}
