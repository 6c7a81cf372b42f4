use tc_shared::config::PaymentConfig;

/// Configuration for the payment service
#[derive(Debug, Clone)]
pub struct PaymentServiceConfig {
    /// Public key id handed to the checkout widget
    pub key_id: String,
    /// Registration fee in the smallest currency unit
    pub registration_fee: u64,
    pub currency: String,
}

impl Default for PaymentServiceConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            registration_fee: 50_000,
            currency: String::from("INR"),
        }
    }
}

impl From<&PaymentConfig> for PaymentServiceConfig {
    fn from(config: &PaymentConfig) -> Self {
        Self {
            key_id: config.key_id.clone(),
            registration_fee: config.registration_fee,
            currency: config.currency.clone(),
        }
    }
}
