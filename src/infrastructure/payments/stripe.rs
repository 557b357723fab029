//! Stripe reachability check.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

use super::{endpoint, ensure_success};
use crate::domain::collaborators::{ConfigSource, PaymentProvider};
use crate::error::ProbeError;

pub const STRIPE_SECRET_KEY: &str = "STRIPE_SECRET_KEY";

/// Pings Stripe by reading the account balance.
pub struct StripeProvider {
    client: Client,
    base_url: String,
    config: Arc<dyn ConfigSource>,
}

impl StripeProvider {
    pub fn new(client: Client, base_url: impl Into<String>, config: Arc<dyn ConfigSource>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            config,
        }
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    fn name(&self) -> &'static str {
        "stripe"
    }

    async fn ping(&self) -> Result<(), ProbeError> {
        let secret = self.config.get(STRIPE_SECRET_KEY);
        let secret = secret
            .as_deref()
            .ok_or_else(|| ProbeError::NotConfigured(self.name().to_string()))?;

        let response = self
            .client
            .get(endpoint(&self.base_url, "/v1/balance"))
            .bearer_auth(secret)
            .send()
            .await?;

        ensure_success(self.name(), response)
    }
}
