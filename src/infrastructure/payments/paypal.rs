//! PayPal reachability check.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

use super::{endpoint, ensure_success};
use crate::domain::collaborators::{ConfigSource, PaymentProvider};
use crate::error::ProbeError;

pub const PAYPAL_CLIENT_ID: &str = "PAYPAL_CLIENT_ID";
pub const PAYPAL_CLIENT_SECRET: &str = "PAYPAL_CLIENT_SECRET";

/// Pings PayPal by requesting a client-credentials access token.
///
/// The token itself is discarded.
pub struct PaypalProvider {
    client: Client,
    base_url: String,
    config: Arc<dyn ConfigSource>,
}

impl PaypalProvider {
    pub fn new(client: Client, base_url: impl Into<String>, config: Arc<dyn ConfigSource>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            config,
        }
    }
}

#[async_trait]
impl PaymentProvider for PaypalProvider {
    fn name(&self) -> &'static str {
        "paypal"
    }

    async fn ping(&self) -> Result<(), ProbeError> {
        let not_configured = || ProbeError::NotConfigured(self.name().to_string());

        let client_id = self.config.get(PAYPAL_CLIENT_ID);
        let client_id = client_id.as_deref().ok_or_else(not_configured)?;
        let client_secret = self.config.get(PAYPAL_CLIENT_SECRET);
        let client_secret = client_secret.as_deref().ok_or_else(not_configured)?;

        let response = self
            .client
            .post(endpoint(&self.base_url, "/v1/oauth2/token"))
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        ensure_success(self.name(), response)
    }
}
