//! HTTP clients for the external payment providers.
//!
//! Each provider reads its credentials from a
//! [`crate::domain::collaborators::ConfigSource`] on every ping and calls one
//! cheap authenticated endpoint.
//!
//! - [`StripeProvider`] - `GET /v1/balance` with the secret key
//! - [`PaypalProvider`] - `POST /v1/oauth2/token` with client credentials

mod paypal;
mod stripe;

pub use paypal::PaypalProvider;
pub use stripe::StripeProvider;

use reqwest::Response;

use crate::error::ProbeError;

/// Maps a non-2xx response to [`ProbeError::UnexpectedStatus`].
fn ensure_success(provider: &str, response: Response) -> Result<(), ProbeError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ProbeError::UnexpectedStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Joins a base URL and an absolute path without doubling the slash.
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
