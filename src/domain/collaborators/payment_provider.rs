//! External payment provider interface.

use async_trait::async_trait;

use crate::error::ProbeError;

/// A payment provider that can be pinged for reachability.
///
/// Credentials are resolved by the implementation on every ping, so a
/// provider with missing credentials fails the ping instead of failing
/// construction.
///
/// # Implementations
///
/// - [`crate::infrastructure::payments::StripeProvider`]
/// - [`crate::infrastructure::payments::PaypalProvider`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Short provider name used as the key in the payments breakdown.
    fn name(&self) -> &'static str;

    /// Pings the provider's account or auth endpoint.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::NotConfigured`] when credentials are absent
    /// - [`ProbeError::Http`] on transport failure
    /// - [`ProbeError::UnexpectedStatus`] on a non-success response
    async fn ping(&self) -> Result<(), ProbeError>;
}
