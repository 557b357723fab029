//! Payment provider probes and their combination into one check.

use futures::future::join_all;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

use super::deadline::with_deadline;
use super::guard::catch_panic;
use crate::domain::collaborators::PaymentProvider;
use crate::domain::{CheckResult, PaymentsCheck};
use crate::error::ProbeError;

pub const PAYMENTS_DEGRADED: &str = "some payment services unavailable";

/// Pings a single provider reported under `name`, bounded by `deadline`.
pub async fn check_provider(
    name: &str,
    provider: &dyn PaymentProvider,
    deadline: Duration,
) -> CheckResult {
    let started = Instant::now();

    let probe = with_deadline(name, deadline, async {
        match provider.ping().await {
            Ok(()) => CheckResult::healthy(started.elapsed()),
            Err(e) => {
                warn!(provider = name, error = %e, "Payment provider health check failed");
                CheckResult::unhealthy(started.elapsed(), failure_message(name, &e))
            }
        }
    });

    catch_panic(probe).await.unwrap_or_else(|panic| {
        warn!(provider = name, %panic, "Payment provider probe panicked");
        CheckResult::unhealthy(started.elapsed(), format!("{name} check failed"))
    })
}

/// Pings every provider concurrently and combines the outcomes.
///
/// All providers healthy gives Healthy. Any failure gives Degraded, never
/// Unhealthy: payments are not needed to serve most traffic.
pub async fn check_payments(
    providers: &[Arc<dyn PaymentProvider>],
    deadline: Duration,
) -> PaymentsCheck {
    let started = Instant::now();

    let names: Vec<String> = providers
        .iter()
        .enumerate()
        .map(|(index, provider)| provider_name(provider.as_ref(), index))
        .collect();

    let results = join_all(
        names
            .iter()
            .zip(providers)
            .map(|(name, provider)| check_provider(name, provider.as_ref(), deadline)),
    )
    .await;

    let elapsed = started.elapsed();
    let all_healthy = results.iter().all(CheckResult::is_healthy);

    let providers: BTreeMap<String, CheckResult> = names.into_iter().zip(results).collect();

    let check = if all_healthy {
        CheckResult::healthy(elapsed)
    } else {
        CheckResult::degraded(elapsed, PAYMENTS_DEGRADED)
    };

    PaymentsCheck { check, providers }
}

/// The provider's name, or `provider-<index>` if `name()` panics.
fn provider_name(provider: &dyn PaymentProvider, index: usize) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| provider.name()))
        .map(str::to_string)
        .unwrap_or_else(|_| {
            warn!(index, "Payment provider name panicked");
            format!("provider-{index}")
        })
}

/// Message reported for a failed provider. Transport errors are summarized,
/// since their text may carry endpoint details.
fn failure_message(name: &str, error: &ProbeError) -> String {
    match error {
        ProbeError::Http(_) | ProbeError::Storage(_) => format!("{name} unreachable"),
        other => other.to_string(),
    }
}
