//! Tri-state health status and the reducer that collapses many into one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health of a single check or of the whole system.
///
/// Variants are declared in ascending severity, so the derived [`Ord`]
/// gives `Unhealthy > Degraded > Healthy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Degraded,
    Unhealthy,
}

impl Status {
    /// Lowercase name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
        }
    }

    /// Whether the service should keep receiving traffic in this state.
    pub fn is_serving(&self) -> bool {
        !matches!(self, Self::Unhealthy)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collapses individual statuses into the overall one.
///
/// Unhealthy if any is Unhealthy, else Degraded if any is Degraded, else
/// Healthy. Depends only on which values are present, never on their order.
/// An empty input is Healthy.
pub fn reduce<I>(statuses: I) -> Status
where
    I: IntoIterator<Item = Status>,
{
    statuses.into_iter().max().unwrap_or(Status::Healthy)
}
