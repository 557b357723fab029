#![allow(dead_code)]

use async_trait::async_trait;
use camp_registration::application::services::{Deadlines, HealthService};
use camp_registration::domain::collaborators::{
    PaymentProvider, ProcessRuntime, RuntimeSample, StoragePing,
};
use camp_registration::error::ProbeError;
use camp_registration::infrastructure::config::StaticConfigSource;
use camp_registration::state::AppState;
use std::sync::Arc;
use std::time::Duration;

/// How a fake dependency behaves when pinged.
#[derive(Clone, Copy, Debug)]
pub enum Behavior {
    Healthy,
    Failing,
    Hanging,
}

pub struct FakeStorage(pub Behavior);

#[async_trait]
impl StoragePing for FakeStorage {
    async fn ping(&self) -> Result<(), ProbeError> {
        match self.0 {
            Behavior::Healthy => Ok(()),
            Behavior::Failing => Err(ProbeError::Storage(sqlx::Error::PoolTimedOut)),
            Behavior::Hanging => std::future::pending().await,
        }
    }
}

pub struct FakeProvider {
    pub name: &'static str,
    pub behavior: Behavior,
}

#[async_trait]
impl PaymentProvider for FakeProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn ping(&self) -> Result<(), ProbeError> {
        match self.behavior {
            Behavior::Healthy => Ok(()),
            Behavior::Failing => Err(ProbeError::UnexpectedStatus {
                provider: self.name.to_string(),
                status: 502,
            }),
            Behavior::Hanging => std::future::pending().await,
        }
    }
}

/// Runtime reporting a fixed memory percentage and one day of uptime.
pub struct FixedRuntime(pub u64);

impl ProcessRuntime for FixedRuntime {
    fn sample(&self) -> RuntimeSample {
        RuntimeSample {
            used_bytes: self.0,
            total_bytes: 100,
            uptime_seconds: 86_400,
        }
    }
}

/// Knobs for one test scenario. Defaults to everything healthy.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub storage: Behavior,
    pub stripe: Behavior,
    pub paypal: Behavior,
    pub email_configured: bool,
    pub memory_percent: u64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            storage: Behavior::Healthy,
            stripe: Behavior::Healthy,
            paypal: Behavior::Healthy,
            email_configured: true,
            memory_percent: 35,
        }
    }
}

/// Short deadlines keep timeout scenarios fast in real time.
pub const TEST_DEADLINES: Deadlines = Deadlines {
    storage: Duration::from_millis(300),
    payment: Duration::from_millis(100),
};

pub fn create_health_service(scenario: Scenario) -> HealthService {
    let config = if scenario.email_configured {
        StaticConfigSource::new()
            .with("SMTP_HOST", "smtp.camp.test")
            .with("SMTP_FROM", "registrations@camp.test")
    } else {
        StaticConfigSource::new()
    };

    let providers: Vec<Arc<dyn PaymentProvider>> = vec![
        Arc::new(FakeProvider {
            name: "stripe",
            behavior: scenario.stripe,
        }),
        Arc::new(FakeProvider {
            name: "paypal",
            behavior: scenario.paypal,
        }),
    ];

    HealthService::new(
        Arc::new(FakeStorage(scenario.storage)),
        providers,
        Arc::new(config),
        Arc::new(FixedRuntime(scenario.memory_percent)),
    )
    .with_deadlines(TEST_DEADLINES)
}

pub fn create_test_state(scenario: Scenario) -> AppState {
    AppState::new(Arc::new(create_health_service(scenario)))
}
