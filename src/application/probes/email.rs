//! Outbound-email configuration probe.

use tokio::time::Instant;
use tracing::debug;

use crate::domain::CheckResult;
use crate::domain::collaborators::ConfigSource;

/// Keys that must all be present for outbound email to work.
pub const EMAIL_CONFIG_KEYS: [&str; 2] = ["SMTP_HOST", "SMTP_FROM"];
pub const EMAIL_NOT_CONFIGURED: &str = "email service not configured";

/// Checks presence of email configuration. Local only, never suspends.
///
/// Values are inspected for presence and never copied into the result.
pub fn check_email(config: &dyn ConfigSource) -> CheckResult {
    let started = Instant::now();

    let missing: Vec<&str> = EMAIL_CONFIG_KEYS
        .into_iter()
        .filter(|key| !config.get(key).is_present())
        .collect();

    if missing.is_empty() {
        CheckResult::healthy(started.elapsed())
    } else {
        debug!(?missing, "Email configuration incomplete");
        CheckResult::degraded(started.elapsed(), EMAIL_NOT_CONFIGURED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use crate::domain::collaborators::{ConfigValue, MockConfigSource};

    #[test]
    fn test_all_keys_present_is_healthy() {
        let mut config = MockConfigSource::new();
        config
            .expect_get()
            .returning(|_| ConfigValue::Present("configured".to_string()));

        let result = check_email(&config);

        assert_eq!(result.status, Status::Healthy);
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_missing_key_is_degraded() {
        let mut config = MockConfigSource::new();
        config.expect_get().returning(|key| {
            if key == "SMTP_FROM" {
                ConfigValue::Absent
            } else {
                ConfigValue::Present("smtp.example.org".to_string())
            }
        });

        let result = check_email(&config);

        assert_eq!(result.status, Status::Degraded);
        assert_eq!(result.error_message.as_deref(), Some(EMAIL_NOT_CONFIGURED));
    }

    #[test]
    fn test_nothing_configured_is_degraded_not_unhealthy() {
        let mut config = MockConfigSource::new();
        config.expect_get().returning(|_| ConfigValue::Absent);

        assert_eq!(check_email(&config).status, Status::Degraded);
    }
}
