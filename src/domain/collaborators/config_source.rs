//! Configuration lookup with explicit presence.

/// Result of a configuration lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Present(String),
    Absent,
}

impl ConfigValue {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrows the value, if any.
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

/// Read-only key/value configuration.
///
/// # Implementations
///
/// - [`crate::infrastructure::config::EnvConfigSource`] - process environment
/// - [`crate::infrastructure::config::StaticConfigSource`] - fixed map
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> ConfigValue;
}
