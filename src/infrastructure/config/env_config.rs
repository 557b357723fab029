//! Environment-backed and static configuration sources.

use std::collections::HashMap;
use std::env;

use crate::domain::collaborators::{ConfigSource, ConfigValue};

/// Reads keys from the process environment on every lookup.
///
/// Unset, empty and non-UTF-8 variables are all [`ConfigValue::Absent`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> ConfigValue {
        match env::var(key) {
            Ok(value) if !value.trim().is_empty() => ConfigValue::Present(value),
            _ => ConfigValue::Absent,
        }
    }
}

/// Fixed key/value configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    values: HashMap<String, String>,
}

impl StaticConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticConfigSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for StaticConfigSource {
    fn get(&self, key: &str) -> ConfigValue {
        match self.values.get(key) {
            Some(value) if !value.trim().is_empty() => ConfigValue::Present(value.clone()),
            _ => ConfigValue::Absent,
        }
    }
}
