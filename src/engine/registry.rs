//! Key-value store shared across scenes.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for RegistryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryValue::Int(n) => write!(f, "{}", n),
            RegistryValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RegistryValue {
    fn from(n: i64) -> Self {
        RegistryValue::Int(n)
    }
}

impl From<String> for RegistryValue {
    fn from(s: String) -> Self {
        RegistryValue::Text(s)
    }
}

impl From<&str> for RegistryValue {
    fn from(s: &str) -> Self {
        RegistryValue::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    values: HashMap<String, RegistryValue>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<RegistryValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&RegistryValue> {
        self.values.get(key)
    }

    /// Display form of a value, empty when the key is unset.
    pub fn get_text(&self, key: &str) -> String {
        self.values
            .get(key)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }
}
