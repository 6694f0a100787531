//! Shared secrets store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Secrets shared between the fields of one form.
///
/// Cloning yields another handle to the same store.
#[derive(Debug, Clone, Default)]
pub struct SecretsContext {
    secrets: Arc<RwLock<HashMap<String, String>>>,
}

impl SecretsContext {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.secrets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.secrets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
