use crate::domain::ports::EnvSource;
use crate::error::{PaymentError, Result};
use std::env::VarError;

/// Reads configuration from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Result<Option<String>> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(PaymentError::InvalidEnv {
                var: name.to_string(),
                reason: "is not valid unicode".to_string(),
            }),
        }
    }
}
