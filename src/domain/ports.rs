use crate::error::Result;

/// Where configuration values come from.
///
/// The process environment in production, a map in tests or when the host
/// application already holds its own settings.
pub trait EnvSource: Send + Sync {
    /// `Ok(None)` when unset; `Err` when set but unreadable.
    fn var(&self, name: &str) -> Result<Option<String>>;
}
