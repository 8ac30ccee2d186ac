use crate::error::{PaymentError, Result};
use serde::Serialize;
use std::fmt;

/// Whether a key talks to the provider's sandbox or to live money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    Test,
    Live,
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMode::Test => write!(f, "test"),
            KeyMode::Live => write!(f, "live"),
        }
    }
}

fn parse_mode(var: &str, rest: &str) -> Result<KeyMode> {
    let (mode, tail) = if let Some(tail) = rest.strip_prefix("test_") {
        (KeyMode::Test, tail)
    } else if let Some(tail) = rest.strip_prefix("live_") {
        (KeyMode::Live, tail)
    } else {
        return Err(invalid(var, "expected a test_ or live_ key"));
    };
    if tail.is_empty() {
        return Err(invalid(var, "key body is empty"));
    }
    if tail.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(invalid(var, "key contains unexpected characters"));
    }
    Ok(mode)
}

fn invalid(var: &str, reason: &str) -> PaymentError {
    PaymentError::InvalidKey {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}

/// Keeps the mode prefix and the last four characters.
fn mask(raw: &str, prefix_len: usize) -> String {
    let tail_start = raw.len().saturating_sub(4).max(prefix_len);
    format!("{}****{}", &raw[..prefix_len], &raw[tail_start..])
}

/// Publishable (client-side) key, e.g. `pk_test_...`.
#[derive(Clone, PartialEq, Eq)]
pub struct PublishableKey {
    raw: String,
    mode: KeyMode,
}

impl PublishableKey {
    /// Parses a key read from `var`, which is only used for error messages.
    pub fn parse(var: &str, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let rest = raw
            .strip_prefix("pk_")
            .ok_or_else(|| invalid(var, "publishable keys start with pk_"))?;
        let mode = parse_mode(var, rest)?;
        Ok(Self {
            raw: raw.to_string(),
            mode,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    pub fn masked(&self) -> String {
        mask(&self.raw, "pk_".len() + "test_".len())
    }
}

impl fmt::Debug for PublishableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublishableKey").field(&self.masked()).finish()
    }
}

impl fmt::Display for PublishableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Secret (server-side) key. Standard `sk_` and restricted `rk_` keys are accepted.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    raw: String,
    mode: KeyMode,
    restricted: bool,
}

impl SecretKey {
    pub fn parse(var: &str, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (rest, restricted) = if let Some(rest) = raw.strip_prefix("sk_") {
            (rest, false)
        } else if let Some(rest) = raw.strip_prefix("rk_") {
            (rest, true)
        } else {
            return Err(invalid(var, "secret keys start with sk_ or rk_"));
        };
        let mode = parse_mode(var, rest)?;
        Ok(Self {
            raw: raw.to_string(),
            mode,
            restricted,
        })
    }

    /// The raw key. Only meant for building the request authorization header.
    pub fn expose(&self) -> &str {
        &self.raw
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    pub fn masked(&self) -> String {
        mask(&self.raw, "sk_".len() + "test_".len())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("key", &self.masked())
            .field("mode", &self.mode)
            .field("restricted", &self.restricted)
            .finish()
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Provider API version, pinned so that response shapes don't shift under us.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ApiVersion(String);

impl ApiVersion {
    pub const PINNED: &'static str = "2024-06-20";

    /// Accepts `YYYY-MM-DD`, optionally followed by a `.release` name.
    pub fn new(version: &str) -> Result<Self> {
        let date = version.split_once('.').map_or(version, |(date, _)| date);
        let parts: Vec<&str> = date.split('-').collect();
        let well_formed = matches!(parts.as_slice(), [y, m, d]
            if y.len() == 4 && m.len() == 2 && d.len() == 2
                && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
        if !well_formed {
            return Err(PaymentError::InvalidApiVersion(version.to_string()));
        }
        Ok(Self(version.to_string()))
    }

    pub fn pinned() -> Self {
        Self(Self::PINNED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
