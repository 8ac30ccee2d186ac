use crate::domain::fee::{DEFAULT_FEE_PERCENT, FeePolicy};
use crate::domain::keys::{ApiVersion, KeyMode, PublishableKey, SecretKey};
use crate::domain::ports::EnvSource;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::{debug, warn};

pub const PUBLISHABLE_KEY_VAR: &str = "NEXT_PUBLIC_STRIPE_PUBLISHABLE_KEY";
pub const SECRET_KEY_VAR: &str = "STRIPE_SECRET_KEY";
pub const FEE_PERCENT_VAR: &str = "PLATFORM_FEE_PERCENT";

/// Validated provider credentials plus the platform fee policy.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub publishable_key: PublishableKey,
    pub secret_key: SecretKey,
    pub api_version: ApiVersion,
    pub fees: FeePolicy,
}

impl StripeConfig {
    /// Reads and validates configuration from `source`.
    ///
    /// Both keys are required and must belong to the same mode (test or live).
    /// The fee percentage is optional and falls back to [`DEFAULT_FEE_PERCENT`].
    pub fn load(source: &dyn EnvSource) -> Result<Self> {
        let publishable_key = PublishableKey::parse(
            PUBLISHABLE_KEY_VAR,
            &required(source, PUBLISHABLE_KEY_VAR)?,
        )?;
        let secret_key = SecretKey::parse(SECRET_KEY_VAR, &required(source, SECRET_KEY_VAR)?)?;

        if publishable_key.mode() != secret_key.mode() {
            return Err(PaymentError::KeyModeMismatch {
                publishable: publishable_key.mode().to_string(),
                secret: secret_key.mode().to_string(),
            });
        }

        let fees = match optional(source, FEE_PERCENT_VAR)? {
            Some(raw) => {
                let percent = Decimal::from_str(&raw).map_err(|e| {
                    PaymentError::InvalidFeeRate(format!("{}={:?}: {}", FEE_PERCENT_VAR, raw, e))
                })?;
                FeePolicy::from_percent(percent)?
            }
            None => FeePolicy::from_percent(DEFAULT_FEE_PERCENT)?,
        };

        if secret_key.mode() == KeyMode::Live && secret_key.is_restricted() {
            debug!("using a restricted live key; some endpoints may be unavailable");
        }
        if fees.rate_bps() == 0 {
            warn!("platform fee is 0%, no fee will be retained");
        }

        let config = Self {
            publishable_key,
            secret_key,
            api_version: ApiVersion::pinned(),
            fees,
        };
        debug!(
            mode = %config.mode(),
            api_version = %config.api_version,
            fee_bps = config.fees.rate_bps(),
            "loaded payment configuration"
        );
        Ok(config)
    }

    pub fn mode(&self) -> KeyMode {
        self.secret_key.mode()
    }

    /// A view safe to print or log: keys are masked.
    pub fn redacted(&self) -> RedactedConfig {
        RedactedConfig {
            mode: self.mode(),
            publishable_key: self.publishable_key.masked(),
            secret_key: self.secret_key.masked(),
            restricted: self.secret_key.is_restricted(),
            api_version: self.api_version.to_string(),
            fee_percent: self.fees.rate_percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedactedConfig {
    pub mode: KeyMode,
    pub publishable_key: String,
    pub secret_key: String,
    pub restricted: bool,
    pub api_version: String,
    pub fee_percent: Decimal,
}

fn optional(source: &dyn EnvSource, name: &str) -> Result<Option<String>> {
    Ok(source
        .var(name)?
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

fn required(source: &dyn EnvSource, name: &str) -> Result<String> {
    optional(source, name)?.ok_or_else(|| PaymentError::MissingEnv(name.to_string()))
}
