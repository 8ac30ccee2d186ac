use super::config::StripeConfig;
use crate::domain::amount::MinorUnits;
use crate::domain::fee::{FeeBreakdown, FeePolicy};
use crate::domain::keys::{ApiVersion, KeyMode, PublishableKey, SecretKey};
use crate::domain::ports::EnvSource;
use crate::error::Result;
use crate::infrastructure::process_env::ProcessEnv;
use tracing::info;

pub const API_BASE_URL: &str = "https://api.stripe.com";

/// Client-side handle. Carries only the publishable key handed to the browser SDK.
#[derive(Debug, Clone)]
pub struct BrowserClient {
    publishable_key: PublishableKey,
}

impl BrowserClient {
    pub fn new(publishable_key: PublishableKey) -> Self {
        Self { publishable_key }
    }

    pub fn publishable_key(&self) -> &PublishableKey {
        &self.publishable_key
    }

    pub fn mode(&self) -> KeyMode {
        self.publishable_key.mode()
    }
}

/// Server-side handle, bound to a secret key and a pinned API version.
#[derive(Debug, Clone)]
pub struct ServerClient {
    secret_key: SecretKey,
    api_version: ApiVersion,
}

impl ServerClient {
    pub fn new(secret_key: SecretKey, api_version: ApiVersion) -> Self {
        Self {
            secret_key,
            api_version,
        }
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    pub fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    pub fn mode(&self) -> KeyMode {
        self.secret_key.mode()
    }

    pub fn base_url(&self) -> &'static str {
        API_BASE_URL
    }

    /// Headers every server-side request carries.
    pub fn request_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Authorization",
                format!("Bearer {}", self.secret_key.expose()),
            ),
            ("Stripe-Version", self.api_version.to_string()),
        ]
    }
}

/// Both provider handles plus the platform fee policy.
///
/// Build once at startup and share (wrap in `Arc` across tasks); nothing in
/// here mutates after construction.
#[derive(Debug, Clone)]
pub struct Payments {
    pub browser: BrowserClient,
    pub server: ServerClient,
    pub fees: FeePolicy,
}

impl Payments {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv::new())
    }

    pub fn from_source(source: &dyn EnvSource) -> Result<Self> {
        let config = StripeConfig::load(source)?;
        info!(mode = %config.mode(), api_version = %config.api_version, "payment clients ready");
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: StripeConfig) -> Self {
        Self {
            browser: BrowserClient::new(config.publishable_key),
            server: ServerClient::new(config.secret_key, config.api_version),
            fees: config.fees,
        }
    }

    /// Platform fee for `amount` (minor units) under the configured policy.
    pub fn platform_fee(&self, amount: u64) -> u64 {
        self.fees.fee(MinorUnits::new(amount)).value()
    }

    pub fn fee_breakdown(&self, amount: u64) -> FeeBreakdown {
        self.fees.breakdown(MinorUnits::new(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::{FEE_PERCENT_VAR, PUBLISHABLE_KEY_VAR, SECRET_KEY_VAR};
    use crate::infrastructure::in_memory::InMemoryEnv;

    fn env() -> InMemoryEnv {
        InMemoryEnv::new()
            .with(PUBLISHABLE_KEY_VAR, "pk_live_Pub123")
            .with(SECRET_KEY_VAR, "sk_live_Sec456")
    }

    #[test]
    fn test_payments_from_source() {
        let payments = Payments::from_source(&env()).unwrap();
        assert_eq!(payments.browser.publishable_key().as_str(), "pk_live_Pub123");
        assert_eq!(payments.browser.mode(), KeyMode::Live);
        assert_eq!(payments.server.mode(), KeyMode::Live);
        assert_eq!(payments.server.api_version().as_str(), ApiVersion::PINNED);
        assert_eq!(payments.server.base_url(), API_BASE_URL);
    }

    #[test]
    fn test_server_request_headers() {
        let payments = Payments::from_source(&env()).unwrap();
        let headers = payments.server.request_headers();
        assert_eq!(
            headers,
            vec![
                ("Authorization", "Bearer sk_live_Sec456".to_string()),
                ("Stripe-Version", ApiVersion::PINNED.to_string()),
            ]
        );
    }

    #[test]
    fn test_platform_fee_uses_policy() {
        let payments = Payments::from_source(&env()).unwrap();
        assert_eq!(payments.platform_fee(999), 100);

        let payments = Payments::from_source(&env().with(FEE_PERCENT_VAR, "5")).unwrap();
        assert_eq!(payments.platform_fee(999), 50);
        let breakdown = payments.fee_breakdown(999);
        assert_eq!(breakdown.net.value(), 949);
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let payments = Payments::from_source(&env()).unwrap();
        let debug = format!("{:?}", payments);
        assert!(!debug.contains("Sec456"));
        assert!(debug.contains("sk_live_****c456"));
    }
}
