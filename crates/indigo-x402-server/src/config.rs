use alloy::primitives::Address;
use url::Url;
use x402::{
    FacilitatorClient, PaymentRequirements, Verifier, DEFAULT_FACILITATOR_URL, DEFAULT_PAY_TO,
};

/// Search price in US cents.
pub const PRICE_CENTS: u64 = 1;

const DEFAULT_PORT: u16 = 3000;

/// How `X-PAYMENT` headers are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMode {
    /// Any non-empty header is treated as paid.
    AcceptAny,
    /// Forward to the facilitator's `/verify` and `/settle`.
    Facilitator,
}

impl std::str::FromStr for VerificationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accept-any" | "stub" | "dev" => Ok(Self::AcceptAny),
            "facilitator" => Ok(Self::Facilitator),
            _ => Err(ConfigError::InvalidVerificationMode(s.to_string())),
        }
    }
}

#[derive(Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Payment recipient, kept exactly as configured
    pub wallet_address: String,
    /// Facilitator base URL advertised to payers
    pub facilitator_url: String,
    pub verification: VerificationMode,
    /// CORS allowed origins (`*` = any)
    pub allowed_origins: Vec<String>,
    /// Bearer token required for /metrics (None = public)
    pub metrics_token: Option<String>,
    pub price_cents: u64,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("wallet_address", &self.wallet_address)
            .field("facilitator_url", &self.facilitator_url)
            .field("verification", &self.verification)
            .field("allowed_origins", &self.allowed_origins)
            .field(
                "metrics_token",
                &self.metrics_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("price_cents", &self.price_cents)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            wallet_address: DEFAULT_PAY_TO.to_string(),
            facilitator_url: DEFAULT_FACILITATOR_URL.to_string(),
            verification: VerificationMode::AcceptAny,
            allowed_origins: vec!["*".to_string()],
            metrics_token: None,
            price_cents: PRICE_CENTS,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = var("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let wallet_address = var("WALLET_ADDRESS").unwrap_or_else(|| DEFAULT_PAY_TO.to_string());
        wallet_address
            .parse::<Address>()
            .map_err(|_| ConfigError::InvalidAddress(wallet_address.clone()))?;

        let facilitator_url =
            var("FACILITATOR_URL").unwrap_or_else(|| DEFAULT_FACILITATOR_URL.to_string());
        Url::parse(&facilitator_url)
            .map_err(|_| ConfigError::InvalidUrl(facilitator_url.clone()))?;

        let verification = match var("PAYMENT_VERIFICATION") {
            Some(mode) => mode.parse()?,
            None => VerificationMode::AcceptAny,
        };

        let allowed_origins: Vec<String> = var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        let metrics_token = var("METRICS_TOKEN");

        Ok(Self {
            port,
            wallet_address,
            facilitator_url,
            verification,
            allowed_origins,
            metrics_token,
            price_cents: PRICE_CENTS,
        })
    }

    /// Payment requirements for the search route.
    pub fn search_requirements(&self) -> PaymentRequirements {
        PaymentRequirements::exact_usdc(
            self.price_cents,
            &self.wallet_address,
            &self.facilitator_url,
        )
    }

    /// Build the verifier selected by `verification`.
    pub fn build_verifier(&self, http: reqwest::Client) -> Verifier {
        match self.verification {
            VerificationMode::AcceptAny => Verifier::default(),
            VerificationMode::Facilitator => {
                Verifier::Facilitator(FacilitatorClient::with_client(http, &self.facilitator_url))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid PAYMENT_VERIFICATION mode: {0} (expected accept-any or facilitator)")]
    InvalidVerificationMode(String),
}
