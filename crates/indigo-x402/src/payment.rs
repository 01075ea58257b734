use serde::{Deserialize, Serialize};

use crate::constants::{
    cents_to_amount, format_cents, BASE_NETWORK, SCHEME_NAME, USDC_BASE, X402_VERSION,
};

/// Payment terms a caller must satisfy to access a paywalled route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirements {
    pub version: String,
    pub scheme: String,
    pub network: String,
    pub asset: String,
    /// Smallest-unit token amount as a decimal string.
    pub amount: String,
    pub pay_to: String,
    pub facilitator: String,
}

impl PaymentRequirements {
    /// Requirements for an exact USDC payment on Base.
    pub fn exact_usdc(price_cents: u64, pay_to: &str, facilitator: &str) -> Self {
        Self {
            version: X402_VERSION.to_string(),
            scheme: SCHEME_NAME.to_string(),
            network: BASE_NETWORK.to_string(),
            asset: USDC_BASE.to_string(),
            amount: cents_to_amount(price_cents),
            pay_to: pay_to.to_string(),
            facilitator: facilitator.to_string(),
        }
    }
}

/// The 402 response body returned by the resource server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequiredBody {
    pub error: String,
    pub x402: PaymentRequirements,
    pub message: String,
}

impl PaymentRequiredBody {
    pub fn new(requirements: PaymentRequirements, message: impl Into<String>) -> Self {
        Self {
            error: "Payment Required".to_string(),
            x402: requirements,
            message: message.into(),
        }
    }

    /// Body with the standard "pay N to search" message.
    pub fn for_search(requirements: PaymentRequirements, price_cents: u64) -> Self {
        let message = format!(
            "Search AI Indigo tools for {} USDC",
            format_cents(price_cents)
        );
        Self::new(requirements, message)
    }
}
