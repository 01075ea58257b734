/// x402 protocol version advertised in payment requirements.
pub const X402_VERSION: u32 = 1;

/// x402 scheme name: pay exactly the advertised amount.
pub const SCHEME_NAME: &str = "exact";

/// Network identifier for Base mainnet.
pub const BASE_NETWORK: &str = "base";

/// USDC contract on Base.
pub const USDC_BASE: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

/// USDC has 6 decimal places.
pub const TOKEN_DECIMALS: u32 = 6;

/// Request header carrying the payment assertion.
pub const PAYMENT_HEADER: &str = "X-PAYMENT";

/// Response header carrying the base64-encoded settlement result.
pub const PAYMENT_RESPONSE_HEADER: &str = "X-PAYMENT-RESPONSE";

/// Default payment recipient.
pub const DEFAULT_PAY_TO: &str = "0xA6Bba2453673196ae22fb249C7eA9FA118a87150";

/// Default facilitator base URL.
pub const DEFAULT_FACILITATOR_URL: &str = "https://pay.openfacilitator.io";

/// Smallest token units per US cent.
pub const UNITS_PER_CENT: u64 = 10u64.pow(TOKEN_DECIMALS - 2);

/// Convert a price in cents into a smallest-unit USDC amount string.
pub fn cents_to_amount(cents: u64) -> String {
    (cents * UNITS_PER_CENT).to_string()
}

/// Format a price in cents as dollars, e.g. `1` -> `"$0.01"`.
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
