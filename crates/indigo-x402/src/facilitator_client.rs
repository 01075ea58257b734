//! HTTP client for a remote facilitator's `/verify` and `/settle` endpoints.

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::constants::X402_VERSION;
use crate::error::X402Error;
use crate::payment::PaymentRequirements;
use crate::response::{SettleResponse, VerifyResponse};
use crate::verifier::PaymentVerifier;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Facilitator reachable over HTTP. One attempt per call, no retries.
#[derive(Debug, Clone)]
pub struct FacilitatorClient {
    http: reqwest::Client,
    base_url: String,
}

impl FacilitatorClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> Result<T, X402Error> {
        let url = format!("{}/{path}", self.base_url);
        let body = serde_json::json!({
            "x402Version": X402_VERSION,
            "paymentHeader": payment_header,
            "paymentRequirements": requirements,
        });

        let resp = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(X402Error::Facilitator(format!(
                "{path} returned HTTP {status}"
            )));
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl PaymentVerifier for FacilitatorClient {
    async fn verify(
        &self,
        payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> Result<VerifyResponse, X402Error> {
        self.post("verify", payment_header, requirements).await
    }

    async fn settle(
        &self,
        payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> Result<SettleResponse, X402Error> {
        self.post("settle", payment_header, requirements).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = FacilitatorClient::new("https://pay.example.io/");
        assert_eq!(client.base_url(), "https://pay.example.io");
    }
}
