//! Payment verification contract between the resource server and a facilitator.
//!
//! The server hands the raw `X-PAYMENT` header value and the route's
//! [`PaymentRequirements`] to a [`PaymentVerifier`]; the verifier answers with
//! a verification verdict and, if valid, a settlement confirmation.

use base64::Engine;
use std::future::Future;

use crate::error::X402Error;
use crate::facilitator_client::FacilitatorClient;
use crate::payment::PaymentRequirements;
use crate::response::{SettleResponse, VerifyResponse};

/// Verifies and settles an asserted payment.
pub trait PaymentVerifier: Send + Sync {
    /// Check the payment header against the requirements without moving funds.
    fn verify(
        &self,
        payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> impl Future<Output = Result<VerifyResponse, X402Error>> + Send;

    /// Settle a previously verified payment.
    fn settle(
        &self,
        payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> impl Future<Output = Result<SettleResponse, X402Error>> + Send;
}

/// Result of running a payment through verify and settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Granted(SettleResponse),
    Denied(String),
}

/// Verify, then settle. A failed verification or settlement is a denial,
/// not an error; errors are reserved for facilitator communication failures.
pub async fn verify_and_settle<V: PaymentVerifier>(
    verifier: &V,
    payment_header: &str,
    requirements: &PaymentRequirements,
) -> Result<PaymentOutcome, X402Error> {
    let verdict = verifier.verify(payment_header, requirements).await?;
    if !verdict.is_valid {
        let reason = verdict
            .invalid_reason
            .unwrap_or_else(|| "payment invalid".to_string());
        return Ok(PaymentOutcome::Denied(reason));
    }

    let settlement = verifier.settle(payment_header, requirements).await?;
    if !settlement.success {
        let reason = settlement
            .error_reason
            .unwrap_or_else(|| "settlement failed".to_string());
        return Ok(PaymentOutcome::Denied(reason));
    }

    Ok(PaymentOutcome::Granted(settlement))
}

/// Encode a settlement as the base64 JSON value of `X-PAYMENT-RESPONSE`.
pub fn encode_settlement(settlement: &SettleResponse) -> Result<String, X402Error> {
    let json = serde_json::to_vec(settlement)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(json))
}

/// Development stub: any non-empty header counts as paid.
///
/// Nothing is contacted and no funds move. Use [`FacilitatorClient`] for
/// real verification.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyVerifier;

impl PaymentVerifier for AcceptAnyVerifier {
    async fn verify(
        &self,
        payment_header: &str,
        _requirements: &PaymentRequirements,
    ) -> Result<VerifyResponse, X402Error> {
        if payment_header.is_empty() {
            return Ok(VerifyResponse {
                is_valid: false,
                invalid_reason: Some("empty payment header".to_string()),
                payer: None,
            });
        }
        Ok(VerifyResponse {
            is_valid: true,
            invalid_reason: None,
            payer: None,
        })
    }

    async fn settle(
        &self,
        _payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> Result<SettleResponse, X402Error> {
        Ok(SettleResponse::unsettled(&requirements.network))
    }
}

/// Verifier chosen at startup.
#[derive(Debug, Clone)]
pub enum Verifier {
    AcceptAny(AcceptAnyVerifier),
    Facilitator(FacilitatorClient),
}

impl Verifier {
    /// Short label for logs and metrics.
    pub fn mode(&self) -> &'static str {
        match self {
            Verifier::AcceptAny(_) => "accept-any",
            Verifier::Facilitator(_) => "facilitator",
        }
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Verifier::AcceptAny(AcceptAnyVerifier)
    }
}

impl PaymentVerifier for Verifier {
    async fn verify(
        &self,
        payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> Result<VerifyResponse, X402Error> {
        match self {
            Verifier::AcceptAny(v) => v.verify(payment_header, requirements).await,
            Verifier::Facilitator(v) => v.verify(payment_header, requirements).await,
        }
    }

    async fn settle(
        &self,
        payment_header: &str,
        requirements: &PaymentRequirements,
    ) -> Result<SettleResponse, X402Error> {
        match self {
            Verifier::AcceptAny(v) => v.settle(payment_header, requirements).await,
            Verifier::Facilitator(v) => v.settle(payment_header, requirements).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        verify: VerifyResponse,
        settle: SettleResponse,
    }

    impl PaymentVerifier for Scripted {
        async fn verify(
            &self,
            _payment_header: &str,
            _requirements: &PaymentRequirements,
        ) -> Result<VerifyResponse, X402Error> {
            Ok(self.verify.clone())
        }

        async fn settle(
            &self,
            _payment_header: &str,
            _requirements: &PaymentRequirements,
        ) -> Result<SettleResponse, X402Error> {
            Ok(self.settle.clone())
        }
    }

    fn requirements() -> PaymentRequirements {
        PaymentRequirements::exact_usdc(1, crate::DEFAULT_PAY_TO, crate::DEFAULT_FACILITATOR_URL)
    }

    #[actix_rt::test]
    async fn accept_any_grants_non_empty_header() {
        let outcome = verify_and_settle(&AcceptAnyVerifier, "anything", &requirements())
            .await
            .unwrap();
        assert_eq!(outcome, PaymentOutcome::Granted(SettleResponse::unsettled("base")));
    }

    #[actix_rt::test]
    async fn accept_any_denies_empty_header() {
        let outcome = verify_and_settle(&AcceptAnyVerifier, "", &requirements())
            .await
            .unwrap();
        assert_eq!(
            outcome,
            PaymentOutcome::Denied("empty payment header".to_string())
        );
    }

    #[actix_rt::test]
    async fn invalid_verification_skips_settlement() {
        let verifier = Scripted {
            verify: VerifyResponse {
                is_valid: false,
                invalid_reason: Some("insufficient_funds".to_string()),
                payer: None,
            },
            settle: SettleResponse {
                success: false,
                error_reason: Some("must not be reached".to_string()),
                payer: None,
                transaction: None,
                network: "base".to_string(),
            },
        };
        let outcome = verify_and_settle(&verifier, "sig", &requirements())
            .await
            .unwrap();
        assert_eq!(
            outcome,
            PaymentOutcome::Denied("insufficient_funds".to_string())
        );
    }

    #[actix_rt::test]
    async fn failed_settlement_is_denial() {
        let verifier = Scripted {
            verify: VerifyResponse {
                is_valid: true,
                invalid_reason: None,
                payer: Some("0x1".to_string()),
            },
            settle: SettleResponse {
                success: false,
                error_reason: None,
                payer: None,
                transaction: None,
                network: "base".to_string(),
            },
        };
        let outcome = verify_and_settle(&verifier, "sig", &requirements())
            .await
            .unwrap();
        assert_eq!(outcome, PaymentOutcome::Denied("settlement failed".to_string()));
    }

    #[test]
    fn settlement_encodes_as_base64_json() {
        let encoded = encode_settlement(&SettleResponse::unsettled("base")).unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["network"], "base");
        assert!(json.get("transaction").is_none());
    }
}
