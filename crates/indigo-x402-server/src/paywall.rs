use actix_web::HttpRequest;
use std::borrow::Cow;
use x402::{
    verify_and_settle, PaymentOutcome, PaymentRequiredBody, SettleResponse, PAYMENT_HEADER,
};

use crate::error::ServerError;
use crate::metrics::{record_request, PAYMENT_ATTEMPTS};
use crate::state::AppState;

/// The `X-PAYMENT` header value, if present and non-empty.
///
/// Opaque bytes outside visible ASCII are kept, lossily decoded as UTF-8.
pub fn payment_header(req: &HttpRequest) -> Option<Cow<'_, str>> {
    req.headers()
        .get(PAYMENT_HEADER)
        .map(|v| v.as_bytes())
        .filter(|bytes| !bytes.is_empty())
        .map(String::from_utf8_lossy)
}

/// Build the 402 body for the search route.
pub fn payment_required_body(state: &AppState) -> PaymentRequiredBody {
    PaymentRequiredBody::for_search(
        state.config.search_requirements(),
        state.config.price_cents,
    )
}

/// Gate a request on payment.
///
/// Returns the settlement when the verifier grants access. Otherwise returns
/// the error to hand back to the caller: 402 when no payment was asserted or
/// it was denied, 502 when the facilitator could not be consulted.
pub async fn require_payment(
    req: &HttpRequest,
    state: &AppState,
    endpoint: &str,
) -> Result<SettleResponse, ServerError> {
    let Some(header) = payment_header(req) else {
        record_request(endpoint, 402);
        return Err(ServerError::PaymentRequired(Box::new(
            payment_required_body(state),
        )));
    };

    let requirements = state.config.search_requirements();
    tracing::info!(
        endpoint,
        mode = state.verifier.mode(),
        amount = %requirements.amount,
        "payment attempt"
    );

    match verify_and_settle(state.verifier.as_ref(), &header, &requirements).await {
        Ok(PaymentOutcome::Granted(settlement)) => {
            PAYMENT_ATTEMPTS.with_label_values(&["success"]).inc();
            Ok(settlement)
        }
        Ok(PaymentOutcome::Denied(reason)) => {
            PAYMENT_ATTEMPTS.with_label_values(&["rejected"]).inc();
            record_request(endpoint, 402);
            tracing::warn!(endpoint, reason = %reason, "payment rejected");
            let mut body = payment_required_body(state);
            body.message = reason;
            Err(ServerError::PaymentRequired(Box::new(body)))
        }
        Err(e) => {
            PAYMENT_ATTEMPTS.with_label_values(&["error"]).inc();
            record_request(endpoint, 502);
            tracing::error!(endpoint, error = %e, "facilitator communication error");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;
    use actix_web::test::TestRequest;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = TestRequest::get()
            .insert_header(("x-payment", "abc"))
            .to_http_request();
        assert_eq!(payment_header(&req).as_deref(), Some("abc"));
    }

    #[test]
    fn test_empty_header_counts_as_missing() {
        let req = TestRequest::get()
            .insert_header((PAYMENT_HEADER, ""))
            .to_http_request();
        assert_eq!(payment_header(&req), None);
    }

    #[test]
    fn test_obs_text_header_is_present() {
        let req = TestRequest::get()
            .insert_header((
                PAYMENT_HEADER,
                HeaderValue::from_bytes(b"pay\xe9ment").unwrap(),
            ))
            .to_http_request();
        assert_eq!(payment_header(&req).as_deref(), Some("pay\u{fffd}ment"));
    }

    #[test]
    fn test_missing_header() {
        let req = TestRequest::get().to_http_request();
        assert_eq!(payment_header(&req), None);
    }
}
