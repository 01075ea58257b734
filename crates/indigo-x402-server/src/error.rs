use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use x402::{PaymentRequiredBody, X402Error};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No payment, or the verifier denied it
    #[error("payment required: {}", .0.message)]
    PaymentRequired(Box<PaymentRequiredBody>),

    /// Facilitator could not be reached or answered nonsense
    #[error("payment processing failed: {0}")]
    Facilitator(#[from] X402Error),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            ServerError::Facilitator(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServerError::PaymentRequired(body) => HttpResponse::PaymentRequired().json(body),
            ServerError::Facilitator(_) => HttpResponse::BadGateway().json(serde_json::json!({
                "error": "payment processing failed"
            })),
        }
    }
}
