use actix_web::{web, App, HttpResponse, HttpServer};

use x402::{
    verify_and_settle, FacilitatorClient, PaymentOutcome, PaymentRequirements, PaymentVerifier,
    X402Error, DEFAULT_FACILITATOR_URL, DEFAULT_PAY_TO,
};

/// Fake facilitator: only the header "good" is valid, and the request must
/// carry the protocol version and the route's requirements.
async fn fake_verify(body: web::Json<serde_json::Value>) -> HttpResponse {
    let well_formed = body["x402Version"] == 1 && body["paymentRequirements"]["amount"] == "10000";
    if !well_formed {
        return HttpResponse::Ok().json(serde_json::json!({
            "isValid": false,
            "invalidReason": "malformed request",
        }));
    }
    if body["paymentHeader"] == "good" {
        HttpResponse::Ok().json(serde_json::json!({
            "isValid": true,
            "payer": "0x00000000000000000000000000000000000000aa",
        }))
    } else {
        HttpResponse::Ok().json(serde_json::json!({
            "isValid": false,
            "invalidReason": "invalid_signature",
        }))
    }
}

async fn fake_settle() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "transaction": "0xfeed",
        "network": "base",
        "payer": "0x00000000000000000000000000000000000000aa",
    }))
}

async fn broken() -> HttpResponse {
    HttpResponse::InternalServerError().body("boom")
}

async fn garbage() -> HttpResponse {
    HttpResponse::Ok().body("not json")
}

fn spawn_facilitator() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/verify", web::post().to(fake_verify))
            .route("/settle", web::post().to(fake_settle))
            .route("/broken/verify", web::post().to(broken))
            .route("/garbage/verify", web::post().to(garbage))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{addr}")
}

fn requirements() -> PaymentRequirements {
    PaymentRequirements::exact_usdc(1, DEFAULT_PAY_TO, DEFAULT_FACILITATOR_URL)
}

#[actix_rt::test]
async fn test_valid_payment_is_granted_with_transaction() {
    let client = FacilitatorClient::new(&spawn_facilitator());

    let outcome = verify_and_settle(&client, "good", &requirements())
        .await
        .unwrap();

    match outcome {
        PaymentOutcome::Granted(settlement) => {
            assert!(settlement.success);
            assert_eq!(settlement.transaction.as_deref(), Some("0xfeed"));
            assert_eq!(settlement.network, "base");
        }
        PaymentOutcome::Denied(reason) => panic!("unexpected denial: {reason}"),
    }
}

#[actix_rt::test]
async fn test_invalid_payment_is_denied_with_reason() {
    let client = FacilitatorClient::new(&spawn_facilitator());

    let outcome = verify_and_settle(&client, "forged", &requirements())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        PaymentOutcome::Denied("invalid_signature".to_string())
    );
}

#[actix_rt::test]
async fn test_verify_decodes_payer() {
    let client = FacilitatorClient::new(&spawn_facilitator());

    let verdict = client.verify("good", &requirements()).await.unwrap();

    assert!(verdict.is_valid);
    assert_eq!(
        verdict.payer.as_deref(),
        Some("0x00000000000000000000000000000000000000aa")
    );
}

#[actix_rt::test]
async fn test_server_error_status_is_an_error() {
    let base = format!("{}/broken", spawn_facilitator());
    let client = FacilitatorClient::new(&base);

    let err = client.verify("good", &requirements()).await.unwrap_err();

    assert!(matches!(err, X402Error::Facilitator(_)));
    assert!(err.to_string().contains("500"));
}

#[actix_rt::test]
async fn test_undecodable_response_is_an_error() {
    let base = format!("{}/garbage", spawn_facilitator());
    let client = FacilitatorClient::new(&base);

    let err = client.verify("good", &requirements()).await.unwrap_err();

    assert!(matches!(err, X402Error::SerdeError(_)));
}

#[actix_rt::test]
async fn test_unreachable_facilitator_is_an_error() {
    let client = FacilitatorClient::new("http://127.0.0.1:1");

    let err = verify_and_settle(&client, "good", &requirements())
        .await
        .unwrap_err();

    assert!(matches!(err, X402Error::HttpError(_)));
}
