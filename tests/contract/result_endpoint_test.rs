// Contract: POST/GET /payments/result
//
// Accepted notification -> 200 text/plain "OK<InvId>"
// Rejected notification -> 400 "bad sign", never the acknowledgment token

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::header, test};
use helpers::*;
use paysigner::payments::controllers::REJECTION_BODY;
use paysigner::signing::{MerchantConfig, PaymentSigner};

fn form_request(body: String) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/payments/result")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(body)
}

#[actix_web::test]
async fn test_valid_notification_is_acknowledged() {
    let app = test::init_service(test_app(signer())).await;

    let body = urlencode(&notification_fields(42, "100.00", &[("user", "7")]));
    let resp = test::call_service(&app, form_request(body).to_request()).await;

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = test::read_body(resp).await;
    assert_eq!(body, "OK42");
}

#[actix_web::test]
async fn test_invalid_checksum_is_rejected() {
    let app = test::init_service(test_app(signer())).await;

    let fields: Vec<(String, String)> = notification_fields(42, "100.00", &[("user", "7")])
        .into_iter()
        .map(|(k, v)| if k == "OutSum" { (k, "0.01".to_string()) } else { (k, v) })
        .collect();
    let resp = test::call_service(&app, form_request(urlencode(&fields)).to_request()).await;

    assert_eq!(resp.status(), 400);
    let body = test::read_body(resp).await;
    assert_eq!(body, REJECTION_BODY);
}

#[actix_web::test]
async fn test_duplicate_notification_is_acknowledged_again() {
    let app = test::init_service(test_app(signer())).await;
    let body = urlencode(&notification_fields(5, "10.00", &[]));

    let first = test::call_service(&app, form_request(body.clone()).to_request()).await;
    assert_eq!(first.status(), 200);

    let second = test::call_service(&app, form_request(body).to_request()).await;
    assert_eq!(second.status(), 200);
    assert_eq!(test::read_body(second).await, "OK5");
}

#[actix_web::test]
async fn test_query_string_notification() {
    let app = test::init_service(test_app(signer())).await;

    let query = urlencode(&notification_fields(7, "1.50", &[("user", "3")]));
    let req = test::TestRequest::get()
        .uri(&format!("/payments/result?{}", query))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(test::read_body(resp).await, "OK7");
}

#[actix_web::test]
async fn test_missing_notification_secret_is_server_error() {
    let mut config = MerchantConfig::new("shop1").with_secrets("s1", "s2");
    config.notification_secret = None;
    let app = test::init_service(test_app(PaymentSigner::new(config))).await;

    let body = urlencode(&notification_fields(42, "100.00", &[]));
    let resp = test::call_service(&app, form_request(body).to_request()).await;

    assert_eq!(resp.status(), 500);
}
