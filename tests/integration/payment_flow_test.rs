// End-to-end: sign a form, receive the gateway's notification, acknowledge it.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use paysigner::signing::{FieldName, NotificationOutcome, PaymentSigner};
use rust_decimal_macros::dec;

#[test]
fn test_reference_scenario_round_trip() {
    let signer = signer();

    // Unsigned -> Signed-Outbound
    let intent = signer
        .intent()
        .invoice_id(42)
        .amount(dec!(100.00))
        .custom_param("user", "7")
        .build()
        .unwrap();
    let form = signer.sign(&intent).unwrap();

    assert_eq!(
        form.fields.get(FieldName::SignatureValue),
        Some(md5_hex("shop1:100.00:42:s1:shp_user=7").as_str())
    );

    // Pending -> Parsed -> Accepted
    let notification = notification_fields(42, "100.00", &[("user", "7")]);
    let record = PaymentSigner::parse(notification.iter().map(|(k, v)| (k, v)));

    assert_eq!(record.invoice_id, 42);
    assert!(signer.validate(&record).unwrap());
    assert_eq!(PaymentSigner::acknowledge(&record), "OK42");
}

#[test]
fn test_notification_checksum_is_independent_of_request_checksum() {
    let signer = signer();
    let intent = signer
        .intent()
        .invoice_id(42)
        .amount(dec!(100.00))
        .custom_param("user", "7")
        .build()
        .unwrap();

    let request = signer.request_checksum(&intent).unwrap();
    let record = PaymentSigner::parse(notification_fields(42, "100.00", &[("user", "7")]));
    let notification = signer.notification_checksum(&record).unwrap();

    assert_ne!(request, notification);
    assert_eq!(notification, md5_hex("100.00:42:s2:shp_user=7"));
}

#[test]
fn test_tampered_notifications_are_rejected() {
    let signer = signer();

    let tampered: Vec<Vec<(String, String)>> = vec![
        // Amount changed after signing
        notification_fields(42, "100.00", &[("user", "7")])
            .into_iter()
            .map(|(k, v)| if k == "OutSum" { (k, "1.00".to_string()) } else { (k, v) })
            .collect(),
        // Custom parameter dropped
        notification_fields(42, "100.00", &[("user", "7")])
            .into_iter()
            .filter(|(k, _)| k != "shp_user")
            .collect(),
        // Custom parameter added
        {
            let mut fields = notification_fields(42, "100.00", &[("user", "7")]);
            fields.push(("shp_admin".to_string(), "1".to_string()));
            fields
        },
        // Checksum missing
        notification_fields(42, "100.00", &[])
            .into_iter()
            .filter(|(k, _)| k != "SignatureValue")
            .collect(),
    ];

    for fields in tampered {
        let outcome = signer.process_notification(fields).unwrap();
        assert_eq!(outcome, NotificationOutcome::Rejected { invoice_id: 42 });
    }
}

#[test]
fn test_notification_with_many_custom_params_in_any_order() {
    let signer = signer();
    let custom = [("zeta", "3"), ("alpha", "1"), ("mid", "2")];

    let mut fields = notification_fields(9, "55.10", &custom);
    fields.reverse();

    let outcome = signer.process_notification(fields).unwrap();
    assert_eq!(
        outcome,
        NotificationOutcome::Accepted {
            invoice_id: 9,
            ack: "OK9".to_string()
        }
    );
}

#[test]
fn test_concurrent_validation_shares_one_signer() {
    let signer = signer();

    std::thread::scope(|scope| {
        for invoice_id in 1..=8u64 {
            let signer = &signer;
            scope.spawn(move || {
                let fields = notification_fields(invoice_id, "10.00", &[("user", "1")]);
                let outcome = signer.process_notification(fields).unwrap();
                assert!(outcome.is_accepted());
                assert_eq!(outcome.invoice_id(), invoice_id);
            });
        }
    });
}
