use paysigner::signing::{
    MerchantConfig, NotificationRecord, PaymentIntent, PaymentSigner,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Property-based tests for the checksum engine
///
/// Validates:
/// - Request checksums are deterministic
/// - Custom-parameter insertion order never changes fields or checksums
/// - Each secret only affects its own direction

fn signer(password1: &str, password2: &str) -> PaymentSigner {
    PaymentSigner::new(MerchantConfig::new("shop1").with_secrets(password1, password2))
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64, 0u32..4u32).prop_map(|(units, scale)| Decimal::new(units, scale))
}

fn secret_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,16}"
}

fn custom_params_strategy() -> impl Strategy<Value = (BTreeMap<String, String>, Vec<(String, String)>)>
{
    prop::collection::btree_map("[a-zA-Z][a-zA-Z0-9_]{0,7}", "[a-zA-Z0-9]{0,8}", 0..6).prop_flat_map(
        |params| {
            let pairs: Vec<(String, String)> = params.clone().into_iter().collect();
            (Just(params), Just(pairs).prop_shuffle())
        },
    )
}

fn intent(
    signer: &PaymentSigner,
    invoice_id: u64,
    amount: Decimal,
    params: impl IntoIterator<Item = (String, String)>,
) -> PaymentIntent {
    signer
        .intent()
        .invoice_id(invoice_id)
        .amount(amount)
        .custom_params(params)
        .build()
        .unwrap()
}

#[cfg(test)]
mod checksum_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_request_checksum_is_deterministic(
            invoice_id in 0u64..1_000_000u64,
            amount in amount_strategy(),
            secret in secret_strategy(),
        ) {
            let signer = signer(&secret, "s2");
            let intent = intent(&signer, invoice_id, amount, Vec::new());

            let first = signer.request_checksum(&intent).unwrap();
            let second = signer.request_checksum(&intent).unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), 32);
            prop_assert_eq!(first.clone(), first.to_lowercase());
        }

        #[test]
        fn test_custom_param_order_is_irrelevant(
            invoice_id in 0u64..1_000_000u64,
            amount in amount_strategy(),
            (params, shuffled) in custom_params_strategy(),
        ) {
            let signer = signer("s1", "s2");
            let sorted = intent(&signer, invoice_id, amount, params);
            let permuted = intent(&signer, invoice_id, amount, shuffled);

            prop_assert_eq!(
                signer.request_checksum(&sorted).unwrap(),
                signer.request_checksum(&permuted).unwrap()
            );
            prop_assert_eq!(
                signer.build_fields(&sorted).unwrap().to_pairs(),
                signer.build_fields(&permuted).unwrap().to_pairs()
            );
        }

        #[test]
        fn test_notification_secret_only_affects_notifications(
            invoice_id in 0u64..1_000_000u64,
            amount in amount_strategy(),
            first_secret in secret_strategy(),
            second_secret in secret_strategy(),
        ) {
            prop_assume!(first_secret != second_secret);

            let a = signer("s1", &first_secret);
            let b = signer("s1", &second_secret);

            let intent = intent(&a, invoice_id, amount, Vec::new());
            prop_assert_eq!(
                a.request_checksum(&intent).unwrap(),
                b.request_checksum(&intent).unwrap()
            );

            let record = NotificationRecord { invoice_id, amount, ..Default::default() };
            prop_assert_ne!(
                a.notification_checksum(&record).unwrap(),
                b.notification_checksum(&record).unwrap()
            );
        }

        #[test]
        fn test_request_secret_only_affects_requests(
            invoice_id in 0u64..1_000_000u64,
            amount in amount_strategy(),
            first_secret in secret_strategy(),
            second_secret in secret_strategy(),
        ) {
            prop_assume!(first_secret != second_secret);

            let a = signer(&first_secret, "s2");
            let b = signer(&second_secret, "s2");

            let intent = intent(&a, invoice_id, amount, Vec::new());
            prop_assert_ne!(
                a.request_checksum(&intent).unwrap(),
                b.request_checksum(&intent).unwrap()
            );

            let record = NotificationRecord { invoice_id, amount, ..Default::default() };
            prop_assert_eq!(
                a.notification_checksum(&record).unwrap(),
                b.notification_checksum(&record).unwrap()
            );
        }

        #[test]
        fn test_letter_case_of_supplied_checksum_is_irrelevant(
            invoice_id in 0u64..1_000_000u64,
            amount in amount_strategy(),
            upper in any::<bool>(),
        ) {
            let signer = signer("s1", "s2");
            let mut record = NotificationRecord { invoice_id, amount, ..Default::default() };
            let expected = signer.notification_checksum(&record).unwrap();

            record.supplied_checksum = if upper { expected.to_uppercase() } else { expected };
            prop_assert!(signer.validate(&record).unwrap());
        }
    }
}
