// Test fixtures: merchant configuration and gateway notifications.
//
// Expected digests are computed independently with the `md5` crate from the
// literal signature strings, not through the crate under test.

use paysigner::signing::{MerchantConfig, PaymentSigner};

pub const LOGIN: &str = "shop1";
pub const PASSWORD1: &str = "s1";
pub const PASSWORD2: &str = "s2";

pub fn merchant_config() -> MerchantConfig {
    MerchantConfig::new(LOGIN).with_secrets(PASSWORD1, PASSWORD2)
}

pub fn signer() -> PaymentSigner {
    PaymentSigner::new(merchant_config())
}

pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Fields the gateway posts for a completed payment, signed with password #2
pub fn notification_fields(
    invoice_id: u64,
    amount: &str,
    custom: &[(&str, &str)],
) -> Vec<(String, String)> {
    let mut sorted: Vec<(&str, &str)> = custom.to_vec();
    sorted.sort();

    let mut base = format!("{}:{}:{}", amount, invoice_id, PASSWORD2);
    for (key, value) in &sorted {
        base.push_str(&format!(":shp_{}={}", key, value));
    }

    let mut fields = vec![
        ("OutSum".to_string(), amount.to_string()),
        ("InvId".to_string(), invoice_id.to_string()),
        ("SignatureValue".to_string(), md5_hex(&base).to_uppercase()),
        ("PaymentMethod".to_string(), "BankCard".to_string()),
    ];
    fields.extend(
        custom
            .iter()
            .map(|(key, value)| (format!("shp_{}", key), value.to_string())),
    );
    fields
}

/// Urlencode wire pairs for a form body
pub fn urlencode(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}
