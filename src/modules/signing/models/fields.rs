use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Prefix reserved for merchant-defined parameters (`shp_<key>`)
pub const CUSTOM_PARAM_PREFIX: &str = "shp";

/// Separator between the custom-parameter prefix and the key
pub const CUSTOM_PARAM_SEPARATOR: char = '_';

/// Merchant-defined parameters carried through the gateway unmodified.
///
/// Ordered by key (ordinal byte comparison). Both checksum directions and the
/// form output depend on this ordering.
pub type CustomParams = BTreeMap<String, String>;

/// Closed set of protocol field names understood by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    MrchLogin,
    InvId,
    Desc,
    IncCurrLabel,
    Culture,
    Encoding,
    OutSum,
    SignatureValue,
    AutoSubmit,
    IsTest,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::MrchLogin,
        FieldName::InvId,
        FieldName::Desc,
        FieldName::IncCurrLabel,
        FieldName::Culture,
        FieldName::Encoding,
        FieldName::OutSum,
        FieldName::SignatureValue,
        FieldName::AutoSubmit,
        FieldName::IsTest,
    ];

    /// Exact wire name; the gateway matches these case-sensitively
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::MrchLogin => "MrchLogin",
            FieldName::InvId => "InvId",
            FieldName::Desc => "Desc",
            FieldName::IncCurrLabel => "IncCurrLabel",
            FieldName::Culture => "Culture",
            FieldName::Encoding => "Encoding",
            FieldName::OutSum => "OutSum",
            FieldName::SignatureValue => "SignatureValue",
            FieldName::AutoSubmit => "AutoSubmit",
            FieldName::IsTest => "IsTest",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire name for a custom parameter key
pub fn custom_field_name(key: &str) -> String {
    format!("{}{}{}", CUSTOM_PARAM_PREFIX, CUSTOM_PARAM_SEPARATOR, key)
}

/// Extract the custom parameter key from a wire field name.
///
/// Everything after the first separator is the key. Returns `None` for
/// non-custom fields and for an empty key.
pub fn custom_key_from_field(name: &str) -> Option<&str> {
    name.strip_prefix(CUSTOM_PARAM_PREFIX)?
        .strip_prefix(CUSTOM_PARAM_SEPARATOR)
        .filter(|key| !key.is_empty())
}

/// Render a protocol boolean
pub(crate) fn flag(value: bool) -> String {
    let rendered = if value { "1" } else { "0" };
    rendered.to_string()
}

/// Form fields ready to be posted to the gateway.
///
/// Protocol fields and custom parameters are kept apart so that a custom key
/// can never shadow a protocol field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    protocol: Vec<(FieldName, String)>,
    custom: CustomParams,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a protocol field, replacing an earlier value in place
    pub fn insert(&mut self, name: FieldName, value: impl Into<String>) {
        let value = value.into();
        match self.protocol.iter_mut().find(|(field, _)| *field == name) {
            Some(slot) => slot.1 = value,
            None => self.protocol.push((name, value)),
        }
    }

    pub fn with_custom_params(mut self, params: &CustomParams) -> Self {
        self.custom = params.clone();
        self
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.protocol
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.get(name).is_some()
    }

    pub fn custom(&self) -> &CustomParams {
        &self.custom
    }

    /// Total number of fields that will be emitted
    pub fn len(&self) -> usize {
        self.protocol.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into wire pairs.
    ///
    /// Order: protocol fields as inserted, custom parameters by key, then the
    /// test marker if present.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .protocol
            .iter()
            .filter(|(field, _)| *field != FieldName::IsTest)
            .map(|(field, value)| (field.as_str().to_string(), value.clone()))
            .collect();

        pairs.extend(
            self.custom
                .iter()
                .map(|(key, value)| (custom_field_name(key), value.clone())),
        );

        if let Some(marker) = self.get(FieldName::IsTest) {
            pairs.push((FieldName::IsTest.as_str().to_string(), marker.to_string()));
        }

        pairs
    }
}

#[derive(serde::Serialize)]
struct WireField {
    name: String,
    value: String,
}

impl Serialize for FormFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.to_pairs()
                .into_iter()
                .map(|(name, value)| WireField { name, value }),
        )
    }
}
