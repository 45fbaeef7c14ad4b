use serde::{Deserialize, Serialize};
use std::fmt;

/// Interface language the gateway shows to the payer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Culture {
    /// Russian (gateway default)
    #[default]
    Ru,
    /// English
    En,
    /// German
    De,
}

impl Culture {
    /// Protocol value for the `Culture` form field
    pub fn as_str(&self) -> &'static str {
        match self {
            Culture::Ru => "ru",
            Culture::En => "en",
            Culture::De => "de",
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Culture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" => Ok(Culture::Ru),
            "en" => Ok(Culture::En),
            "de" => Ok(Culture::De),
            _ => Err(format!("Invalid culture: {}", s)),
        }
    }
}

impl TryFrom<&str> for Culture {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
