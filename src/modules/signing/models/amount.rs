use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Textual rendering of the amount in the outbound `OutSum` field and the
/// request checksum.
///
/// Both places must use the same rendering, otherwise the gateway recomputes
/// a different checksum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmountFormat {
    /// Render the decimal exactly as held (`100.00` stays `100.00`, `5` stays `5`)
    #[default]
    Natural,
    /// Round half away from zero and pad to a fixed number of decimal places
    Fixed(u32),
}

impl AmountFormat {
    pub fn render(&self, amount: Decimal) -> String {
        match *self {
            AmountFormat::Natural => amount.to_string(),
            AmountFormat::Fixed(places) => {
                let mut rounded =
                    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
                rounded.rescale(places);
                rounded.to_string()
            }
        }
    }
}

impl fmt::Display for AmountFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountFormat::Natural => write!(f, "natural"),
            AmountFormat::Fixed(places) => write!(f, "fixed({})", places),
        }
    }
}
