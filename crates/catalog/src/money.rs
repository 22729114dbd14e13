//! Currency amounts.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockview_core::{DomainError, DomainResult, ValueObject};

/// Number of minor units (cents) per major unit.
const MINOR_PER_MAJOR: u64 = 100;

/// A non-negative price: a currency prefix plus an amount in minor units.
///
/// Serialized as the prefixed string (`"$2.50"`). Ordering compares the amount
/// first; catalogs never mix currencies, so the prefix only breaks ties between
/// values that should not be compared anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money {
    minor_units: u64,
    currency: char,
}

impl Money {
    pub const fn new(currency: char, minor_units: u64) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    pub fn currency(&self) -> char {
        self.currency
    }

    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    /// Parse a prefixed amount such as `"$1"`, `"$2.5"` or `"€0.99"`.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let currency = chars
            .next()
            .ok_or_else(|| DomainError::invalid_price("empty price"))?;

        if currency.is_ascii_digit() || matches!(currency, '.' | '-' | '+') || currency.is_whitespace() {
            return Err(DomainError::invalid_price(format!(
                "`{raw}` has no currency prefix"
            )));
        }

        let minor_units = parse_minor_units(chars.as_str())
            .map_err(|reason| DomainError::invalid_price(format!("`{raw}`: {reason}")))?;

        Ok(Self::new(currency, minor_units))
    }
}

fn parse_minor_units(amount: &str) -> Result<u64, &'static str> {
    let (whole, frac) = amount.split_once('.').unwrap_or((amount, ""));

    if whole.is_empty() && frac.is_empty() {
        return Err("missing amount");
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err("amount is not a decimal number");
    }
    if frac.len() > 2 {
        return Err("more than two fractional digits");
    }

    let whole_units: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| "amount out of range")?
    };
    let frac_units: u64 = match frac.len() {
        0 => 0,
        1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
        _ => frac.parse().map_err(|_| "amount is not a decimal number")?,
    };

    whole_units
        .checked_mul(MINOR_PER_MAJOR)
        .and_then(|units| units.checked_add(frac_units))
        .ok_or("amount out of range")
}

impl ValueObject for Money {}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Money {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let whole = self.minor_units / MINOR_PER_MAJOR;
        let cents = self.minor_units % MINOR_PER_MAJOR;
        if cents == 0 {
            write!(f, "{}{}", self.currency, whole)
        } else {
            write!(f, "{}{}.{:02}", self.currency, whole, cents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_amounts() {
        let money = Money::parse("$4").unwrap();
        assert_eq!(money.currency(), '$');
        assert_eq!(money.minor_units(), 400);
    }

    #[test]
    fn parses_fractional_amounts() {
        assert_eq!(Money::parse("$2.5").unwrap().minor_units(), 250);
        assert_eq!(Money::parse("$0.99").unwrap().minor_units(), 99);
        assert_eq!(Money::parse("$.5").unwrap().minor_units(), 50);
        assert_eq!(Money::parse("€12.05").unwrap(), Money::new('€', 1205));
    }

    #[test]
    fn display_drops_zero_fraction() {
        assert_eq!(Money::new('$', 100).to_string(), "$1");
        assert_eq!(Money::new('$', 250).to_string(), "$2.50");
        assert_eq!(Money::new('$', 5).to_string(), "$0.05");
    }

    #[test]
    fn rejects_malformed_prices() {
        for raw in ["", "1", "$", "$.", "$abc", "$1.2.3", "$-1", "$1.999", "$ 1", "-$1", "$1e3"] {
            match Money::parse(raw) {
                Err(DomainError::InvalidPriceFormat(_)) => {}
                other => panic!("expected InvalidPriceFormat for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_overflowing_amounts() {
        let raw = format!("${}", u64::MAX);
        assert!(matches!(
            Money::parse(&raw),
            Err(DomainError::InvalidPriceFormat(msg)) if msg.contains("out of range")
        ));
    }

    #[test]
    fn orders_by_amount() {
        let cheap = Money::parse("$1").unwrap();
        let mid = Money::parse("$2").unwrap();
        let dear = Money::parse("$10").unwrap();
        assert!(cheap < mid);
        assert!(mid < dear);
    }

    #[test]
    fn serializes_as_prefixed_string() {
        let money = Money::new('$', 250);
        assert_eq!(serde_json::to_string(&money).unwrap(), "\"$2.50\"");

        let parsed: Money = serde_json::from_str("\"$4\"").unwrap();
        assert_eq!(parsed, Money::new('$', 400));

        assert!(serde_json::from_str::<Money>("\"four dollars\"").is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: parsed ordering agrees with numeric ordering of the amounts.
            #[test]
            fn ordering_matches_amounts(
                a_whole in 0u64..10_000,
                a_cents in 0u64..100,
                b_whole in 0u64..10_000,
                b_cents in 0u64..100,
            ) {
                let a = Money::parse(&format!("${a_whole}.{a_cents:02}")).unwrap();
                let b = Money::parse(&format!("${b_whole}.{b_cents:02}")).unwrap();
                let expected = (a_whole * 100 + a_cents).cmp(&(b_whole * 100 + b_cents));
                prop_assert_eq!(a.cmp(&b), expected);
            }

            /// Property: arbitrary text either parses or fails with InvalidPriceFormat.
            #[test]
            fn never_fails_with_other_errors(raw in "\\PC{0,12}") {
                if let Err(err) = Money::parse(&raw) {
                    prop_assert!(matches!(err, DomainError::InvalidPriceFormat(_)));
                }
            }
        }
    }
}
