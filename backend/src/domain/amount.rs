//! Numeric line-item values.
//!
//! Quantities and prices arrive from the data store as JSON numbers and leave
//! as JSON number literals in the CSV export. Integral values always render
//! without a fractional part (`10`, never `10.0`), whichever way the store
//! encoded them.

use serde::{Deserialize, Deserializer};
use serde_json::Number;

/// Largest integer an IEEE-754 double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A JSON number with integral values normalised to integers.
///
/// # Examples
/// ```
/// use order_functions::domain::Amount;
///
/// let quantity = Amount::from(2);
/// let unit_price = Amount::from_f64(10.0).expect("finite");
/// assert_eq!(unit_price.to_string(), "10");
/// assert_eq!(quantity.checked_mul(&unit_price).map(|a| a.to_string()), Some("20".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Amount(Number);

impl Amount {
    /// Wrap a JSON number.
    #[must_use]
    pub fn from_number(number: Number) -> Self {
        Self(normalise(number))
    }

    /// Build an amount from a float; `None` for NaN or infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::from_number)
    }

    /// Borrow the underlying JSON number.
    #[must_use]
    pub fn as_number(&self) -> &Number {
        &self.0
    }

    /// Multiply two amounts.
    ///
    /// Integer operands give an exact integer product. Anything else is
    /// multiplied in double precision. Returns `None` when the product is not
    /// finite.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        if let (Some(lhs), Some(rhs)) = (self.0.as_i64(), other.0.as_i64()) {
            if let Some(product) = lhs.checked_mul(rhs) {
                return Some(Self(Number::from(product)));
            }
        }
        let lhs = self.0.as_f64()?;
        let rhs = other.0.as_f64()?;
        Self::from_f64(lhs * rhs)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Number::from(value))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Number::deserialize(deserializer).map(Self::from_number)
    }
}

fn normalise(number: Number) -> Number {
    match number.as_f64() {
        Some(value)
            if number.is_f64() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER =>
        {
            Number::from(value as i64)
        }
        _ => number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(raw: &str) -> Amount {
        serde_json::from_str(raw).expect("valid JSON number")
    }

    #[rstest]
    #[case("10", "10")]
    #[case("10.0", "10")]
    #[case("10.50", "10.5")]
    #[case("-0.0", "0")]
    #[case("19.9", "19.9")]
    fn renders_like_number_literals(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(parse(raw).to_string(), expected);
    }

    #[rstest]
    #[case("2", "10", "20")]
    #[case("3", "2.5", "7.5")]
    #[case("2", "10.00", "20")]
    #[case("3", "19.9", "59.699999999999996")]
    fn multiplies_with_double_semantics(
        #[case] quantity: &str,
        #[case] unit_price: &str,
        #[case] expected: &str,
    ) {
        let product = parse(quantity)
            .checked_mul(&parse(unit_price))
            .expect("finite product");
        assert_eq!(product.to_string(), expected);
    }

    #[test]
    fn integer_overflow_falls_back_to_double() {
        let product = Amount::from(i64::MAX)
            .checked_mul(&Amount::from(2))
            .expect("finite product");
        assert!(product.as_number().is_f64());
    }

    #[test]
    fn non_finite_product_is_rejected() {
        let huge = Amount::from_f64(f64::MAX).expect("finite");
        assert!(huge.checked_mul(&huge).is_none());
    }
}
