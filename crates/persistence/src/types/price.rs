//! Fixed-point product prices.
//!
//! Prices are kept as [`Decimal`] values with a scale of exactly two and are
//! exchanged as strings so that no binary floating point is ever involved.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Maximum number of significant digits a price may carry.
pub const MAX_DIGITS: u32 = 10;

/// Number of decimal places every price is stored and rendered with.
pub const DECIMAL_PLACES: u32 = 2;

/// Reasons a value cannot be used as a price.
///
/// The display strings are the messages reported to API clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// Not a finite decimal number.
    #[error("A valid number is required.")]
    Invalid,

    /// More than [`MAX_DIGITS`] digits.
    #[error("Ensure that there are no more than {} digits in total.", MAX_DIGITS)]
    TooManyDigits,

    /// More than [`DECIMAL_PLACES`] digits after the point.
    #[error("Ensure that there are no more than {} decimal places.", DECIMAL_PLACES)]
    TooManyDecimalPlaces,

    /// More digits before the point than the precision leaves room for.
    #[error("Ensure that there are no more than {} digits before the decimal point.", MAX_DIGITS - DECIMAL_PLACES)]
    TooManyWholeDigits,
}

/// A product price with two decimal places.
///
/// ```
/// use catalog_persistence::types::Price;
///
/// let price = Price::parse("99.9").unwrap();
/// assert_eq!(price.to_string(), "99.90");
/// assert!(Price::parse("1.005").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Parses a decimal string, enforcing the precision limits.
    ///
    /// Surrounding whitespace is ignored and exponent notation (`"1.5e1"`) is
    /// accepted. Inputs with more than two decimal places are rejected rather
    /// than rounded. Precision is checked on the literal itself, so inputs too
    /// long for [`Decimal`] still report which limit they break.
    pub fn parse(input: &str) -> Result<Self, PriceError> {
        let literal = Literal::parse(input.trim()).ok_or(PriceError::Invalid)?;
        let digits = i64::try_from(literal.digits.len()).map_err(|_| PriceError::TooManyDigits)?;
        check_precision(digits, literal.exponent)?;

        // At most MAX_DIGITS significant digits remain, so these fit in an i64
        let mantissa: i64 = literal.digits.parse().map_err(|_| PriceError::Invalid)?;
        let mantissa = if literal.negative { -mantissa } else { mantissa };

        let value = match u32::try_from(literal.exponent) {
            Ok(exponent) => 10_i64
                .checked_pow(exponent)
                .and_then(|scale| mantissa.checked_mul(scale))
                .map(Decimal::from)
                .ok_or(PriceError::TooManyDigits)?,
            // Negative and no smaller than -DECIMAL_PLACES after the precision check
            Err(_) => Decimal::new(mantissa, literal.exponent.unsigned_abs() as u32),
        };

        Ok(Self::rescaled(value))
    }

    /// Returns the underlying decimal value.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    fn rescaled(mut value: Decimal) -> Self {
        value.rescale(DECIMAL_PLACES);
        Self(value)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        let digits = i64::from(digit_count(value.mantissa().unsigned_abs()));
        check_precision(digits, -i64::from(value.scale()))?;
        Ok(Self::rescaled(value))
    }
}

/// Checks a number of `digits` significant digits scaled by `10^exponent`
/// against the price limits.
fn check_precision(digits: i64, exponent: i64) -> Result<(), PriceError> {
    let (total_digits, whole_digits, decimal_places) = if exponent >= 0 {
        let total = digits.saturating_add(exponent);
        (total, total, 0)
    } else if digits > exponent.saturating_neg() {
        (digits, digits + exponent, exponent.saturating_neg())
    } else {
        (exponent.saturating_neg(), 0, exponent.saturating_neg())
    };

    if total_digits > i64::from(MAX_DIGITS) {
        return Err(PriceError::TooManyDigits);
    }
    if decimal_places > i64::from(DECIMAL_PLACES) {
        return Err(PriceError::TooManyDecimalPlaces);
    }
    if whole_digits > i64::from(MAX_DIGITS - DECIMAL_PLACES) {
        return Err(PriceError::TooManyWholeDigits);
    }
    Ok(())
}

/// A decimal literal split into sign, significant digits and exponent.
///
/// `"-012.50"` has digits `"1250"` and exponent `-2`; `"1e3"` has digits
/// `"1"` and exponent `3`.
struct Literal {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl Literal {
    fn parse(input: &str) -> Option<Self> {
        let (negative, rest) = split_sign(input);
        let (significand, exponent) = match rest.find(['e', 'E']) {
            Some(at) => (&rest[..at], parse_exponent(&rest[at + 1..])?),
            None => (rest, 0),
        };

        let (whole, fraction) = significand.split_once('.').unwrap_or((significand, ""));
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits: String = whole
            .chars()
            .chain(fraction.chars())
            .skip_while(|&c| c == '0')
            .collect();
        let digits = if digits.is_empty() { "0".to_string() } else { digits };

        let fraction_len = i64::try_from(fraction.len()).ok()?;
        Some(Self {
            negative,
            digits,
            exponent: exponent.saturating_sub(fraction_len),
        })
    }
}

fn split_sign(input: &str) -> (bool, &str) {
    if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else {
        (false, input.strip_prefix('+').unwrap_or(input))
    }
}

/// Parses an exponent, saturating values too large for an `i64`.
fn parse_exponent(input: &str) -> Option<i64> {
    let (negative, digits) = split_sign(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal number or decimal string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        Price::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Price::try_from(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        Price::try_from(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        if !v.is_finite() {
            return Err(E::custom(PriceError::Invalid));
        }
        Price::parse(&v.to_string()).map_err(E::custom)
    }
}

fn digit_count(mut n: u128) -> u32 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
