//! Decimal numbers carried by `JsValue::Number`.
//!
//! A `JsNumber` wraps an arbitrary-precision `BigDecimal` that is always
//! kept normalized (no trailing zeros in the digit string), so two numbers
//! compare equal exactly when they denote the same decimal. Integers with
//! trailing zeros may therefore carry a negative scale: `1e300` is the digit
//! `1` at scale `-300`.

use crate::error::GenError;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsNumber(BigDecimal);

impl JsNumber {
    /// `unscaled * 10^-scale`.
    pub fn new<I: Into<BigInt>>(unscaled: I, scale: i64) -> JsNumber {
        JsNumber::from_decimal(BigDecimal::new(unscaled.into(), scale))
    }

    pub fn from_decimal(decimal: BigDecimal) -> JsNumber {
        JsNumber(decimal.normalized())
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn zero() -> JsNumber {
        JsNumber(BigDecimal::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    pub fn is_integer(&self) -> bool {
        self.scale() <= 0
    }

    /// Digit string of the normalized form.
    pub fn unscaled(&self) -> BigInt {
        self.0.as_bigint_and_exponent().0
    }

    /// Number of fractional digits; negative for integers with trailing zeros.
    pub fn scale(&self) -> i64 {
        self.0.as_bigint_and_exponent().1
    }

    /// The digit string when the value is written with exactly `scale`
    /// fractional digits, dropping any digits beyond that.
    pub fn unscaled_at(&self, scale: i64) -> BigInt {
        self.0.with_scale(scale).into_bigint_and_exponent().0
    }

    pub fn abs(&self) -> JsNumber {
        JsNumber(self.0.abs())
    }

    /// Drops the last fractional digit, rounding toward zero.
    pub fn truncate_last_digit(&self) -> Option<JsNumber> {
        let scale = self.scale();
        if scale <= 0 {
            return None;
        }
        Some(JsNumber::from_decimal(self.0.with_scale(scale - 1)))
    }

    /// Exact for integers that fit in an `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.0.to_i64()
        } else {
            None
        }
    }

    /// Nearest `f64`; infinite when the magnitude is out of range.
    pub fn to_f64(&self) -> f64 {
        match self.0.to_f64() {
            Some(value) => value,
            None if self.is_negative() => f64::NEG_INFINITY,
            None => f64::INFINITY,
        }
    }
}

impl Default for JsNumber {
    fn default() -> Self {
        JsNumber::zero()
    }
}

impl From<i64> for JsNumber {
    fn from(value: i64) -> Self {
        JsNumber::new(value, 0)
    }
}

impl From<BigDecimal> for JsNumber {
    fn from(decimal: BigDecimal) -> Self {
        JsNumber::from_decimal(decimal)
    }
}

impl fmt::Display for JsNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for JsNumber {
    type Err = GenError;

    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` of any length.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(text)
            .map(JsNumber::from_decimal)
            .map_err(|_| GenError::InvalidNumber(text.to_string()))
    }
}
