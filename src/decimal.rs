// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fixed-point decimal arithmetic over [`BigInt`] mantissas.
//!
//! A [`Decimal`] is `mantissa × 10^-scale`.  Only the handful of operations
//! the time engine needs are provided: grammar-checked parsing, rescaling,
//! exact multiplication, addition and subtraction, and division rounded to a
//! requested scale.  Every rounding step is **half-up** (ties away from
//! zero), so results never depend on the platform.

use crate::error::ParseError;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

/// Arbitrary-precision decimal `mantissa × 10^-scale`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Decimal {
    mantissa: BigInt,
    scale: u32,
}

/// `10^exp` as a [`BigInt`].
fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

/// `numerator / denominator` rounded half-up to an integer.
///
/// `denominator` must be non-zero.
fn div_half_up(numerator: BigInt, denominator: BigInt) -> BigInt {
    let (numerator, denominator) = if denominator.is_negative() {
        (-numerator, -denominator)
    } else {
        (numerator, denominator)
    };
    // `/` truncates toward zero and `%` keeps the dividend's sign.
    let quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    if remainder.abs() * 2u32 >= denominator {
        quotient + numerator.signum()
    } else {
        quotient
    }
}

impl Decimal {
    pub(crate) fn new(mantissa: BigInt, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    pub(crate) fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    #[inline]
    pub(crate) fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub(crate) fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    #[inline]
    pub(crate) fn is_negative(&self) -> bool {
        self.mantissa.is_negative()
    }

    /// Parse `[+-]? digit* ('.' digit*)?` with at least one digit.
    ///
    /// Exponents, group separators and whitespace are all rejected.
    pub(crate) fn parse(literal: &str) -> Result<Self, ParseError> {
        if literal.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut negative = false;
        let mut digits = String::with_capacity(literal.len());
        let mut radix_at: Option<usize> = None;
        let mut scale: u32 = 0;

        for (index, ch) in literal.char_indices() {
            match ch {
                '0'..='9' => {
                    digits.push(ch);
                    if radix_at.is_some() {
                        scale += 1;
                    }
                }
                '.' => {
                    if radix_at.is_some() {
                        return Err(ParseError::MultipleRadixPoints { index });
                    }
                    radix_at = Some(index);
                }
                '+' | '-' => {
                    if index != 0 {
                        return Err(ParseError::MisplacedSign { index });
                    }
                    negative = ch == '-';
                }
                found => return Err(ParseError::UnexpectedCharacter { found, index }),
            }
        }

        if digits.is_empty() {
            return Err(ParseError::NoDigits);
        }

        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseError::NoDigits)?;
        let mantissa = if negative { -magnitude } else { magnitude };
        Ok(Self::new(mantissa, scale))
    }

    /// Rescale to exactly `scale` fractional digits, rounding half-up when
    /// digits are dropped and zero-extending when digits are added.
    pub(crate) fn with_scale(&self, scale: u32) -> Self {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => {
                Self::new(&self.mantissa * pow10(scale - self.scale), scale)
            }
            Ordering::Less => Self::new(
                div_half_up(self.mantissa.clone(), pow10(self.scale - scale)),
                scale,
            ),
        }
    }

    /// Exact product; the result scale is the sum of both scales.
    pub(crate) fn mul(&self, rhs: &Self) -> Self {
        Self::new(&self.mantissa * &rhs.mantissa, self.scale + rhs.scale)
    }

    /// Exact sum at the larger of both scales.
    pub(crate) fn add(&self, rhs: &Self) -> Self {
        let scale = self.scale.max(rhs.scale);
        Self::new(
            self.with_scale(scale).mantissa + rhs.with_scale(scale).mantissa,
            scale,
        )
    }

    /// Exact difference at the larger of both scales.
    pub(crate) fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.neg())
    }

    pub(crate) fn neg(&self) -> Self {
        Self::new(-&self.mantissa, self.scale)
    }

    /// `self / rhs` rounded half-up to `scale` fractional digits.
    ///
    /// Returns `None` when `rhs` is zero.
    pub(crate) fn div_rounded(&self, rhs: &Self, scale: u32) -> Option<Self> {
        if rhs.mantissa.is_zero() {
            return None;
        }
        // q × 10^-scale = (m1 × 10^-s1) / (m2 × 10^-s2)
        // ⇒ q = m1 × 10^(scale + s2 - s1) / m2
        let shift = i64::from(scale) + i64::from(rhs.scale) - i64::from(self.scale);
        let (numerator, denominator) = if shift >= 0 {
            (&self.mantissa * pow10(shift as u32), rhs.mantissa.clone())
        } else {
            (self.mantissa.clone(), &rhs.mantissa * pow10((-shift) as u32))
        };
        Some(Self::new(div_half_up(numerator, denominator), scale))
    }

    /// Integer part, truncated toward zero.
    pub(crate) fn trunc(&self) -> BigInt {
        &self.mantissa / pow10(self.scale)
    }

    /// Largest integer multiple of `10^-scale` not above `self`.
    pub(crate) fn floor_to_scale(&self, scale: u32) -> BigInt {
        if scale >= self.scale {
            return &self.mantissa * pow10(scale - self.scale);
        }
        let divisor = pow10(self.scale - scale);
        let quotient = &self.mantissa / &divisor;
        if self.mantissa.is_negative() && !(&self.mantissa % &divisor).is_zero() {
            quotient - 1u32
        } else {
            quotient
        }
    }

    /// Nearest `f64`, parsed from the plain decimal rendering.
    pub(crate) fn to_f64(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }

    /// Nearest `f32`, parsed directly to avoid double rounding through `f64`.
    pub(crate) fn to_f32(&self) -> Option<f32> {
        self.to_string().parse().ok()
    }

    pub(crate) fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.with_scale(scale)
            .mantissa
            .cmp(&other.with_scale(scale).mantissa)
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

/// Plain notation: optional `-`, integer digits, and when `scale > 0` a
/// radix point followed by exactly `scale` digits.  Zero never carries a sign.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = self.mantissa.magnitude().to_string();
        let scale = self.scale as usize;
        if digits.len() <= scale {
            let padding = scale + 1 - digits.len();
            digits.insert_str(0, &"0".repeat(padding));
        }
        if self.mantissa.sign() == Sign::Minus {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        let (integer, fraction) = digits.split_at(digits.len() - scale);
        write!(f, "{integer}.{fraction}")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s).unwrap()
    }

    #[test]
    fn parse_accepts_the_decimal_grammar() {
        assert_eq!(dec("42").to_string(), "42");
        assert_eq!(dec("-1.50").to_string(), "-1.50");
        assert_eq!(dec("+7.25").to_string(), "7.25");
        assert_eq!(dec(".5").to_string(), "0.5");
        assert_eq!(dec("3.").to_string(), "3");
        assert_eq!(dec("-000123.000").to_string(), "-123.000");
    }

    #[test]
    fn parse_rejects_malformed_literals() {
        assert_eq!(Decimal::parse(""), Err(ParseError::Empty));
        assert_eq!(Decimal::parse("-"), Err(ParseError::NoDigits));
        assert_eq!(Decimal::parse("."), Err(ParseError::NoDigits));
        assert_eq!(
            Decimal::parse("1.2.3"),
            Err(ParseError::MultipleRadixPoints { index: 3 })
        );
        assert_eq!(
            Decimal::parse("12-3"),
            Err(ParseError::MisplacedSign { index: 2 })
        );
        assert_eq!(
            Decimal::parse("1e9"),
            Err(ParseError::UnexpectedCharacter {
                found: 'e',
                index: 1
            })
        );
        assert_eq!(
            Decimal::parse("1,000"),
            Err(ParseError::UnexpectedCharacter {
                found: ',',
                index: 1
            })
        );
        assert_eq!(
            Decimal::parse(" 1"),
            Err(ParseError::UnexpectedCharacter {
                found: ' ',
                index: 0
            })
        );
    }

    #[test]
    fn with_scale_pads_and_rounds_half_up() {
        assert_eq!(dec("1.5").with_scale(4).to_string(), "1.5000");
        assert_eq!(dec("1.25").with_scale(1).to_string(), "1.3");
        assert_eq!(dec("1.24").with_scale(1).to_string(), "1.2");
        assert_eq!(dec("-1.25").with_scale(1).to_string(), "-1.3");
        assert_eq!(dec("-0.04").with_scale(1).to_string(), "0.0");
        assert_eq!(dec("9.99").with_scale(1).to_string(), "10.0");
    }

    #[test]
    fn div_rounded_handles_repeating_quotients() {
        let third = dec("1").div_rounded(&dec("3"), 5).unwrap();
        assert_eq!(third.to_string(), "0.33333");
        let two_thirds = dec("2").div_rounded(&dec("3"), 5).unwrap();
        assert_eq!(two_thirds.to_string(), "0.66667");
        let negative = dec("-2").div_rounded(&dec("3"), 5).unwrap();
        assert_eq!(negative.to_string(), "-0.66667");
        let by_negative = dec("1").div_rounded(&dec("-8"), 2).unwrap();
        assert_eq!(by_negative.to_string(), "-0.13");
    }

    #[test]
    fn div_rounded_with_high_scale_divisor() {
        // divisor scale larger than target scale plus dividend scale
        let q = dec("1").div_rounded(&dec("0.0001"), 0).unwrap();
        assert_eq!(q.to_string(), "10000");
        let q = dec("123.456").div_rounded(&dec("1000"), 2).unwrap();
        assert_eq!(q.to_string(), "0.12");
    }

    #[test]
    fn div_by_zero_is_none() {
        assert!(dec("1").div_rounded(&dec("0.000"), 3).is_none());
    }

    #[test]
    fn add_sub_mul_are_exact() {
        assert_eq!(dec("1.5").add(&dec("0.25")).to_string(), "1.75");
        assert_eq!(dec("1.5").sub(&dec("2.25")).to_string(), "-0.75");
        assert_eq!(dec("1.5").mul(&dec("-0.2")).to_string(), "-0.30");
    }

    #[test]
    fn ordering_is_numeric_across_scales() {
        assert!(dec("1.5") > dec("1.49999"));
        assert!(dec("-2") < dec("-1.999"));
        assert_eq!(dec("1.50").cmp(&dec("1.5")), Ordering::Equal);
    }

    #[test]
    fn trunc_and_floor() {
        assert_eq!(dec("-1.9").trunc(), BigInt::from(-1));
        assert_eq!(dec("1.9").trunc(), BigInt::from(1));
        assert_eq!(dec("-1.25").floor_to_scale(1), BigInt::from(-13));
        assert_eq!(dec("1.25").floor_to_scale(1), BigInt::from(12));
        assert_eq!(dec("-1.2").floor_to_scale(1), BigInt::from(-12));
        assert_eq!(dec("2").floor_to_scale(3), BigInt::from(2000));
    }

    #[test]
    fn display_pads_small_fractions() {
        assert_eq!(Decimal::new(BigInt::from(5), 3).to_string(), "0.005");
        assert_eq!(Decimal::new(BigInt::from(-5), 3).to_string(), "-0.005");
        assert_eq!(Decimal::new(BigInt::zero(), 2).to_string(), "0.00");
        assert_eq!(Decimal::zero().to_string(), "0");
    }
}
