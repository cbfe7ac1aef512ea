// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The immutable Perfect Time instant.
//!
//! [`PerfectTime`] stores Unix time in seconds as a canonical decimal string
//! with exactly [`FRACTIONAL_DIGITS`] digits after the radix point:
//!
//! ```text
//! -?[0-9]+\.[0-9]{18}
//! ```
//!
//! Values enter through [`PerfectTime::new`] in any [`TimePrecision`] and
//! leave through [`PerfectTime::as_unit`] in any other, with every rounding
//! step performed in exact decimal arithmetic, half-up.
//!
//! # Precision boundaries
//!
//! Construction divides by the unit's per-second factor at
//! [`WORKING_PRECISION`] (50) fractional digits and then rounds to 18.
//! Input digits beyond the 50th are rounded half-up at the 50th first; this
//! is the only place precision can overflow and it is never an error.
//!
//! Output ([`as_unit`](PerfectTime::as_unit)) multiplies exactly and rounds
//! to 18 fractional digits of the *target* unit.  For seconds and finer the
//! round trip `new(t.as_unit(u), u) == t` is exact; for days and coarser the
//! value can drift by up to half an attounit of the target unit.
//!
//! # Zero and sign
//!
//! A value that is zero after rounding is always `0.000000000000000000`;
//! negative zero does not exist.
//!
//! # Leap seconds
//!
//! Ignored, as in POSIX time: every day is 86 400 s long.

use crate::clock::{SystemClock, WallClock};
use crate::decimal::Decimal;
use crate::error::{ParseError, PerfectTimeError, Result};
use crate::literal::TimeLiteral;
use crate::precision::TimePrecision;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use qtty::{Day, Days, Seconds};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fractional digits of every canonical string (attosecond resolution).
pub const FRACTIONAL_DIGITS: u32 = 18;

/// Fractional digits kept while dividing by a unit's per-second factor.
pub const WORKING_PRECISION: u32 = 50;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

// ═══════════════════════════════════════════════════════════════════════════
// PerfectTime
// ═══════════════════════════════════════════════════════════════════════════

/// An instant, in seconds since 1970-01-01T00:00:00Z, exact to the attosecond.
///
/// ```
/// use perfect_time::{PerfectTime, TimePrecision};
///
/// let t = PerfectTime::new(1_456_021_196_012_i64, TimePrecision::Milliseconds)?;
/// assert_eq!(t.as_str(), "1456021196.012000000000000000");
/// assert_eq!(t.as_unit(TimePrecision::Microseconds), "1456021196012000.000000000000000000");
/// # Ok::<(), perfect_time::PerfectTimeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PerfectTime {
    /// The canonical string; the only serialized form.
    canonical: String,
    /// The same value as a decimal at scale [`FRACTIONAL_DIGITS`].
    seconds: Decimal,
}

impl PerfectTime {
    // ── constructors ──────────────────────────────────────────────────

    /// Build an instant from `time`, expressed in `precision` units since the
    /// Unix epoch.
    ///
    /// `time` may be any integer, a finite float (read through its shortest
    /// decimal rendering), a string in the grammar `[+-]?digits[.digits]`,
    /// or another [`PerfectTime`].
    ///
    /// # Errors
    ///
    /// [`PerfectTimeError::Parse`] for a malformed string and
    /// [`PerfectTimeError::NonFinite`] for NaN or infinite floats.
    pub fn new(time: impl TimeLiteral, precision: TimePrecision) -> Result<Self> {
        let literal = time.to_literal()?;
        let value = Decimal::parse(&literal)?;
        Ok(Self::from_decimal(&value, precision))
    }

    /// Strictly parse a canonical wire string, rejecting anything that
    /// [`is_canonical`] does not accept.
    ///
    /// # Errors
    ///
    /// [`ParseError::NotCanonical`] wrapped in [`PerfectTimeError::Parse`].
    pub fn from_canonical(canonical: &str) -> Result<Self> {
        if !is_canonical(canonical) {
            return Err(ParseError::NotCanonical(canonical.to_owned()).into());
        }
        Self::new(canonical, TimePrecision::Seconds)
    }

    /// The Unix epoch, `0.000000000000000000`.
    pub fn epoch() -> Self {
        Self::from_seconds(Decimal::zero())
    }

    /// Current time from the host clock, at millisecond resolution.
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }

    /// Current time from the given millisecond clock.
    pub fn now_from<C: WallClock + ?Sized>(clock: &C) -> Self {
        let millis = clock.epoch_millis();
        trace!(millis, "read wall clock");
        Self::from_decimal(&Decimal::from(millis), TimePrecision::Milliseconds)
    }

    /// Canonical string of the current time.
    pub fn now_string() -> String {
        Self::now().into_string()
    }

    /// Exact conversion from a chrono timestamp (nanosecond resolution).
    ///
    /// During a leap second chrono reports sub-second nanoseconds of
    /// 1e9 or more; these spill into the following second.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let nanos = BigInt::from(datetime.timestamp()) * NANOS_PER_SECOND
            + datetime.timestamp_subsec_nanos();
        Self::from_decimal(&Decimal::new(nanos, 0), TimePrecision::Nanoseconds)
    }

    /// Normalize `value`, counted in `precision` units, to canonical seconds.
    pub(crate) fn from_decimal(value: &Decimal, precision: TimePrecision) -> Self {
        if value.scale() > WORKING_PRECISION {
            debug!(
                digits = value.scale(),
                working = WORKING_PRECISION,
                "time literal exceeds working precision, rounding half-up"
            );
        }
        let seconds = if precision == TimePrecision::Seconds {
            value.with_scale(WORKING_PRECISION)
        } else {
            let per_second = precision.per_second_decimal().with_scale(WORKING_PRECISION);
            value
                .with_scale(WORKING_PRECISION)
                .div_rounded(&per_second, WORKING_PRECISION)
                .unwrap_or_else(Decimal::zero)
        };
        let time = Self::from_seconds(seconds);
        trace!(%precision, value = %time, "normalized time");
        time
    }

    fn from_seconds(seconds: Decimal) -> Self {
        let seconds = seconds.with_scale(FRACTIONAL_DIGITS);
        Self {
            canonical: seconds.to_string(),
            seconds,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The canonical string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// Consume into the canonical string.
    #[inline]
    pub fn into_string(self) -> String {
        self.canonical
    }

    /// Integer digits of the canonical string, with sign.
    pub fn integer_part(&self) -> &str {
        let radix = self.canonical.len() - FRACTIONAL_DIGITS as usize - 1;
        &self.canonical[..radix]
    }

    /// The 18 fractional digits of the canonical string.
    pub fn fractional_part(&self) -> &str {
        &self.canonical[self.canonical.len() - FRACTIONAL_DIGITS as usize..]
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.seconds.is_negative()
    }

    // ── conversion ────────────────────────────────────────────────────

    /// This instant counted in `precision` units, rounded half-up to
    /// [`FRACTIONAL_DIGITS`] fractional digits.
    ///
    /// ```
    /// use perfect_time::{PerfectTime, TimePrecision};
    ///
    /// let day = PerfectTime::new(1, TimePrecision::Days)?;
    /// assert_eq!(day.as_unit(TimePrecision::Seconds), "86400.000000000000000000");
    /// # Ok::<(), perfect_time::PerfectTimeError>(())
    /// ```
    pub fn as_unit(&self, precision: TimePrecision) -> String {
        self.seconds
            .mul(&precision.per_second_decimal())
            .with_scale(FRACTIONAL_DIGITS)
            .to_string()
    }

    /// Lossy conversion to chrono, floored to the nanosecond.
    ///
    /// Returns `None` outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let nanos = self.seconds.floor_to_scale(9);
        let secs = floor_div(&nanos, NANOS_PER_SECOND);
        let subsec = &nanos - &secs * NANOS_PER_SECOND;
        DateTime::<Utc>::from_timestamp(secs.to_i64()?, subsec.to_u32()?)
    }

    /// Lossy typed view in seconds.
    pub fn to_seconds_quantity(&self) -> Seconds {
        Seconds::new(self.seconds.to_f64().unwrap_or(f64::NAN))
    }

    /// Lossy typed view in days since the epoch.
    pub fn to_days_quantity(&self) -> Days {
        self.to_seconds_quantity().to::<Day>()
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Shift this instant by `amount` `precision` units.
    ///
    /// The amount is normalized exactly like [`PerfectTime::new`] before
    /// being added, so `t.offset(1, Days)` adds exactly 86 400 s.
    ///
    /// # Errors
    ///
    /// Same as [`PerfectTime::new`].
    pub fn offset(&self, amount: impl TimeLiteral, precision: TimePrecision) -> Result<Self> {
        let delta = Self::new(amount, precision)?;
        Ok(self + &delta)
    }

    /// The earlier of two instants.
    pub fn min(self, other: Self) -> Self {
        std::cmp::min(self, other)
    }

    /// The later of two instants.
    pub fn max(self, other: Self) -> Self {
        std::cmp::max(self, other)
    }

    /// Midpoint of two instants, rounded half-up at the last digit.
    pub fn mean(&self, other: &Self) -> Self {
        let sum = self.seconds.add(&other.seconds);
        let mean = sum
            .div_rounded(&Decimal::from(2), FRACTIONAL_DIGITS)
            .unwrap_or(sum);
        Self::from_seconds(mean)
    }
}

/// Floor division of `value` by a positive `divisor`.
fn floor_div(value: &BigInt, divisor: i64) -> BigInt {
    let quotient = value / divisor;
    if value < &BigInt::from(0) && &quotient * divisor != *value {
        quotient - 1
    } else {
        quotient
    }
}

/// Whether `s` is a canonical Perfect Time string: an optional `-`, at
/// least one integer digit, `.`, and exactly [`FRACTIONAL_DIGITS`] digits.
///
/// Leading zeros in the integer part and `-0.000000000000000000` are
/// rejected, since [`PerfectTime`] never produces them.
pub fn is_canonical(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let Some((integer, fraction)) = unsigned.split_once('.') else {
        return false;
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || !all_digits(fraction) {
        return false;
    }
    if fraction.len() != FRACTIONAL_DIGITS as usize {
        return false;
    }
    if integer.len() > 1 && integer.starts_with('0') {
        return false;
    }
    let is_zero = integer == "0" && fraction.bytes().all(|b| b == b'0');
    !(is_zero && s.starts_with('-'))
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display / FromStr ─────────────────────────────────────────────────────

impl fmt::Display for PerfectTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Parses a seconds literal in the general grammar and normalizes it.
impl FromStr for PerfectTime {
    type Err = PerfectTimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s, TimePrecision::Seconds)
    }
}

impl AsRef<str> for PerfectTime {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<PerfectTime> for String {
    fn from(time: PerfectTime) -> Self {
        time.into_string()
    }
}

impl From<DateTime<Utc>> for PerfectTime {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

impl Default for PerfectTime {
    fn default() -> Self {
        Self::epoch()
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────

/// Numeric order; every value shares the same scale, so comparing the
/// mantissas is exact.
impl Ord for PerfectTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.mantissa().cmp(other.seconds.mantissa())
    }
}

impl PartialOrd for PerfectTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── Lossy numeric coercions ───────────────────────────────────────────────

/// Integer conversions drop the fraction (toward zero) and return `None`
/// when the integer part is out of range; float conversions return the
/// float nearest to the canonical string.
impl ToPrimitive for PerfectTime {
    fn to_i64(&self) -> Option<i64> {
        self.seconds.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.seconds.trunc().to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.seconds.trunc().to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.seconds.trunc().to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        self.seconds.to_f32()
    }

    fn to_f64(&self) -> Option<f64> {
        self.seconds.to_f64()
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add for &PerfectTime {
    type Output = PerfectTime;

    fn add(self, rhs: Self) -> PerfectTime {
        PerfectTime::from_seconds(self.seconds.add(&rhs.seconds))
    }
}

impl Add for PerfectTime {
    type Output = PerfectTime;

    #[inline]
    fn add(self, rhs: Self) -> PerfectTime {
        &self + &rhs
    }
}

/// The difference of two instants, as a signed span in seconds.
impl Sub for &PerfectTime {
    type Output = PerfectTime;

    fn sub(self, rhs: Self) -> PerfectTime {
        PerfectTime::from_seconds(self.seconds.sub(&rhs.seconds))
    }
}

impl Sub for PerfectTime {
    type Output = PerfectTime;

    #[inline]
    fn sub(self, rhs: Self) -> PerfectTime {
        &self - &rhs
    }
}

impl Neg for &PerfectTime {
    type Output = PerfectTime;

    fn neg(self) -> PerfectTime {
        PerfectTime::from_seconds(self.seconds.neg())
    }
}

impl Neg for PerfectTime {
    type Output = PerfectTime;

    #[inline]
    fn neg(self) -> PerfectTime {
        -&self
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for PerfectTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical)
    }
}

/// Accepts any seconds literal and normalizes it; canonical input is
/// reproduced byte for byte.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PerfectTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
