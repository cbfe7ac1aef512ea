// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time units with exact decimal conversion factors.
//!
//! | Unit | Label | Per second | Seconds per unit |
//! |------|-------|------------|------------------|
//! | [`Millennia`](TimePrecision::Millennia) | `ka` | 3.1688…e-11 | 31 556 925 252.2016 |
//! | [`Centuries`](TimePrecision::Centuries) | `c` | 3.1688…e-10 | 3 155 692 525.22016 |
//! | [`Years`](TimePrecision::Years) | `a` | 3.1688…e-8 | 31 556 925.2522016 |
//! | [`Days`](TimePrecision::Days) | `d` | 1.1574…e-5 | 86 400 |
//! | [`Seconds`](TimePrecision::Seconds) | `s` | 1 | 1 |
//! | [`Milliseconds`](TimePrecision::Milliseconds) | `ms` | 10³ | 10⁻³ |
//! | [`Microseconds`](TimePrecision::Microseconds) | `us` | 10⁶ | 10⁻⁶ |
//! | [`Nanoseconds`](TimePrecision::Nanoseconds) | `ns` | 10⁹ | 10⁻⁹ |
//! | [`Femtoseconds`](TimePrecision::Femtoseconds) | `fs` | 10¹⁵ | 10⁻¹⁵ |
//! | [`Attoseconds`](TimePrecision::Attoseconds) | `as` | 10¹⁸ | 10⁻¹⁸ |
//!
//! The per-second factors of the year-based units and of days are repeating
//! decimals; they are stored truncated to well beyond the 50-digit working
//! precision, never as floating point.

use crate::decimal::Decimal;
use crate::error::PerfectTimeError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A time granularity in which values are supplied to and read from a
/// [`PerfectTime`](crate::PerfectTime).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimePrecision {
    /// 1 000 average years.
    Millennia,
    /// 100 average years.
    Centuries,
    /// One average year of 31 556 925.2522016 s.
    Years,
    /// 86 400 s.
    Days,
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
    Femtoseconds,
    Attoseconds,
}

impl TimePrecision {
    /// Every unit, coarsest first.
    pub const ALL: [TimePrecision; 10] = [
        Self::Millennia,
        Self::Centuries,
        Self::Years,
        Self::Days,
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
        Self::Nanoseconds,
        Self::Femtoseconds,
        Self::Attoseconds,
    ];

    /// How many of this unit fit in one second, as an exact decimal string.
    pub const fn per_second(self) -> &'static str {
        match self {
            Self::Millennia => "0.000000000031688765366335366091139568738996430758545636762947",
            Self::Centuries => "0.00000000031688765366335366091139568738996430758545636762947",
            Self::Years => "0.000000031688765366335366091139568738996430758545636762947",
            Self::Days => "0.000011574074074074074074074074074074074074074074074074",
            Self::Seconds => "1",
            Self::Milliseconds => "1000",
            Self::Microseconds => "1000000",
            Self::Nanoseconds => "1000000000",
            Self::Femtoseconds => "1000000000000000",
            Self::Attoseconds => "1000000000000000000",
        }
    }

    /// How many seconds one of this unit lasts, as an exact decimal string.
    pub const fn seconds_per_unit(self) -> &'static str {
        match self {
            Self::Millennia => "31556925252.2016",
            Self::Centuries => "3155692525.22016",
            Self::Years => "31556925.2522016",
            Self::Days => "86400",
            Self::Seconds => "1",
            Self::Milliseconds => "0.001",
            Self::Microseconds => "0.000001",
            Self::Nanoseconds => "0.000000001",
            Self::Femtoseconds => "0.000000000000001",
            Self::Attoseconds => "0.000000000000000001",
        }
    }

    /// Short symbol used by [`Display`](fmt::Display).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Millennia => "ka",
            Self::Centuries => "c",
            Self::Years => "a",
            Self::Days => "d",
            Self::Seconds => "s",
            Self::Milliseconds => "ms",
            Self::Microseconds => "us",
            Self::Nanoseconds => "ns",
            Self::Femtoseconds => "fs",
            Self::Attoseconds => "as",
        }
    }

    /// Full lowercase name, e.g. `"milliseconds"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Millennia => "millennia",
            Self::Centuries => "centuries",
            Self::Years => "years",
            Self::Days => "days",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
            Self::Microseconds => "microseconds",
            Self::Nanoseconds => "nanoseconds",
            Self::Femtoseconds => "femtoseconds",
            Self::Attoseconds => "attoseconds",
        }
    }

    /// Whether a whole number of this unit makes exactly one second or less,
    /// i.e. `per_second` is an integer and conversions into this unit are exact.
    pub const fn is_subsecond(self) -> bool {
        matches!(
            self,
            Self::Seconds
                | Self::Milliseconds
                | Self::Microseconds
                | Self::Nanoseconds
                | Self::Femtoseconds
                | Self::Attoseconds
        )
    }

    pub(crate) fn per_second_decimal(self) -> Decimal {
        parse_constant(self.per_second())
    }
}

/// Constants are all well-formed decimals; the fallback is never taken.
fn parse_constant(literal: &'static str) -> Decimal {
    Decimal::parse(literal).unwrap_or_else(|_| Decimal::zero())
}

impl fmt::Display for TimePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a case-sensitive [`label`](TimePrecision::label) or a full
/// [`name`](TimePrecision::name) in any case, singular or plural.
impl FromStr for TimePrecision {
    type Err = PerfectTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(unit) = Self::ALL.iter().find(|u| u.label() == trimmed) {
            return Ok(*unit);
        }
        let lower = trimmed.to_ascii_lowercase();
        Self::ALL
            .iter()
            .find(|u| u.name() == lower || singular(u.name()) == lower)
            .copied()
            .ok_or_else(|| PerfectTimeError::UnknownPrecision(s.to_owned()))
    }
}

fn singular(name: &str) -> &str {
    match name {
        "millennia" => "millennium",
        "centuries" => "century",
        other => other.strip_suffix('s').unwrap_or(other),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_parse() {
        for unit in TimePrecision::ALL {
            assert!(Decimal::parse(unit.per_second()).is_ok(), "{unit:?}");
            assert!(Decimal::parse(unit.seconds_per_unit()).is_ok(), "{unit:?}");
        }
    }

    #[test]
    fn factors_are_reciprocal() {
        // per_second × seconds_per_unit is 1 to within 1e-45.
        let one = Decimal::from(1);
        let tolerance = Decimal::parse(&format!("0.{}1", "0".repeat(44))).unwrap();
        for unit in TimePrecision::ALL {
            let seconds_per_unit = Decimal::parse(unit.seconds_per_unit()).unwrap();
            let product = unit.per_second_decimal().mul(&seconds_per_unit);
            let error = product.sub(&one);
            let error = if error.is_negative() { error.neg() } else { error };
            assert!(error <= tolerance, "{unit:?}: {product}");
        }
    }

    #[test]
    fn subsecond_units_have_integer_factors() {
        for unit in TimePrecision::ALL {
            let integral = !unit.per_second().contains('.');
            assert_eq!(unit.is_subsecond(), integral, "{unit:?}");
        }
    }

    #[test]
    fn all_is_ordered_coarsest_first() {
        let mut sorted = TimePrecision::ALL;
        sorted.sort();
        assert_eq!(sorted, TimePrecision::ALL);
    }

    #[test]
    fn parses_labels_and_names() {
        assert_eq!("ms".parse::<TimePrecision>(), Ok(TimePrecision::Milliseconds));
        assert_eq!("as".parse::<TimePrecision>(), Ok(TimePrecision::Attoseconds));
        assert_eq!("Days".parse::<TimePrecision>(), Ok(TimePrecision::Days));
        assert_eq!("NANOSECOND".parse::<TimePrecision>(), Ok(TimePrecision::Nanoseconds));
        assert_eq!("century".parse::<TimePrecision>(), Ok(TimePrecision::Centuries));
        assert_eq!("millennium".parse::<TimePrecision>(), Ok(TimePrecision::Millennia));
        assert_eq!(
            "fortnights".parse::<TimePrecision>(),
            Err(PerfectTimeError::UnknownPrecision("fortnights".into()))
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for unit in TimePrecision::ALL {
            assert_eq!(unit.to_string().parse::<TimePrecision>(), Ok(unit));
        }
    }
}
