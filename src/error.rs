// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.

use thiserror::Error;

/// A time literal did not match the accepted decimal grammar
/// `[+-]? digit* ('.' digit*)?`, or a wire string was not canonical.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The literal was the empty string.
    #[error("empty time literal")]
    Empty,
    /// The literal contained a sign and/or radix point but no digit.
    #[error("time literal contains no digits")]
    NoDigits,
    /// A character outside `0-9`, `.`, `+`, `-` (exponents and group
    /// separators included).
    #[error("unexpected character {found:?} at byte {index}")]
    UnexpectedCharacter { found: char, index: usize },
    /// A second radix point.
    #[error("second radix point at byte {index}")]
    MultipleRadixPoints { index: usize },
    /// A sign anywhere but the first byte.
    #[error("sign at byte {index} does not precede all digits")]
    MisplacedSign { index: usize },
    /// A valid decimal that is not in the canonical wire form.
    #[error("{0:?} is not a canonical Perfect Time string")]
    NotCanonical(String),
}

/// Errors returned by the fallible constructors of this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerfectTimeError {
    #[error("invalid time literal: {0}")]
    Parse(#[from] ParseError),
    /// Floating-point input was NaN or infinite.
    #[error("time value {0} is not finite")]
    NonFinite(f64),
    /// A [`TimePrecision`](crate::TimePrecision) name that does not exist.
    #[error("unknown time precision {0:?}")]
    UnknownPrecision(String),
}

/// Crate-wide result alias.
pub type Result<T, E = PerfectTimeError> = std::result::Result<T, E>;
