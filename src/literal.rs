// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inputs accepted by [`PerfectTime::new`](crate::PerfectTime::new).
//!
//! Every input is first rendered as a base-10 string and only then parsed
//! into an exact decimal, so binary floating-point values contribute their
//! shortest round-trip representation (`0.1_f64` is read as `"0.1"`, not as
//! `0.1000000000000000055511151231257827…`).

use crate::error::{PerfectTimeError, Result};
use crate::PerfectTime;
use std::borrow::Cow;

/// A number or string that can be read as a decimal time value.
pub trait TimeLiteral {
    /// The value as a plain decimal string (no exponent).
    fn to_literal(&self) -> Result<Cow<'_, str>>;
}

impl TimeLiteral for str {
    #[inline]
    fn to_literal(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl TimeLiteral for String {
    #[inline]
    fn to_literal(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl<T: TimeLiteral + ?Sized> TimeLiteral for &T {
    #[inline]
    fn to_literal(&self) -> Result<Cow<'_, str>> {
        (**self).to_literal()
    }
}

/// A [`PerfectTime`] reads as its canonical seconds string.
impl TimeLiteral for PerfectTime {
    #[inline]
    fn to_literal(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

macro_rules! integer_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TimeLiteral for $ty {
                #[inline]
                fn to_literal(&self) -> Result<Cow<'_, str>> {
                    Ok(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

integer_literal!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            /// Rust's float `Display` is the shortest round-trip form and
            /// never uses exponent notation.
            impl TimeLiteral for $ty {
                fn to_literal(&self) -> Result<Cow<'_, str>> {
                    if !self.is_finite() {
                        return Err(PerfectTimeError::NonFinite(f64::from(*self)));
                    }
                    Ok(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

float_literal!(f32, f64);
