// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! A single-owner holder whose [`PerfectTime`] can be replaced.

use crate::error::Result;
use crate::literal::TimeLiteral;
use crate::perfect_time::PerfectTime;
use crate::precision::TimePrecision;
use std::fmt;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Holds one [`PerfectTime`] and swaps it as a whole.
///
/// Mutation needs `&mut self`; to share a holder across threads put it
/// behind a `Mutex`.
///
/// ```
/// use perfect_time::{MutablePerfectTime, TimePrecision};
///
/// let mut t = MutablePerfectTime::default();
/// t.set_value(1500, TimePrecision::Milliseconds)?
///     .set_value("2.25", TimePrecision::Seconds)?;
/// assert_eq!(t.as_str(), "2.250000000000000000");
/// # Ok::<(), perfect_time::PerfectTimeError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct MutablePerfectTime {
    value: PerfectTime,
}

impl MutablePerfectTime {
    /// Build a holder the same way [`PerfectTime::new`] builds a value.
    pub fn new(time: impl TimeLiteral, precision: TimePrecision) -> Result<Self> {
        PerfectTime::new(time, precision).map(Self::from)
    }

    /// Normalize `new_value` and replace the held instant with it.
    ///
    /// On error the held instant is left untouched.
    pub fn set_value(
        &mut self,
        new_value: impl TimeLiteral,
        precision: TimePrecision,
    ) -> Result<&mut Self> {
        self.value = PerfectTime::new(new_value, precision)?;
        Ok(self)
    }

    /// Replace the held instant, returning the previous one.
    pub fn replace(&mut self, value: PerfectTime) -> PerfectTime {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn get(&self) -> &PerfectTime {
        &self.value
    }

    #[inline]
    pub fn into_inner(self) -> PerfectTime {
        self.value
    }
}

impl Deref for MutablePerfectTime {
    type Target = PerfectTime;

    #[inline]
    fn deref(&self) -> &PerfectTime {
        &self.value
    }
}

impl From<PerfectTime> for MutablePerfectTime {
    fn from(value: PerfectTime) -> Self {
        Self { value }
    }
}

impl From<MutablePerfectTime> for PerfectTime {
    fn from(holder: MutablePerfectTime) -> Self {
        holder.value
    }
}

impl fmt::Display for MutablePerfectTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
