// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock sources for [`PerfectTime::now`](crate::PerfectTime::now).

use chrono::Utc;

/// A source of Unix time in whole milliseconds.
///
/// Milliseconds are the finest resolution every host is guaranteed to
/// provide; anything finer would be padding.  Closures `Fn() -> i64`
/// implement this trait, which makes fixed clocks trivial in tests:
///
/// ```
/// use perfect_time::PerfectTime;
///
/// let t = PerfectTime::now_from(&|| 1_456_021_196_012_i64);
/// assert_eq!(t.as_str(), "1456021196.012000000000000000");
/// ```
pub trait WallClock {
    /// Milliseconds elapsed since 1970-01-01T00:00:00Z.
    fn epoch_millis(&self) -> i64;
}

/// The host's system clock, read through [`chrono::Utc::now`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SystemClock;

impl WallClock for SystemClock {
    #[inline]
    fn epoch_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<F: Fn() -> i64> WallClock for F {
    #[inline]
    fn epoch_millis(&self) -> i64 {
        self()
    }
}
