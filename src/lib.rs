// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Perfect Time
//!
//! Lossless timestamps for archival storage and exchange.  An instant is Unix
//! time in seconds, stored as a canonical decimal string with exactly 18
//! fractional digits (attosecond resolution):
//!
//! ```text
//! 1456021196.012000000000000000
//! -1.000000000000000000
//! 0.000000000000000000
//! ```
//!
//! All arithmetic on the canonical path is exact base-10 fixed point; floating
//! point only appears in the explicitly lossy coercions.
//!
//! # Core types
//!
//! - [`PerfectTime`] — immutable instant backed by its canonical string.
//! - [`TimePrecision`] — the units values are supplied and read in, each
//!   with exact decimal factors.
//! - [`MutablePerfectTime`] — single-owner holder that swaps its instant.
//! - [`TimeLiteral`] — integers, floats and strings accepted as input.
//! - [`WallClock`] — millisecond clock seam used by [`PerfectTime::now`].
//!
//! # Example
//!
//! ```
//! use perfect_time::{PerfectTime, TimePrecision};
//!
//! let t = PerfectTime::new("1456021196012", TimePrecision::Milliseconds)?;
//! assert_eq!(t.to_string(), "1456021196.012000000000000000");
//! assert_eq!(t.as_unit(TimePrecision::Seconds), "1456021196.012000000000000000");
//!
//! let later = t.offset(1, TimePrecision::Days)?;
//! assert_eq!(later.as_str(), "1456107596.012000000000000000");
//! # Ok::<(), perfect_time::PerfectTimeError>(())
//! ```
//!
//! # Features
//!
//! - `serde` — (de)serialize [`PerfectTime`] and [`MutablePerfectTime`] as
//!   the canonical string and [`TimePrecision`] by variant name.

mod clock;
mod decimal;
mod error;
mod literal;
mod mutable;
pub(crate) mod perfect_time;
mod precision;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use clock::{SystemClock, WallClock};
pub use error::{ParseError, PerfectTimeError, Result};
pub use literal::TimeLiteral;
pub use mutable::MutablePerfectTime;
pub use perfect_time::{is_canonical, PerfectTime, FRACTIONAL_DIGITS, WORKING_PRECISION};
pub use precision::TimePrecision;
