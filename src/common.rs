// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common numeric operations shared by the command variants.

use std::fmt::{self, Write};

use crate::Point;

/// Largest supported rounding precision, in decimal places.
pub const MAX_PRECISION: u32 = 10;

/// Round `value` to `precision` decimal places.
///
/// Halves round away from zero. The value is nudged by one `f64::EPSILON`
/// away from zero first, so that decimal inputs like `1.005` which are stored
/// just below the half still round up.
///
/// ```
/// use pathmark::common::round_to_precision;
/// assert_eq!(round_to_precision(2.25, 1), 2.3);
/// assert_eq!(round_to_precision(-2.25, 1), -2.3);
/// assert_eq!(round_to_precision(7.0, 0), 7.0);
/// ```
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let pow = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    let nudged = value + value.signum() * f64::EPSILON;
    (nudged * pow).round() / pow
}

/// Round `value` if a precision is supplied, otherwise pass it through.
#[inline]
pub fn maybe_round(value: f64, precision: Option<u32>) -> f64 {
    match precision {
        Some(p) => round_to_precision(value, p),
        None => value,
    }
}

/// Move a stored coordinate by `delta`, rounding the result when a
/// precision is supplied.
#[inline]
pub(crate) fn shift(value: f64, delta: f64, precision: Option<u32>) -> f64 {
    maybe_round(value + delta, precision)
}

/// The absolute position of a stored coordinate pair: offset from `start`
/// when `relative`, taken as is otherwise.
#[inline]
pub(crate) fn absolute(relative: bool, start: Point, x: f64, y: f64) -> Point {
    if relative {
        Point::new(start.x + x, start.y + y)
    } else {
        Point::new(x, y)
    }
}

/// Write a number the way it appears in path data.
///
/// Uses the shortest representation that round-trips, never scientific
/// notation, and prints negative zero as `0`.
pub(crate) fn write_number(out: &mut impl Write, value: f64) -> fmt::Result {
    if value == 0.0 {
        out.write_char('0')
    } else {
        write!(out, "{}", value)
    }
}
