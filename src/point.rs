// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D point.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::common::round_to_precision;
use crate::Vec2;

/// A 2D point in the editing coordinate space.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point {
    /// The point (0, 0).
    pub const ZERO: Self = Self::new(0., 0.);

    /// Create a new `Point` with the provided `x` and `y` coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Determine the midpoint of two points.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Reflect this point through `center`.
    ///
    /// This is how the implied first control point of a smooth curve is
    /// derived from the previous segment's last control point.
    ///
    /// ```
    /// use pathmark::Point;
    /// let p = Point::new(10.0, 10.0).reflect_about(Point::new(20.0, 10.0));
    /// assert_eq!(p, Point::new(30.0, 10.0));
    /// ```
    #[inline]
    pub fn reflect_about(self, center: Self) -> Self {
        Self::new(center.x + (center.x - self.x), center.y + (center.y - self.y))
    }

    /// Returns a new `Point` with both coordinates rounded to `precision`
    /// decimal places.
    ///
    /// ```
    /// use pathmark::Point;
    /// let p = Point::new(1.44, 2.66).round_to(1);
    /// assert_eq!(p, Point::new(1.4, 2.7));
    /// ```
    #[inline]
    pub fn round_to(self, precision: u32) -> Self {
        Self::new(
            round_to_precision(self.x, precision),
            round_to_precision(self.y, precision),
        )
    }

    /// Snap `self` to the nearest direction from `origin` that is a multiple
    /// of `step` radians, keeping the distance from `origin`.
    ///
    /// A non-positive `step` leaves the point unchanged.
    pub fn snap_to_angle(self, origin: Self, step: f64) -> Self {
        if step <= 0.0 {
            return self;
        }
        let v = self - origin;
        let r = v.hypot();
        let angle = (v.atan2() / step).round() * step;
        origin + r * Vec2::from_angle(angle)
    }

    /// Is this point finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Compare if two points are approximately equal.
    #[inline]
    pub fn is_near(self, other: Self, accuracy: f64) -> bool {
        (self - other).hypot() <= accuracy
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from(v: (f64, f64)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(v: Point) -> (f64, f64) {
        (v.x, v.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Vec2) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign<Vec2> for Point {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        *self = Self::new(self.x + other.x, self.y + other.y);
    }
}

impl Sub<Vec2> for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Vec2) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign<Vec2> for Point {
    #[inline]
    fn sub_assign(&mut self, other: Vec2) {
        *self = Self::new(self.x - other.x, self.y - other.y);
    }
}

impl Sub<Self> for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Self) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.x, formatter)?;
        write!(formatter, ", ")?;
        fmt::Display::fmt(&self.y, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline]
    fn from(p: mint::Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }
}
