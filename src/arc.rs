// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Elliptical arc segments.

use smallvec::{smallvec, SmallVec};

use crate::common::{absolute, maybe_round, shift};
use crate::resolve::Resolved;
use crate::{Coords, Point, Segment, Token, TokenKind, Vec2};

/// Radii below this are treated as zero when locating the center.
const RADIUS_EPSILON: f64 = 1e-9;

/// An elliptical arc, in SVG endpoint parameterization.
///
/// Besides the arguments as written, an arc keeps three derived points for
/// editing: the ellipse center and one handle on each radius axis. They are
/// recomputed whenever an argument or the start point changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipticalArc {
    origin: Token,
    coords: Coords,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
    x: f64,
    y: f64,
    center: Point,
    radii: Vec2,
    rx_handle: Point,
    ry_handle: Point,
}

impl EllipticalArc {
    /// Smallest radius a radius drag can produce.
    pub const MIN_RADIUS: f64 = 0.1;

    pub(crate) fn new(
        origin: Token,
        [rx, ry, x_axis_rotation]: [f64; 3],
        large_arc: bool,
        sweep: bool,
        [x, y]: [f64; 2],
        resolved: Resolved,
    ) -> Self {
        let mut arc = Self {
            origin,
            coords: resolved.into(),
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            center: Point::ZERO,
            radii: Vec2::ZERO,
            rx_handle: Point::ZERO,
            ry_handle: Point::ZERO,
        };
        arc.sync();
        arc
    }

    /// The x radius as written.
    #[inline]
    pub fn rx(&self) -> f64 {
        self.rx
    }

    /// The y radius as written.
    #[inline]
    pub fn ry(&self) -> f64 {
        self.ry
    }

    /// Rotation of the x axis, in degrees.
    #[inline]
    pub fn x_axis_rotation(&self) -> f64 {
        self.x_axis_rotation
    }

    /// The large arc flag.
    #[inline]
    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    /// The sweep flag.
    #[inline]
    pub fn sweep(&self) -> bool {
        self.sweep
    }

    /// The ellipse center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The radii actually drawn: the written radii, scaled up when they are
    /// too small to span the chord.
    #[inline]
    pub fn effective_radii(&self) -> Vec2 {
        self.radii
    }

    /// The points at the end of the x and y radius axes.
    #[inline]
    pub fn radius_handles(&self) -> (Point, Point) {
        (self.rx_handle, self.ry_handle)
    }

    /// Move the end point by `v`.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.x = shift(self.x, v.x, precision);
        self.y = shift(self.y, v.y, precision);
        self.sync();
    }

    /// Grow or shrink the x radius by the component of `v` along the
    /// rotated x axis.
    pub fn move_rx(&mut self, v: Vec2, precision: Option<u32>) {
        let axis = Vec2::from_angle(self.x_axis_rotation.to_radians());
        self.rx = maybe_round(self.rx + v.dot(axis), precision).max(Self::MIN_RADIUS);
        self.sync();
    }

    /// Grow or shrink the y radius by the component of `v` along the
    /// rotated y axis.
    pub fn move_ry(&mut self, v: Vec2, precision: Option<u32>) {
        let axis = Vec2::from_angle(self.x_axis_rotation.to_radians());
        let axis = Vec2::new(-axis.y, axis.x);
        self.ry = maybe_round(self.ry + v.dot(axis), precision).max(Self::MIN_RADIUS);
        self.sync();
    }

    /// Set the x axis rotation, in degrees, wrapped into `0..360`.
    pub fn set_x_axis_rotation(&mut self, angle: f64) {
        self.x_axis_rotation = angle.rem_euclid(360.);
        self.sync();
    }

    /// Rotate the x axis by `step` degrees, wrapping into `0..360`.
    pub fn rotate(&mut self, step: f64) {
        self.set_x_axis_rotation(self.x_axis_rotation + step);
    }

    /// Flip the large arc flag.
    pub fn toggle_large_arc(&mut self) {
        self.large_arc = !self.large_arc;
        self.sync();
    }

    /// Flip the sweep flag.
    pub fn toggle_sweep(&mut self) {
        self.sweep = !self.sweep;
        self.sync();
    }

    fn sync(&mut self) {
        let start = self.coords.start;
        let end = absolute(self.origin.relative, start, self.x, self.y);
        self.coords.end = end;

        // Center parameterization, see SVG 1.1 appendix F.6.5.
        let (sin, cos) = self.x_axis_rotation.to_radians().sin_cos();
        let mid = start.midpoint(end);
        let d = (start - end) * 0.5;
        let x1p = cos * d.x + sin * d.y;
        let y1p = -sin * d.x + cos * d.y;

        let mut rx = self.rx.abs();
        let mut ry = self.ry.abs();
        self.center = if rx < RADIUS_EPSILON || ry < RADIUS_EPSILON || start == end {
            mid
        } else {
            // Scale radii up that cannot reach both end points.
            let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
            if lambda > 1. {
                let s = lambda.sqrt();
                rx *= s;
                ry *= s;
            }
            let (rx2, ry2) = (rx * rx, ry * ry);
            let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
            let sq = (rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p) / den;
            let sign = if self.large_arc != self.sweep { 1. } else { -1. };
            let coef = sign * sq.max(0.).sqrt();
            let cxp = coef * (rx * y1p / ry);
            let cyp = coef * -(ry * x1p / rx);
            Point::new(
                cos * cxp - sin * cyp + mid.x,
                sin * cxp + cos * cyp + mid.y,
            )
        };
        self.radii = Vec2::new(rx, ry);
        self.rx_handle = self.center + Vec2::new(cos, sin) * rx;
        self.ry_handle = self.center + Vec2::new(-sin, cos) * ry;
    }
}

impl Segment for EllipticalArc {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(
            self.origin.relative,
            TokenKind::EllipticalArc {
                rx: self.rx,
                ry: self.ry,
                x_axis_rotation: self.x_axis_rotation,
                large_arc: self.large_arc,
                sweep: self.sweep,
                x: self.x,
                y: self.y,
            },
        )
    }

    fn coords(&self) -> Coords {
        self.coords
    }

    fn resolve(&mut self, resolved: Resolved) {
        self.coords = resolved.into();
        self.sync();
    }

    fn offset(&mut self, v: Vec2, precision: Option<u32>) {
        self.coords.start += v;
        self.move_end_point(v, precision);
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.coords.end]
    }
}
