// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use smallvec::{smallvec, SmallVec};

use crate::common::{absolute, shift};
use crate::resolve::Resolved;
use crate::{Coords, Point, Segment, Token, TokenKind, Vec2};

/// A cubic Bézier segment with two explicit control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveTo {
    origin: Token,
    coords: Coords,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x: f64,
    y: f64,
    h1: Point,
    h2: Point,
}

impl CurveTo {
    pub(crate) fn new(origin: Token, args: [f64; 6], resolved: Resolved) -> Self {
        let [x1, y1, x2, y2, x, y] = args;
        let mut curve = Self {
            origin,
            coords: resolved.into(),
            x1,
            y1,
            x2,
            y2,
            x,
            y,
            h1: Point::ZERO,
            h2: Point::ZERO,
        };
        curve.sync();
        curve
    }

    /// The absolute first control point.
    #[inline]
    pub fn h1(&self) -> Point {
        self.h1
    }

    /// The absolute second control point.
    #[inline]
    pub fn h2(&self) -> Point {
        self.h2
    }

    /// Move the end point by `v`. Control points stay put.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.x = shift(self.x, v.x, precision);
        self.y = shift(self.y, v.y, precision);
        self.sync();
    }

    /// Move the first control point by `v`.
    pub fn move_start_control(&mut self, v: Vec2, precision: Option<u32>) {
        self.x1 = shift(self.x1, v.x, precision);
        self.y1 = shift(self.y1, v.y, precision);
        self.sync();
    }

    /// Move the second control point by `v`.
    pub fn move_end_control(&mut self, v: Vec2, precision: Option<u32>) {
        self.x2 = shift(self.x2, v.x, precision);
        self.y2 = shift(self.y2, v.y, precision);
        self.sync();
    }

    fn sync(&mut self) {
        let (relative, start) = (self.origin.relative, self.coords.start);
        self.h1 = absolute(relative, start, self.x1, self.y1);
        self.h2 = absolute(relative, start, self.x2, self.y2);
        self.coords.end = absolute(relative, start, self.x, self.y);
    }
}

impl Segment for CurveTo {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(
            self.origin.relative,
            TokenKind::CurveTo {
                x1: self.x1,
                y1: self.y1,
                x2: self.x2,
                y2: self.y2,
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
        for (value, delta) in [
            (&mut self.x1, v.x),
            (&mut self.y1, v.y),
            (&mut self.x2, v.x),
            (&mut self.y2, v.y),
            (&mut self.x, v.x),
            (&mut self.y, v.y),
        ] {
            *value = shift(*value, delta, precision);
        }
        self.sync();
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.h1, self.h2, self.coords.end]
    }
}

/// A cubic Bézier segment whose first control point is the reflection of
/// the previous cubic's second control point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothCurveTo {
    origin: Token,
    coords: Coords,
    x2: f64,
    y2: f64,
    x: f64,
    y: f64,
    h1: Point,
    h2: Point,
}

impl SmoothCurveTo {
    pub(crate) fn new(origin: Token, args: [f64; 4], h1: Point, resolved: Resolved) -> Self {
        let [x2, y2, x, y] = args;
        let mut curve = Self {
            origin,
            coords: resolved.into(),
            x2,
            y2,
            x,
            y,
            h1,
            h2: Point::ZERO,
        };
        curve.sync();
        curve
    }

    /// The implied first control point.
    ///
    /// This is derived from the predecessor and cannot be dragged.
    #[inline]
    pub fn h1(&self) -> Point {
        self.h1
    }

    /// The absolute second control point.
    #[inline]
    pub fn h2(&self) -> Point {
        self.h2
    }

    /// Move the end point by `v`.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.x = shift(self.x, v.x, precision);
        self.y = shift(self.y, v.y, precision);
        self.sync();
    }

    /// Move the second control point by `v`.
    pub fn move_end_control(&mut self, v: Vec2, precision: Option<u32>) {
        self.x2 = shift(self.x2, v.x, precision);
        self.y2 = shift(self.y2, v.y, precision);
        self.sync();
    }

    fn sync(&mut self) {
        let (relative, start) = (self.origin.relative, self.coords.start);
        self.h2 = absolute(relative, start, self.x2, self.y2);
        self.coords.end = absolute(relative, start, self.x, self.y);
    }
}

impl Segment for SmoothCurveTo {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(
            self.origin.relative,
            TokenKind::SmoothCurveTo {
                x2: self.x2,
                y2: self.y2,
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
        self.h1 = resolved.h1.unwrap_or(resolved.start);
        self.sync();
    }

    fn offset(&mut self, v: Vec2, precision: Option<u32>) {
        self.coords.start += v;
        self.h1 += v;
        for (value, delta) in [
            (&mut self.x2, v.x),
            (&mut self.y2, v.y),
            (&mut self.x, v.x),
            (&mut self.y, v.y),
        ] {
            *value = shift(*value, delta, precision);
        }
        self.sync();
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.h2, self.coords.end]
    }
}
