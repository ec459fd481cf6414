// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use smallvec::{smallvec, SmallVec};

use crate::common::{absolute, shift};
use crate::resolve::Resolved;
use crate::{Coords, Point, Segment, Token, TokenKind, Vec2};

/// A quadratic Bézier segment with an explicit control point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticCurveTo {
    origin: Token,
    coords: Coords,
    x1: f64,
    y1: f64,
    x: f64,
    y: f64,
    h1: Point,
}

impl QuadraticCurveTo {
    pub(crate) fn new(origin: Token, args: [f64; 4], resolved: Resolved) -> Self {
        let [x1, y1, x, y] = args;
        let mut quad = Self {
            origin,
            coords: resolved.into(),
            x1,
            y1,
            x,
            y,
            h1: Point::ZERO,
        };
        quad.sync();
        quad
    }

    /// The absolute control point.
    #[inline]
    pub fn h1(&self) -> Point {
        self.h1
    }

    /// Move the end point by `v`.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.x = shift(self.x, v.x, precision);
        self.y = shift(self.y, v.y, precision);
        self.sync();
    }

    /// Move the control point by `v`.
    pub fn move_control(&mut self, v: Vec2, precision: Option<u32>) {
        self.x1 = shift(self.x1, v.x, precision);
        self.y1 = shift(self.y1, v.y, precision);
        self.sync();
    }

    fn sync(&mut self) {
        let (relative, start) = (self.origin.relative, self.coords.start);
        self.h1 = absolute(relative, start, self.x1, self.y1);
        self.coords.end = absolute(relative, start, self.x, self.y);
    }
}

impl Segment for QuadraticCurveTo {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(
            self.origin.relative,
            TokenKind::QuadraticCurveTo {
                x1: self.x1,
                y1: self.y1,
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
        self.x1 = shift(self.x1, v.x, precision);
        self.y1 = shift(self.y1, v.y, precision);
        self.move_end_point(v, precision);
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.h1, self.coords.end]
    }
}

/// A quadratic Bézier segment whose control point is the reflection of the
/// previous quadratic's control point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothQuadraticCurveTo {
    origin: Token,
    coords: Coords,
    x: f64,
    y: f64,
    h1: Point,
}

impl SmoothQuadraticCurveTo {
    pub(crate) fn new(origin: Token, x: f64, y: f64, h1: Point, resolved: Resolved) -> Self {
        let mut quad = Self {
            origin,
            coords: resolved.into(),
            x,
            y,
            h1,
        };
        quad.sync();
        quad
    }

    /// The implied control point.
    #[inline]
    pub fn h1(&self) -> Point {
        self.h1
    }

    /// Move the end point by `v`.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.x = shift(self.x, v.x, precision);
        self.y = shift(self.y, v.y, precision);
        self.sync();
    }

    fn sync(&mut self) {
        self.coords.end = absolute(self.origin.relative, self.coords.start, self.x, self.y);
    }
}

impl Segment for SmoothQuadraticCurveTo {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(
            self.origin.relative,
            TokenKind::SmoothQuadraticCurveTo { x: self.x, y: self.y },
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
        self.move_end_point(v, precision);
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.coords.end]
    }
}
