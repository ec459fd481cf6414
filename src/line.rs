// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight segments: moveto, the three linetos and closepath.

use smallvec::{smallvec, SmallVec};

use crate::common::{absolute, shift};
use crate::resolve::Resolved;
use crate::{Coords, Point, Segment, Token, TokenKind, Vec2};

/// Start a new subpath at `(x, y)`.
///
/// Dragging a moveto moves only its end point; when it leads a shape the
/// shape's start point follows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveTo {
    origin: Token,
    coords: Coords,
    x: f64,
    y: f64,
}

impl MoveTo {
    pub(crate) fn new(origin: Token, x: f64, y: f64, resolved: Resolved) -> Self {
        Self {
            origin,
            coords: resolved.into(),
            x,
            y,
        }
    }

    /// The x argument as written.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y argument as written.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move the end point by `v`.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.x = shift(self.x, v.x, precision);
        self.y = shift(self.y, v.y, precision);
        self.coords.end = absolute(self.origin.relative, self.coords.start, self.x, self.y);
    }
}

impl Segment for MoveTo {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(self.origin.relative, TokenKind::MoveTo { x: self.x, y: self.y })
    }

    fn coords(&self) -> Coords {
        self.coords
    }

    fn resolve(&mut self, resolved: Resolved) {
        self.coords = resolved.into();
    }

    fn offset(&mut self, v: Vec2, precision: Option<u32>) {
        self.move_end_point(v, precision);
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.coords.end]
    }
}

/// A straight line to `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineTo {
    origin: Token,
    coords: Coords,
    x: f64,
    y: f64,
}

impl LineTo {
    pub(crate) fn new(origin: Token, x: f64, y: f64, resolved: Resolved) -> Self {
        Self {
            origin,
            coords: resolved.into(),
            x,
            y,
        }
    }

    /// The x argument as written.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y argument as written.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move the end point by `v`.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.x = shift(self.x, v.x, precision);
        self.y = shift(self.y, v.y, precision);
        self.coords.end = absolute(self.origin.relative, self.coords.start, self.x, self.y);
    }
}

impl Segment for LineTo {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(self.origin.relative, TokenKind::LineTo { x: self.x, y: self.y })
    }

    fn coords(&self) -> Coords {
        self.coords
    }

    fn resolve(&mut self, resolved: Resolved) {
        self.coords = resolved.into();
    }

    fn offset(&mut self, v: Vec2, precision: Option<u32>) {
        self.coords.start += v;
        self.move_end_point(v, precision);
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.coords.end]
    }
}

/// A horizontal line to `x`. Only the x component of a move applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalLineTo {
    origin: Token,
    coords: Coords,
    x: f64,
}

impl HorizontalLineTo {
    pub(crate) fn new(origin: Token, x: f64, resolved: Resolved) -> Self {
        Self {
            origin,
            coords: resolved.into(),
            x,
        }
    }

    /// The x argument as written.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Move the end point horizontally by `v.x`.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.x = shift(self.x, v.x, precision);
        self.sync_end();
    }

    fn sync_end(&mut self) {
        let start = self.coords.start;
        self.coords.end = absolute(self.origin.relative, start, self.x, 0.);
        self.coords.end.y = start.y;
    }
}

impl Segment for HorizontalLineTo {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(self.origin.relative, TokenKind::HorizontalLineTo { x: self.x })
    }

    fn coords(&self) -> Coords {
        self.coords
    }

    fn resolve(&mut self, resolved: Resolved) {
        self.coords = resolved.into();
    }

    fn offset(&mut self, v: Vec2, precision: Option<u32>) {
        self.coords.start += v;
        self.move_end_point(v, precision);
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.coords.end]
    }
}

/// A vertical line to `y`. Only the y component of a move applies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalLineTo {
    origin: Token,
    coords: Coords,
    y: f64,
}

impl VerticalLineTo {
    pub(crate) fn new(origin: Token, y: f64, resolved: Resolved) -> Self {
        Self {
            origin,
            coords: resolved.into(),
            y,
        }
    }

    /// The y argument as written.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Move the end point vertically by `v.y`.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) {
        self.y = shift(self.y, v.y, precision);
        self.sync_end();
    }

    fn sync_end(&mut self) {
        let start = self.coords.start;
        self.coords.end = absolute(self.origin.relative, start, 0., self.y);
        self.coords.end.x = start.x;
    }
}

impl Segment for VerticalLineTo {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(self.origin.relative, TokenKind::VerticalLineTo { y: self.y })
    }

    fn coords(&self) -> Coords {
        self.coords
    }

    fn resolve(&mut self, resolved: Resolved) {
        self.coords = resolved.into();
    }

    fn offset(&mut self, v: Vec2, precision: Option<u32>) {
        self.coords.start += v;
        self.move_end_point(v, precision);
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        smallvec![self.coords.end]
    }
}

/// Close the current subpath. Its end is the point it starts from; the
/// line back to the shape start is implied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosePath {
    origin: Token,
    coords: Coords,
}

impl ClosePath {
    pub(crate) fn new(origin: Token, resolved: Resolved) -> Self {
        Self {
            origin,
            coords: resolved.into(),
        }
    }
}

impl Segment for ClosePath {
    fn original_token(&self) -> Token {
        self.origin
    }

    fn to_token(&self) -> Token {
        Token::new(self.origin.relative, TokenKind::ClosePath)
    }

    fn coords(&self) -> Coords {
        self.coords
    }

    fn resolve(&mut self, resolved: Resolved) {
        self.coords = resolved.into();
    }

    fn offset(&mut self, v: Vec2, _: Option<u32>) {
        self.coords.start += v;
        self.coords.end += v;
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Command, Point, Segment, Token, Vec2};

    fn after(start: Point, code: u8, args: &[f64]) -> Command {
        Command::from_token(start, Token::from_code(code, args).unwrap())
    }

    #[test]
    fn move_end_point_absolute() {
        let mut line = after(Point::new(1., 1.), b'L', &[10., 20.]);
        line.move_end_point(Vec2::new(2., -3.), None).unwrap();
        assert_eq!(line.to_string(), "L 12 17");
        assert_eq!(line.start(), Point::new(1., 1.));
        assert_eq!(line.end(), Point::new(12., 17.));
    }

    #[test]
    fn move_end_point_relative() {
        let mut line = after(Point::new(1., 1.), b'l', &[10., 20.]);
        line.move_end_point(Vec2::new(2., -3.), None).unwrap();
        assert_eq!(line.to_string(), "l 12 17");
        assert_eq!(line.end(), Point::new(13., 18.));
    }

    #[test]
    fn horizontal_uses_x_only() {
        let mut h = after(Point::new(0., 5.), b'H', &[10.]);
        h.move_end_point(Vec2::new(3., 100.), None).unwrap();
        assert_eq!(h.to_string(), "H 13");
        assert_eq!(h.end(), Point::new(13., 5.));

        let mut v = after(Point::new(5., 0.), b'v', &[10.]);
        v.move_end_point(Vec2::new(100., 3.), None).unwrap();
        assert_eq!(v.to_string(), "v 13");
        assert_eq!(v.end(), Point::new(5., 13.));
    }

    #[test]
    fn translate_moves_start() {
        let mut h = after(Point::new(0., 5.), b'H', &[10.]);
        h.translate(Vec2::new(1., 1.), false, None);
        assert_eq!(h.start(), Point::new(1., 6.));
        assert_eq!(h.end(), Point::new(11., 6.));
    }

    #[test]
    fn precision_rounds_arguments() {
        let mut line = after(Point::ZERO, b'L', &[1., 1.]);
        line.move_end_point(Vec2::new(0.123, 0.456), Some(1)).unwrap();
        assert_eq!(line.to_string(), "L 1.1 1.5");
    }

    #[test]
    fn close_path_ends_at_start() {
        let z = after(Point::new(4., 4.), b'z', &[]);
        assert_eq!(z.start(), z.end());
        assert_eq!(z.to_string(), "z");
        assert!(z.owned_points().is_empty());
    }
}
