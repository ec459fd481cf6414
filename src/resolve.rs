// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving tokens to absolute coordinates.

use crate::{Command, Point, Token, TokenKind};

/// What a command continues from.
#[derive(Clone, Copy, Debug)]
pub enum Predecessor<'a> {
    /// The previous command in the shape.
    Command(&'a Command),
    /// The current point of a shape with no commands yet.
    Point(Point),
}

impl Predecessor<'_> {
    /// The point the next command starts at.
    #[inline]
    pub fn end(&self) -> Point {
        match self {
            Self::Command(cmd) => cmd.end(),
            Self::Point(pt) => *pt,
        }
    }
}

impl<'a> From<&'a Command> for Predecessor<'a> {
    fn from(cmd: &'a Command) -> Self {
        Self::Command(cmd)
    }
}

impl From<Point> for Predecessor<'_> {
    fn from(pt: Point) -> Self {
        Self::Point(pt)
    }
}

/// Absolute geometry of one command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolved {
    /// Where the command starts.
    pub start: Point,
    /// Where the command ends. For closepath this equals `start`.
    pub end: Point,
    /// The implied first control point of a smooth curve, `None` for every
    /// other kind.
    pub h1: Option<Point>,
}

/// Compute the absolute start, end and implied control point of `token`
/// when it follows `prev`.
///
/// Axes the command does not specify (y for `H`, x for `V`, both for `Z`)
/// are inherited from the start point. A smooth cubic reflects the end
/// control point of a preceding cubic about the start point, and a smooth
/// quadratic reflects the control point of a preceding quadratic; with any
/// other predecessor the implied control point is the start point itself.
pub fn resolve(prev: Predecessor<'_>, token: &Token) -> Resolved {
    let start = prev.end();
    let offset = |value: f64, base: f64| {
        if token.relative {
            base + value
        } else {
            value
        }
    };
    let end = Point::new(
        token.x().map_or(start.x, |x| offset(x, start.x)),
        token.y().map_or(start.y, |y| offset(y, start.y)),
    );
    let reflected = |control: Option<Point>| control.map_or(start, |h| h.reflect_about(start));
    let h1 = match (token.kind, prev) {
        (TokenKind::SmoothCurveTo { .. }, Predecessor::Command(cmd)) => {
            Some(reflected(cmd.reflectable_cubic_control()))
        }
        (TokenKind::SmoothQuadraticCurveTo { .. }, Predecessor::Command(cmd)) => {
            Some(reflected(cmd.reflectable_quad_control()))
        }
        (TokenKind::SmoothCurveTo { .. } | TokenKind::SmoothQuadraticCurveTo { .. }, _) => {
            Some(start)
        }
        _ => None,
    };
    Resolved { start, end, h1 }
}
