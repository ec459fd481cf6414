// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved path commands.

use std::fmt;

use smallvec::SmallVec;

use crate::resolve::{resolve, Predecessor, Resolved};
use crate::{
    Border, ClosePath, CommandKind, CurveTo, EditError, EllipticalArc, HorizontalLineTo, LineTo,
    MoveTo, Point, QuadraticCurveTo, SmoothCurveTo, SmoothQuadraticCurveTo, Token, TokenKind,
    Vec2, VerticalLineTo,
};

/// The absolute start and end of a command.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coords {
    /// Where the command starts: the end of its predecessor.
    pub start: Point,
    /// Where the command ends.
    pub end: Point,
}

impl Coords {
    /// Create new coordinates.
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl From<Resolved> for Coords {
    #[inline]
    fn from(r: Resolved) -> Self {
        Self::new(r.start, r.end)
    }
}

/// An editable point of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handle {
    /// The end point.
    EndPoint,
    /// The first control point of a curve.
    StartControl,
    /// The second control point of a cubic curve.
    EndControl,
    /// The x radius handle of an arc.
    RadiusX,
    /// The y radius handle of an arc.
    RadiusY,
    /// Every point the command owns, moved together.
    Whole,
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EndPoint => "end point",
            Self::StartControl => "start control",
            Self::EndControl => "end control",
            Self::RadiusX => "x radius",
            Self::RadiusY => "y radius",
            Self::Whole => "whole command",
        })
    }
}

/// Behavior shared by every command variant.
///
/// A segment stores its arguments the way they were written (relative
/// offsets stay relative) together with the absolute geometry derived from
/// them. Every mutation keeps both in sync.
pub trait Segment {
    /// The token this segment was created from.
    fn original_token(&self) -> Token;

    /// The token for the segment as it is now.
    fn to_token(&self) -> Token;

    /// Absolute start and end points.
    fn coords(&self) -> Coords;

    /// Re-derive the absolute geometry after the predecessor changed.
    fn resolve(&mut self, resolved: Resolved);

    /// Move every point the segment owns by `v`, start point included.
    fn offset(&mut self, v: Vec2, precision: Option<u32>);

    /// The points that must stay within the editing border.
    ///
    /// This is the end point plus any explicitly written control point.
    /// The start point belongs to the predecessor.
    fn owned_points(&self) -> SmallVec<[Point; 3]>;

    /// Whether the arguments are relative to the start point.
    #[inline]
    fn is_relative(&self) -> bool {
        self.original_token().relative
    }

    /// Translate the segment by `v`.
    ///
    /// Relative segments are left alone unless `move_relative` is set: their
    /// offsets already carry them along with the predecessor.
    fn translate(&mut self, v: Vec2, move_relative: bool, precision: Option<u32>) {
        if self.is_relative() && !move_relative {
            return;
        }
        self.offset(v, precision);
    }

    /// Whether every owned point lies within `border`.
    fn is_inside_border(&self, border: &Border) -> bool {
        self.owned_points().iter().all(|pt| border.contains(*pt))
    }
}

/// A single command of a shape, with its geometry resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs, reason = "variants are named after the commands they hold")]
pub enum Command {
    MoveTo(MoveTo),
    LineTo(LineTo),
    HorizontalLineTo(HorizontalLineTo),
    VerticalLineTo(VerticalLineTo),
    CurveTo(CurveTo),
    SmoothCurveTo(SmoothCurveTo),
    QuadraticCurveTo(QuadraticCurveTo),
    SmoothQuadraticCurveTo(SmoothQuadraticCurveTo),
    EllipticalArc(EllipticalArc),
    ClosePath(ClosePath),
}

macro_rules! dispatch {
    ($self:expr, $seg:ident => $body:expr) => {
        match $self {
            Command::MoveTo($seg) => $body,
            Command::LineTo($seg) => $body,
            Command::HorizontalLineTo($seg) => $body,
            Command::VerticalLineTo($seg) => $body,
            Command::CurveTo($seg) => $body,
            Command::SmoothCurveTo($seg) => $body,
            Command::QuadraticCurveTo($seg) => $body,
            Command::SmoothQuadraticCurveTo($seg) => $body,
            Command::EllipticalArc($seg) => $body,
            Command::ClosePath($seg) => $body,
        }
    };
}

impl Command {
    /// Build a command from a token and its resolved geometry.
    pub fn new(token: Token, resolved: Resolved) -> Self {
        let h1 = resolved.h1.unwrap_or(resolved.start);
        match token.kind {
            TokenKind::MoveTo { x, y } => Self::MoveTo(MoveTo::new(token, x, y, resolved)),
            TokenKind::LineTo { x, y } => Self::LineTo(LineTo::new(token, x, y, resolved)),
            TokenKind::HorizontalLineTo { x } => {
                Self::HorizontalLineTo(HorizontalLineTo::new(token, x, resolved))
            }
            TokenKind::VerticalLineTo { y } => {
                Self::VerticalLineTo(VerticalLineTo::new(token, y, resolved))
            }
            TokenKind::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Self::CurveTo(CurveTo::new(token, [x1, y1, x2, y2, x, y], resolved)),
            TokenKind::SmoothCurveTo { x2, y2, x, y } => {
                Self::SmoothCurveTo(SmoothCurveTo::new(token, [x2, y2, x, y], h1, resolved))
            }
            TokenKind::QuadraticCurveTo { x1, y1, x, y } => {
                Self::QuadraticCurveTo(QuadraticCurveTo::new(token, [x1, y1, x, y], resolved))
            }
            TokenKind::SmoothQuadraticCurveTo { x, y } => Self::SmoothQuadraticCurveTo(
                SmoothQuadraticCurveTo::new(token, x, y, h1, resolved),
            ),
            TokenKind::EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => Self::EllipticalArc(EllipticalArc::new(
                token,
                [rx, ry, x_axis_rotation],
                large_arc,
                sweep,
                [x, y],
                resolved,
            )),
            TokenKind::ClosePath => Self::ClosePath(ClosePath::new(token, resolved)),
        }
    }

    /// Resolve `token` against `prev` and build the command.
    pub fn from_token<'a>(prev: impl Into<Predecessor<'a>>, token: Token) -> Self {
        let resolved = resolve(prev.into(), &token);
        Self::new(token, resolved)
    }

    /// A new command of `kind` placed after this one, `offset` away from its
    /// end point.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnsupportedSuccessor`] for closepath.
    pub fn successor(&self, kind: CommandKind, relative: bool, offset: Vec2) -> Result<Self, EditError> {
        let token = Token::successor(self.end(), kind, relative, offset)
            .ok_or(EditError::UnsupportedSuccessor { kind })?;
        Ok(Self::from_token(self, token))
    }

    /// The command kind.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::MoveTo(_) => CommandKind::MoveTo,
            Self::LineTo(_) => CommandKind::LineTo,
            Self::HorizontalLineTo(_) => CommandKind::HorizontalLineTo,
            Self::VerticalLineTo(_) => CommandKind::VerticalLineTo,
            Self::CurveTo(_) => CommandKind::CurveTo,
            Self::SmoothCurveTo(_) => CommandKind::SmoothCurveTo,
            Self::QuadraticCurveTo(_) => CommandKind::QuadraticCurveTo,
            Self::SmoothQuadraticCurveTo(_) => CommandKind::SmoothQuadraticCurveTo,
            Self::EllipticalArc(_) => CommandKind::EllipticalArc,
            Self::ClosePath(_) => CommandKind::ClosePath,
        }
    }

    /// The absolute start point.
    #[inline]
    pub fn start(&self) -> Point {
        self.coords().start
    }

    /// The absolute end point.
    #[inline]
    pub fn end(&self) -> Point {
        self.coords().end
    }

    /// The end control point, if a following smooth cubic would reflect it.
    pub fn reflectable_cubic_control(&self) -> Option<Point> {
        match self {
            Self::CurveTo(c) => Some(c.h2()),
            Self::SmoothCurveTo(s) => Some(s.h2()),
            _ => None,
        }
    }

    /// The control point, if a following smooth quadratic would reflect it.
    pub fn reflectable_quad_control(&self) -> Option<Point> {
        match self {
            Self::QuadraticCurveTo(q) => Some(q.h1()),
            Self::SmoothQuadraticCurveTo(t) => Some(t.h1()),
            _ => None,
        }
    }

    /// The handles this command can be dragged by.
    pub fn handles(&self) -> SmallVec<[Handle; 4]> {
        let mut handles = SmallVec::new();
        match self {
            Self::ClosePath(_) => return handles,
            Self::CurveTo(_) => handles.extend([Handle::StartControl, Handle::EndControl]),
            Self::SmoothCurveTo(_) => handles.push(Handle::EndControl),
            Self::QuadraticCurveTo(_) => handles.push(Handle::StartControl),
            Self::EllipticalArc(_) => handles.extend([Handle::RadiusX, Handle::RadiusY]),
            _ => (),
        }
        handles.push(Handle::EndPoint);
        handles
    }

    /// The current position of a handle, if the command has it.
    ///
    /// [`Handle::Whole`] reports the end point.
    pub fn handle_position(&self, handle: Handle) -> Option<Point> {
        match (self, handle) {
            (Self::ClosePath(_), _) => None,
            (_, Handle::EndPoint | Handle::Whole) => Some(self.end()),
            (Self::CurveTo(c), Handle::StartControl) => Some(c.h1()),
            (Self::CurveTo(c), Handle::EndControl) => Some(c.h2()),
            (Self::SmoothCurveTo(s), Handle::EndControl) => Some(s.h2()),
            (Self::QuadraticCurveTo(q), Handle::StartControl) => Some(q.h1()),
            (Self::EllipticalArc(a), Handle::RadiusX) => Some(a.radius_handles().0),
            (Self::EllipticalArc(a), Handle::RadiusY) => Some(a.radius_handles().1),
            _ => None,
        }
    }

    /// Move the end point by `v`. The start point stays put.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnsupportedHandle`] for closepath.
    pub fn move_end_point(&mut self, v: Vec2, precision: Option<u32>) -> Result<(), EditError> {
        if self.is_close_path() {
            return Err(self.unsupported(Handle::EndPoint));
        }
        match self {
            Self::MoveTo(m) => m.move_end_point(v, precision),
            Self::LineTo(l) => l.move_end_point(v, precision),
            Self::HorizontalLineTo(h) => h.move_end_point(v, precision),
            Self::VerticalLineTo(l) => l.move_end_point(v, precision),
            Self::CurveTo(c) => c.move_end_point(v, precision),
            Self::SmoothCurveTo(s) => s.move_end_point(v, precision),
            Self::QuadraticCurveTo(q) => q.move_end_point(v, precision),
            Self::SmoothQuadraticCurveTo(t) => t.move_end_point(v, precision),
            Self::EllipticalArc(a) => a.move_end_point(v, precision),
            Self::ClosePath(_) => (),
        }
        Ok(())
    }

    /// Move the handle `handle` by `v`.
    ///
    /// [`Handle::Whole`] translates the command, relative or not.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnsupportedHandle`] when the command has no such
    /// handle.
    pub fn move_handle(&mut self, handle: Handle, v: Vec2, precision: Option<u32>) -> Result<(), EditError> {
        match handle {
            Handle::EndPoint => return self.move_end_point(v, precision),
            Handle::Whole => {
                self.translate(v, true, precision);
                return Ok(());
            }
            _ => (),
        }
        let err = self.unsupported(handle);
        match (self, handle) {
            (Self::CurveTo(c), Handle::StartControl) => c.move_start_control(v, precision),
            (Self::CurveTo(c), Handle::EndControl) => c.move_end_control(v, precision),
            (Self::SmoothCurveTo(s), Handle::EndControl) => s.move_end_control(v, precision),
            (Self::QuadraticCurveTo(q), Handle::StartControl) => q.move_control(v, precision),
            (Self::EllipticalArc(a), Handle::RadiusX) => a.move_rx(v, precision),
            (Self::EllipticalArc(a), Handle::RadiusY) => a.move_ry(v, precision),
            _ => return Err(err),
        }
        Ok(())
    }

    fn unsupported(&self, handle: Handle) -> EditError {
        EditError::UnsupportedHandle {
            kind: self.kind(),
            handle,
        }
    }

    /// The arc, if this is one.
    pub fn as_arc(&self) -> Option<&EllipticalArc> {
        match self {
            Self::EllipticalArc(a) => Some(a),
            _ => None,
        }
    }

    /// Mutable access to the arc, if this is one.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotAnArc`] for every other kind.
    pub fn as_arc_mut(&mut self) -> Result<&mut EllipticalArc, EditError> {
        let kind = self.kind();
        match self {
            Self::EllipticalArc(a) => Ok(a),
            _ => Err(EditError::NotAnArc { kind }),
        }
    }

    /// Is this a moveto?
    #[inline]
    pub fn is_move_to(&self) -> bool {
        matches!(self, Self::MoveTo(_))
    }

    /// Is this a closepath?
    #[inline]
    pub fn is_close_path(&self) -> bool {
        matches!(self, Self::ClosePath(_))
    }
}

impl Segment for Command {
    fn original_token(&self) -> Token {
        dispatch!(self, seg => seg.original_token())
    }

    fn to_token(&self) -> Token {
        dispatch!(self, seg => seg.to_token())
    }

    fn coords(&self) -> Coords {
        dispatch!(self, seg => seg.coords())
    }

    fn resolve(&mut self, resolved: Resolved) {
        dispatch!(self, seg => seg.resolve(resolved));
    }

    fn offset(&mut self, v: Vec2, precision: Option<u32>) {
        dispatch!(self, seg => seg.offset(v, precision));
    }

    fn owned_points(&self) -> SmallVec<[Point; 3]> {
        dispatch!(self, seg => seg.owned_points())
    }
}

/// The command in path syntax, using its current arguments.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_token(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(code: u8, args: &[f64]) -> Command {
        Command::from_token(Point::ZERO, Token::from_code(code, args).unwrap())
    }

    #[test]
    fn handles_per_kind() {
        assert_eq!(
            first(b'C', &[1., 1., 2., 2., 3., 3.]).handles().as_slice(),
            [Handle::StartControl, Handle::EndControl, Handle::EndPoint]
        );
        assert_eq!(
            first(b'A', &[5., 5., 0., 0., 0., 10., 0.]).handles().as_slice(),
            [Handle::RadiusX, Handle::RadiusY, Handle::EndPoint]
        );
        assert!(first(b'Z', &[]).handles().is_empty());
    }

    #[test]
    fn unsupported_handles() {
        let mut line = first(b'L', &[5., 5.]);
        assert_eq!(
            line.move_handle(Handle::StartControl, Vec2::new(1., 1.), None),
            Err(EditError::UnsupportedHandle {
                kind: CommandKind::LineTo,
                handle: Handle::StartControl,
            })
        );
        let mut close = first(b'Z', &[]);
        assert!(close.move_end_point(Vec2::new(1., 1.), None).is_err());
        assert_eq!(
            line.as_arc_mut().map(|_| ()),
            Err(EditError::NotAnArc {
                kind: CommandKind::LineTo
            })
        );
    }

    #[test]
    fn relative_commands_ignore_plain_translation() {
        let mut rel = first(b'l', &[5., 5.]);
        rel.translate(Vec2::new(3., 3.), false, None);
        assert_eq!(rel.to_string(), "l 5 5");
        rel.translate(Vec2::new(3., 3.), true, None);
        assert_eq!(rel.to_string(), "l 8 8");
        assert_eq!(rel.original_token().to_string(), "l 5 5");
    }

    #[test]
    fn successor_after_curve() {
        let curve = first(b'C', &[0., 10., 10., 10., 10., 0.]);
        let next = curve
            .successor(CommandKind::SmoothCurveTo, false, Vec2::new(10., 10.))
            .unwrap();
        assert_eq!(next.to_string(), "S 20 10 20 10");
        assert_eq!(next.start(), Point::new(10., 0.));
        assert_eq!(
            curve.successor(CommandKind::ClosePath, false, Vec2::new(10., 10.)),
            Err(EditError::UnsupportedSuccessor {
                kind: CommandKind::ClosePath
            })
        );
    }

    #[test]
    fn border_check_uses_owned_points() {
        let border = Border::new(0., 0., 10., 10.);
        assert!(first(b'L', &[10., 10.]).is_inside_border(&border));
        assert!(!first(b'L', &[10., 11.]).is_inside_border(&border));
        assert!(!first(b'Q', &[-1., 5., 5., 5.]).is_inside_border(&border));
        assert!(first(b'Z', &[]).is_inside_border(&border));
    }
}
