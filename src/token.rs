// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsed, unresolved path instructions.

use std::fmt;

use crate::common::write_number;
use crate::{Point, Vec2};

/// The ten kinds of path command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    /// `M`/`m`
    MoveTo,
    /// `L`/`l`
    LineTo,
    /// `H`/`h`
    HorizontalLineTo,
    /// `V`/`v`
    VerticalLineTo,
    /// `C`/`c`
    CurveTo,
    /// `S`/`s`
    SmoothCurveTo,
    /// `Q`/`q`
    QuadraticCurveTo,
    /// `T`/`t`
    SmoothQuadraticCurveTo,
    /// `A`/`a`
    EllipticalArc,
    /// `Z`/`z`
    ClosePath,
}

/// The shape of one argument in the path grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg {
    /// Any number, scientific notation allowed.
    Number,
    /// A single `0` or `1`.
    Flag,
}

use Arg::{Flag, Number};

impl CommandKind {
    /// Look up a command letter. Lowercase letters are relative.
    pub fn from_letter(c: u8) -> Option<(Self, bool)> {
        let kind = match c.to_ascii_uppercase() {
            b'M' => Self::MoveTo,
            b'L' => Self::LineTo,
            b'H' => Self::HorizontalLineTo,
            b'V' => Self::VerticalLineTo,
            b'C' => Self::CurveTo,
            b'S' => Self::SmoothCurveTo,
            b'Q' => Self::QuadraticCurveTo,
            b'T' => Self::SmoothQuadraticCurveTo,
            b'A' => Self::EllipticalArc,
            b'Z' => Self::ClosePath,
            _ => return None,
        };
        Some((kind, c.is_ascii_lowercase()))
    }

    /// The command letter, lowercase when `relative`.
    pub fn letter(self, relative: bool) -> char {
        let c = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CurveTo => 'C',
            Self::SmoothCurveTo => 'S',
            Self::QuadraticCurveTo => 'Q',
            Self::SmoothQuadraticCurveTo => 'T',
            Self::EllipticalArc => 'A',
            Self::ClosePath => 'Z',
        };
        if relative {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }

    /// The arguments this command takes, in grammar order.
    pub fn args(self) -> &'static [Arg] {
        match self {
            Self::ClosePath => &[],
            Self::HorizontalLineTo | Self::VerticalLineTo => &[Number],
            Self::MoveTo | Self::LineTo | Self::SmoothQuadraticCurveTo => &[Number, Number],
            Self::SmoothCurveTo | Self::QuadraticCurveTo => &[Number, Number, Number, Number],
            Self::CurveTo => &[Number, Number, Number, Number, Number, Number],
            Self::EllipticalArc => &[Number, Number, Number, Flag, Flag, Number, Number],
        }
    }

    /// Is this one of the curve kinds whose control points can be reflected
    /// into a following smooth cubic?
    #[inline]
    pub fn is_cubic(self) -> bool {
        matches!(self, Self::CurveTo | Self::SmoothCurveTo)
    }

    /// Is this one of the curve kinds whose control point can be reflected
    /// into a following smooth quadratic?
    #[inline]
    pub fn is_quadratic(self) -> bool {
        matches!(self, Self::QuadraticCurveTo | Self::SmoothQuadraticCurveTo)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MoveTo => "moveto",
            Self::LineTo => "lineto",
            Self::HorizontalLineTo => "horizontal lineto",
            Self::VerticalLineTo => "vertical lineto",
            Self::CurveTo => "curveto",
            Self::SmoothCurveTo => "smooth curveto",
            Self::QuadraticCurveTo => "quadratic curveto",
            Self::SmoothQuadraticCurveTo => "smooth quadratic curveto",
            Self::EllipticalArc => "elliptical arc",
            Self::ClosePath => "closepath",
        })
    }
}

/// The arguments of a [`Token`], named per command kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs, reason = "field names are the SVG attribute grammar names")]
pub enum TokenKind {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    HorizontalLineTo {
        x: f64,
    },
    VerticalLineTo {
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    SmoothCurveTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    SmoothQuadraticCurveTo {
        x: f64,
        y: f64,
    },
    EllipticalArc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    ClosePath,
}

/// One parsed path instruction, before its coordinates are resolved
/// against the rest of the path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Whether the numbers are offsets from the current point.
    pub relative: bool,
    /// The command and its arguments.
    pub kind: TokenKind,
}

impl Token {
    /// Create a token.
    #[inline]
    pub const fn new(relative: bool, kind: TokenKind) -> Self {
        Self { relative, kind }
    }

    /// Build a token from a command letter and its arguments in grammar order.
    ///
    /// Flags are true when their value is non-zero. Returns `None` when the
    /// letter is unknown or the number of arguments does not match.
    pub fn from_code(code: u8, args: &[f64]) -> Option<Self> {
        let (kind, relative) = CommandKind::from_letter(code)?;
        if args.len() != kind.args().len() {
            return None;
        }
        let kind = match (kind, args) {
            (CommandKind::MoveTo, &[x, y]) => TokenKind::MoveTo { x, y },
            (CommandKind::LineTo, &[x, y]) => TokenKind::LineTo { x, y },
            (CommandKind::HorizontalLineTo, &[x]) => TokenKind::HorizontalLineTo { x },
            (CommandKind::VerticalLineTo, &[y]) => TokenKind::VerticalLineTo { y },
            (CommandKind::CurveTo, &[x1, y1, x2, y2, x, y]) => TokenKind::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            },
            (CommandKind::SmoothCurveTo, &[x2, y2, x, y]) => {
                TokenKind::SmoothCurveTo { x2, y2, x, y }
            }
            (CommandKind::QuadraticCurveTo, &[x1, y1, x, y]) => {
                TokenKind::QuadraticCurveTo { x1, y1, x, y }
            }
            (CommandKind::SmoothQuadraticCurveTo, &[x, y]) => {
                TokenKind::SmoothQuadraticCurveTo { x, y }
            }
            (CommandKind::EllipticalArc, &[rx, ry, x_axis_rotation, large_arc, sweep, x, y]) => {
                TokenKind::EllipticalArc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc: large_arc != 0.0,
                    sweep: sweep != 0.0,
                    x,
                    y,
                }
            }
            (CommandKind::ClosePath, &[]) => TokenKind::ClosePath,
            _ => return None,
        };
        Some(Self::new(relative, kind))
    }

    /// Synthesize a token for a new command following a segment that ends
    /// at `prev_end`.
    ///
    /// The new end point sits `offset` away from `prev_end`, every control
    /// point sits on the new end point, and an arc gets radii of half the
    /// offset with no rotation and both flags cleared. Returns `None` for
    /// closepath, which has no geometry of its own to place.
    pub fn successor(prev_end: Point, kind: CommandKind, relative: bool, offset: Vec2) -> Option<Self> {
        let (x, y) = if relative {
            (offset.x, offset.y)
        } else {
            (prev_end.x + offset.x, prev_end.y + offset.y)
        };
        let kind = match kind {
            CommandKind::MoveTo => TokenKind::MoveTo { x, y },
            CommandKind::LineTo => TokenKind::LineTo { x, y },
            CommandKind::HorizontalLineTo => TokenKind::HorizontalLineTo { x },
            CommandKind::VerticalLineTo => TokenKind::VerticalLineTo { y },
            CommandKind::CurveTo => TokenKind::CurveTo {
                x1: x,
                y1: y,
                x2: x,
                y2: y,
                x,
                y,
            },
            CommandKind::SmoothCurveTo => TokenKind::SmoothCurveTo { x2: x, y2: y, x, y },
            CommandKind::QuadraticCurveTo => TokenKind::QuadraticCurveTo { x1: x, y1: y, x, y },
            CommandKind::SmoothQuadraticCurveTo => TokenKind::SmoothQuadraticCurveTo { x, y },
            CommandKind::EllipticalArc => TokenKind::EllipticalArc {
                rx: (offset.x / 2.).abs(),
                ry: (offset.y / 2.).abs(),
                x_axis_rotation: 0.,
                large_arc: false,
                sweep: false,
                x,
                y,
            },
            CommandKind::ClosePath => return None,
        };
        Some(Self::new(relative, kind))
    }

    /// The command kind.
    pub fn command(&self) -> CommandKind {
        match self.kind {
            TokenKind::MoveTo { .. } => CommandKind::MoveTo,
            TokenKind::LineTo { .. } => CommandKind::LineTo,
            TokenKind::HorizontalLineTo { .. } => CommandKind::HorizontalLineTo,
            TokenKind::VerticalLineTo { .. } => CommandKind::VerticalLineTo,
            TokenKind::CurveTo { .. } => CommandKind::CurveTo,
            TokenKind::SmoothCurveTo { .. } => CommandKind::SmoothCurveTo,
            TokenKind::QuadraticCurveTo { .. } => CommandKind::QuadraticCurveTo,
            TokenKind::SmoothQuadraticCurveTo { .. } => CommandKind::SmoothQuadraticCurveTo,
            TokenKind::EllipticalArc { .. } => CommandKind::EllipticalArc,
            TokenKind::ClosePath => CommandKind::ClosePath,
        }
    }

    /// The command letter.
    #[inline]
    pub fn code(&self) -> char {
        self.command().letter(self.relative)
    }

    /// The end point x argument, if this command has one.
    pub fn x(&self) -> Option<f64> {
        match self.kind {
            TokenKind::MoveTo { x, .. }
            | TokenKind::LineTo { x, .. }
            | TokenKind::HorizontalLineTo { x }
            | TokenKind::CurveTo { x, .. }
            | TokenKind::SmoothCurveTo { x, .. }
            | TokenKind::QuadraticCurveTo { x, .. }
            | TokenKind::SmoothQuadraticCurveTo { x, .. }
            | TokenKind::EllipticalArc { x, .. } => Some(x),
            TokenKind::VerticalLineTo { .. } | TokenKind::ClosePath => None,
        }
    }

    /// The end point y argument, if this command has one.
    pub fn y(&self) -> Option<f64> {
        match self.kind {
            TokenKind::MoveTo { y, .. }
            | TokenKind::LineTo { y, .. }
            | TokenKind::VerticalLineTo { y }
            | TokenKind::CurveTo { y, .. }
            | TokenKind::SmoothCurveTo { y, .. }
            | TokenKind::QuadraticCurveTo { y, .. }
            | TokenKind::SmoothQuadraticCurveTo { y, .. }
            | TokenKind::EllipticalArc { y, .. } => Some(y),
            TokenKind::HorizontalLineTo { .. } | TokenKind::ClosePath => None,
        }
    }
}

/// Writes the command letter followed by its arguments in grammar order,
/// separated by single spaces. Flags are written as `0`/`1`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())?;
        let mut num = |v: f64| -> fmt::Result {
            f.write_str(" ")?;
            write_number(f, v)
        };
        match self.kind {
            TokenKind::MoveTo { x, y }
            | TokenKind::LineTo { x, y }
            | TokenKind::SmoothQuadraticCurveTo { x, y } => {
                num(x)?;
                num(y)
            }
            TokenKind::HorizontalLineTo { x } => num(x),
            TokenKind::VerticalLineTo { y } => num(y),
            TokenKind::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                for v in [x1, y1, x2, y2, x, y] {
                    num(v)?;
                }
                Ok(())
            }
            TokenKind::SmoothCurveTo { x2: a, y2: b, x, y }
            | TokenKind::QuadraticCurveTo { x1: a, y1: b, x, y } => {
                for v in [a, b, x, y] {
                    num(v)?;
                }
                Ok(())
            }
            TokenKind::EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                for v in [rx, ry, x_axis_rotation] {
                    num(v)?;
                }
                num(if large_arc { 1. } else { 0. })?;
                num(if sweep { 1. } else { 0. })?;
                num(x)?;
                num(y)
            }
            TokenKind::ClosePath => Ok(()),
        }
    }
}
