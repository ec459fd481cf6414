// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole path documents.

use std::fmt;
use std::mem;
use std::str::FromStr;

use tracing::trace;

use crate::{tokenize, Border, Command, CommandKind, EditError, ParseError, Point, Shape, Vec2};

/// A parsed path `d` attribute: an ordered list of [`Shape`]s.
///
/// Each shape continues from the end of the one before it, so an edit to
/// one shape can move the shapes after it when they start with relative
/// commands. `Path` keeps that chain consistent after every mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path(Vec<Shape>);

impl Path {
    /// Create a new, empty path.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse path data.
    ///
    /// A moveto starts a new shape unless the current one is still empty,
    /// and a closepath finishes the current shape. Empty input gives an
    /// empty path.
    ///
    /// ```
    /// use pathmark::Path;
    /// let path = Path::parse("M 10 10 L 20 20 Z M 5 5 l 1 1").unwrap();
    /// assert_eq!(path.len(), 2);
    /// assert!(path.shapes()[0].is_closed());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] locating the first malformed command.
    pub fn parse(data: &str) -> Result<Self, ParseError> {
        let mut shapes = Vec::new();
        let mut shape = Shape::new(Point::ZERO);
        for token in tokenize(data) {
            let token = token?;
            if token.command() == CommandKind::MoveTo && !shape.is_empty() {
                let next = Shape::new(shape.end());
                shapes.push(mem::replace(&mut shape, next));
            }
            shape.append(token);
            if shape.is_closed() {
                let next = Shape::new(shape.end());
                shapes.push(mem::replace(&mut shape, next));
            }
        }
        if !shape.is_empty() {
            shapes.push(shape);
        }
        trace!(shapes = shapes.len(), "parsed path");
        Ok(Self(shapes))
    }

    /// The shapes.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.0
    }

    /// The shape at `index`.
    #[inline]
    pub fn shape(&self, index: usize) -> Option<&Shape> {
        self.0.get(index)
    }

    /// Number of shapes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no shapes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The current point after the last shape.
    pub fn end(&self) -> Point {
        self.0.last().map_or(Point::ZERO, Shape::end)
    }

    /// The command at `address`, or `None` if it does not exist or the
    /// address names a whole shape.
    pub fn command(&self, address: CommandAddress) -> Option<&Command> {
        self.shape(address.shape)?.command(address.command?)
    }

    /// Every command with its address, in document order.
    pub fn commands(&self) -> impl Iterator<Item = (CommandAddress, &Command)> + '_ {
        self.0.iter().enumerate().flat_map(|(i, shape)| {
            shape
                .commands()
                .iter()
                .enumerate()
                .map(move |(j, command)| (CommandAddress::new(i, j), command))
        })
    }

    /// The address of the `index`th command, counting across shapes.
    pub fn command_at_flat_index(&self, index: usize) -> Option<CommandAddress> {
        self.commands().nth(index).map(|(address, _)| address)
    }

    /// Check that `address` names an existing shape, and command if it
    /// names one.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::ShapeOutOfRange`] or
    /// [`EditError::CommandOutOfRange`].
    pub fn check(&self, address: CommandAddress) -> Result<(), EditError> {
        let shape = self.shape(address.shape).ok_or(EditError::ShapeOutOfRange {
            index: address.shape,
            len: self.len(),
        })?;
        match address.command {
            Some(index) if index >= shape.len() => Err(EditError::CommandOutOfRange {
                shape: address.shape,
                index,
                len: shape.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Append a shape, continuing from the current end of the path.
    pub fn push(&mut self, mut shape: Shape) {
        shape.set_origin(self.end());
        self.0.push(shape);
    }

    /// Apply `f` to the shape at `index`, then bring the shapes after it up
    /// to date.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn update_shape<R>(&mut self, index: usize, f: impl FnOnce(&mut Shape) -> R) -> Option<R> {
        let result = f(self.0.get_mut(index)?);
        self.rechain(index + 1);
        Some(result)
    }

    /// Remove and return the shape at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Shape {
        let shape = self.0.remove(index);
        self.rechain(index);
        shape
    }

    /// Translate every shape by `v`.
    ///
    /// Only the first shape's leading relative moveto is moved; later
    /// relative movetos follow the shape before them.
    pub fn translate(&mut self, v: Vec2, precision: Option<u32>) {
        for (i, shape) in self.0.iter_mut().enumerate() {
            shape.offset_commands(v, i == 0, precision);
        }
        self.rechain(1);
    }

    /// Whether every shape lies within `border`.
    pub fn is_inside_border(&self, border: &Border) -> bool {
        self.0.iter().all(|shape| shape.is_inside_border(border))
    }

    /// Reset the origin of every shape from `from` onwards to the end of
    /// the shape before it.
    fn rechain(&mut self, from: usize) {
        if from == 0 {
            if let Some(first) = self.0.first_mut() {
                first.set_origin(Point::ZERO);
            }
        }
        for i in from.max(1)..self.0.len() {
            let end = self.0[i - 1].end();
            self.0[i].set_origin(end);
        }
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The path data: every command's current arguments, separated by single
/// spaces.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for shape in self.0.iter().filter(|shape| !shape.is_empty()) {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{shape}")?;
        }
        Ok(())
    }
}

impl From<Vec<Shape>> for Path {
    fn from(shapes: Vec<Shape>) -> Self {
        let mut path = Self(shapes);
        path.rechain(0);
        path
    }
}

/// Identifies a shape, or one command within it.
///
/// The string form is `shape-N` for a shape and `shape-N-c-M` for a
/// command, which hosts can use as element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandAddress {
    /// Index of the shape in the path.
    pub shape: usize,
    /// Index of the command in the shape, or `None` for the whole shape.
    pub command: Option<usize>,
}

impl CommandAddress {
    /// The address of a command.
    #[inline]
    pub const fn new(shape: usize, command: usize) -> Self {
        Self {
            shape,
            command: Some(command),
        }
    }

    /// The address of a whole shape.
    #[inline]
    pub const fn whole_shape(shape: usize) -> Self {
        Self {
            shape,
            command: None,
        }
    }
}

impl fmt::Display for CommandAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape-{}", self.shape)?;
        if let Some(command) = self.command {
            write!(f, "-c-{command}")?;
        }
        Ok(())
    }
}

impl FromStr for CommandAddress {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EditError::InvalidAddress(s.to_owned());
        let rest = s.strip_prefix("shape-").ok_or_else(invalid)?;
        let index = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<usize>().map_err(|_| invalid())
        };
        match rest.split_once("-c-") {
            Some((shape, command)) => Ok(Self::new(index(shape)?, index(command)?)),
            None => Ok(Self::whole_shape(index(rest)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_shapes_at_moveto_and_closepath() {
        let path = Path::parse("M 0 0 L 10 0 M 5 5 L 6 6 Z L 1 1").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.shapes()[0].to_string(), "M 0 0 L 10 0");
        assert_eq!(path.shapes()[1].to_string(), "M 5 5 L 6 6 Z");
        assert_eq!(path.shapes()[2].to_string(), "L 1 1");
        assert_eq!(path.shapes()[1].origin(), Point::new(10., 0.));
        assert_eq!(path.shapes()[2].origin(), Point::new(5., 5.));
    }

    #[test]
    fn every_moveto_after_a_command_starts_a_shape() {
        let path = Path::parse("M 1 1 M 2 2 L 3 3").unwrap();
        assert_eq!(path.len(), 2);
        let path = Path::parse("M 1 1 2 2").unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.shapes()[0].len(), 2);
    }

    #[test]
    fn empty_and_invalid() {
        assert!(Path::parse("").unwrap().is_empty());
        assert_eq!(Path::parse("").unwrap().to_string(), "");
        assert!(Path::parse("M 0 0 L").is_err());
        assert!("M 0 0 K".parse::<Path>().is_err());
    }

    #[test]
    fn display_uses_canonical_spacing() {
        let path: Path = "M10,10l5-5 h2v1z".parse().unwrap();
        assert_eq!(path.to_string(), "M 10 10 l 5 -5 h 2 v 1 z");
    }

    #[test]
    fn relative_shape_follows_edited_predecessor() {
        let mut path = Path::parse("M 0 0 L 10 0 m 5 5 l 1 1").unwrap();
        assert_eq!(path.shapes()[1].start(), Point::new(15., 5.));
        path.update_shape(0, |shape| {
            shape.update(1, |c| c.move_end_point(Vec2::new(0., 10.), None))
        });
        assert_eq!(path.shapes()[1].start(), Point::new(15., 15.));
        assert_eq!(path.to_string(), "M 0 0 L 10 10 m 5 5 l 1 1");
    }

    #[test]
    fn translate_moves_leading_relative_moveto_once() {
        let mut path = Path::parse("m 10 10 l 5 0 m 5 5 l 1 1").unwrap();
        path.translate(Vec2::new(1., 1.), None);
        assert_eq!(path.to_string(), "m 11 11 l 5 0 m 5 5 l 1 1");
        assert_eq!(path.shapes()[1].start(), Point::new(21., 16.));
    }

    #[test]
    fn flat_index() {
        let path = Path::parse("M 0 0 L 1 1 Z M 2 2 L 3 3").unwrap();
        assert_eq!(path.command_at_flat_index(0), Some(CommandAddress::new(0, 0)));
        assert_eq!(path.command_at_flat_index(3), Some(CommandAddress::new(1, 0)));
        assert_eq!(path.command_at_flat_index(4), Some(CommandAddress::new(1, 1)));
        assert_eq!(path.command_at_flat_index(5), None);
        let address = CommandAddress::new(1, 1);
        assert_eq!(path.command(address).unwrap().to_string(), "L 3 3");
    }

    #[test]
    fn address_strings() {
        assert_eq!(CommandAddress::new(2, 7).to_string(), "shape-2-c-7");
        assert_eq!(CommandAddress::whole_shape(3).to_string(), "shape-3");
        assert_eq!("shape-2-c-7".parse(), Ok(CommandAddress::new(2, 7)));
        assert_eq!("shape-3".parse(), Ok(CommandAddress::whole_shape(3)));
        for bad in ["shape-", "shape-x", "shape-1-c-", "circle-1", "shape--1", "shape-+1"] {
            assert_eq!(
                bad.parse::<CommandAddress>(),
                Err(EditError::InvalidAddress(bad.to_owned()))
            );
        }
    }

    #[test]
    fn check_addresses() {
        let path = Path::parse("M 0 0 L 1 1").unwrap();
        assert!(path.check(CommandAddress::new(0, 1)).is_ok());
        assert!(path.check(CommandAddress::whole_shape(0)).is_ok());
        assert_eq!(
            path.check(CommandAddress::new(1, 0)),
            Err(EditError::ShapeOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            path.check(CommandAddress::new(0, 2)),
            Err(EditError::CommandOutOfRange {
                shape: 0,
                index: 2,
                len: 2,
            })
        );
    }
}
