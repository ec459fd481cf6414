// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subpaths.

use std::fmt::{self, Write};

use crate::common::write_number;
use crate::resolve::{resolve, Predecessor};
use crate::{Border, Command, CommandKind, EditError, Point, Segment, Token, TokenKind, Vec2};

/// One subpath: a run of commands that starts at a moveto (or continues
/// from the previous subpath) and ends at a closepath or the next moveto.
///
/// Commands are stored in order, and each one's start point is the end of
/// the one before. Every mutation re-resolves the chain so the derived
/// geometry never goes stale.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    origin: Point,
    start: Point,
    end: Point,
    closed: bool,
    commands: Vec<Command>,
}

impl Shape {
    /// Create an empty shape continuing from `origin`.
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            start: origin,
            end: origin,
            closed: false,
            commands: Vec::new(),
        }
    }

    /// The point the shape continues from: the end of the previous shape,
    /// or `(0, 0)` for the first one.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The logical start point, where a closepath returns to.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The current point after the last command.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether the shape ends with a closepath.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The commands.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The command at `index`.
    #[inline]
    pub fn command(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    /// Number of commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the shape has no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a command.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::ShapeClosed`] if the shape already ends in a
    /// closepath.
    pub fn add(&mut self, token: Token) -> Result<(), EditError> {
        if self.closed {
            return Err(EditError::ShapeClosed);
        }
        self.append(token);
        Ok(())
    }

    /// Append without checking for a closepath. The parser finishes a shape
    /// as soon as it closes, so it never needs the check.
    pub(crate) fn append(&mut self, token: Token) {
        let prev = self
            .commands
            .last()
            .map_or(Predecessor::Point(self.end), Predecessor::Command);
        let command = Command::new(token, resolve(prev, &token));
        self.track(command.kind(), command.end());
        self.commands.push(command);
    }

    fn track(&mut self, kind: CommandKind, end: Point) {
        match kind {
            CommandKind::MoveTo => {
                self.start = end;
                self.end = end;
            }
            CommandKind::ClosePath => {
                self.closed = true;
                self.end = self.start;
            }
            _ => self.end = end,
        }
    }

    /// Insert `command` after the command at `index`, then re-resolve the
    /// chain.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::ShapeClosed`] when `index` is a closepath, and
    /// [`EditError::UnsupportedSuccessor`] when `command` is one; use
    /// [`Shape::toggle_close`] to close a shape.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn insert_after(&mut self, index: usize, command: Command) -> Result<(), EditError> {
        if self.commands[index].is_close_path() {
            return Err(EditError::ShapeClosed);
        }
        if command.is_close_path() {
            return Err(EditError::UnsupportedSuccessor {
                kind: CommandKind::ClosePath,
            });
        }
        self.commands.insert(index + 1, command);
        self.refresh();
        Ok(())
    }

    /// Remove and return the command at `index`, then re-resolve the chain.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Command {
        let command = self.commands.remove(index);
        self.refresh();
        command
    }

    /// Apply `f` to the command at `index`, then re-resolve the chain.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn update<R>(&mut self, index: usize, f: impl FnOnce(&mut Command) -> R) -> Option<R> {
        let result = f(self.commands.get_mut(index)?);
        self.refresh();
        Some(result)
    }

    /// Translate the whole shape by `v`.
    ///
    /// Absolute commands are moved, relative commands follow their
    /// predecessors. A leading relative moveto is moved as well so the shape
    /// does not stay anchored to the previous one.
    pub fn translate(&mut self, v: Vec2, precision: Option<u32>) {
        self.offset_commands(v, true, precision);
    }

    pub(crate) fn offset_commands(&mut self, v: Vec2, move_leading: bool, precision: Option<u32>) {
        for (i, command) in self.commands.iter_mut().enumerate() {
            let move_relative = move_leading && i == 0 && command.is_move_to();
            command.translate(v, move_relative, precision);
        }
        self.refresh();
    }

    /// Continue from a different point, re-resolving the chain.
    pub(crate) fn set_origin(&mut self, origin: Point) {
        if origin != self.origin {
            self.origin = origin;
            self.refresh();
        }
    }

    /// Append a closepath, or remove it if the shape is already closed.
    pub fn toggle_close(&mut self) {
        if self.closed {
            self.commands.retain(|c| !c.is_close_path());
            self.refresh();
        } else {
            self.append(Token::new(false, TokenKind::ClosePath));
        }
    }

    /// Whether every command keeps its own points within `border`.
    pub fn is_inside_border(&self, border: &Border) -> bool {
        self.commands.iter().all(|c| c.is_inside_border(border))
    }

    /// Re-derive every command's geometry from the current arguments,
    /// starting again from the shape's origin.
    pub(crate) fn refresh(&mut self) {
        self.start = self.origin;
        self.end = self.origin;
        self.closed = false;
        for i in 0..self.commands.len() {
            let (done, rest) = self.commands.split_at_mut(i);
            let prev = done
                .last()
                .map_or(Predecessor::Point(self.end), Predecessor::Command);
            let command = &mut rest[0];
            let token = command.to_token();
            command.resolve(resolve(prev, &token));
            let (kind, end) = (command.kind(), command.end());
            self.track(kind, end);
        }
    }

    /// Serialize for display, always starting with an absolute moveto.
    ///
    /// A shape that continues from a previous one does not draw on its own,
    /// so this prefixes `M start.x start.y` unless the first command is
    /// already an absolute moveto. The text is for rendering a single
    /// subpath and does not round-trip through the parser.
    pub fn to_renderer_string(&self) -> String {
        RendererString(self).to_string()
    }

    fn write_renderer(&self, out: &mut impl Write) -> fmt::Result {
        let Some((first, rest)) = self.commands.split_first() else {
            return Ok(());
        };
        if first.is_move_to() && !first.is_relative() {
            write!(out, "{first}")?;
        } else {
            out.write_str("M ")?;
            write_number(out, self.start.x)?;
            out.write_char(' ')?;
            write_number(out, self.start.y)?;
            out.write_char(' ')?;
            if !first.is_move_to() {
                write!(out, " {first}")?;
            }
        }
        out.write_char(' ')?;
        for (i, command) in rest.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{command}")?;
        }
        Ok(())
    }
}

struct RendererString<'a>(&'a Shape);

impl fmt::Display for RendererString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_renderer(f)
    }
}

/// The commands joined by single spaces.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}
