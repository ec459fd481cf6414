// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing session.

use tracing::{debug, trace, warn};

use crate::{
    Border, Command, CommandAddress, CommandKind, ConfigError, EditError, EditorConfig,
    EllipticalArc, Handle, History, ParseError, Path, Point, Segment, Shape, Token, TokenKind,
    Vec2,
};

/// An editing session over one path.
///
/// Every edit is checked against the border: if any command would end up
/// with a point outside it, the edit is rolled back and reported as
/// `Ok(false)`. Accepted edits are recorded in the undo history, except
/// during a drag, which is recorded once when it ends.
///
/// ```
/// use pathmark::{Border, CommandAddress, Editor, EditorConfig, Handle, Vec2};
///
/// let mut editor = Editor::with_border(EditorConfig::default(), Border::new(0., 0., 100., 100.));
/// editor.load("M 10 10 L 50 50").unwrap();
///
/// let end = CommandAddress::new(0, 1);
/// editor.drag_start();
/// assert!(editor.drag(end, Handle::EndPoint, Vec2::new(10., 0.)).unwrap());
/// // Past the right edge: rejected, nothing changes.
/// assert!(!editor.drag(end, Handle::EndPoint, Vec2::new(100., 0.)).unwrap());
/// editor.drag_end();
///
/// assert_eq!(editor.d(), "M 10 10 L 60 50");
/// assert_eq!(editor.undo().unwrap(), "M 10 10 L 50 50");
/// ```
#[derive(Clone, Debug)]
pub struct Editor {
    path: Path,
    /// The last state that passed the border check.
    snapshot: Path,
    border: Border,
    config: EditorConfig,
    history: History,
    dragging: bool,
}

impl Editor {
    /// Create an editor with an empty path and no border.
    pub fn new(config: EditorConfig) -> Self {
        Self::with_border(config, Border::unbounded())
    }

    /// Create an editor with an empty path, confined to `border`.
    pub fn with_border(config: EditorConfig, border: Border) -> Self {
        Self {
            path: Path::new(),
            snapshot: Path::new(),
            border,
            config,
            history: History::new(config.history_size),
            dragging: false,
        }
    }

    /// Replace the document with parsed path data.
    ///
    /// The new document is recorded in the history. It is not checked
    /// against the border.
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the document unchanged if `d` is
    /// malformed.
    pub fn load(&mut self, d: &str) -> Result<(), ParseError> {
        let path = Path::parse(d).map_err(|err| {
            warn!(%err, "rejected path data");
            err
        })?;
        debug!(shapes = path.len(), "loaded path");
        self.replace(path);
        self.history.commit(&self.path);
        Ok(())
    }

    fn replace(&mut self, path: Path) {
        self.snapshot = path.clone();
        self.path = path;
    }

    /// The document.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document as path data.
    pub fn d(&self) -> String {
        self.path.to_string()
    }

    /// The editing border.
    #[inline]
    pub fn border(&self) -> &Border {
        &self.border
    }

    /// Change the editing border.
    ///
    /// The history is reset to the current document, since earlier states
    /// may not fit the new border.
    pub fn set_border(&mut self, border: Border) {
        debug!(?border, "border changed, clearing history");
        self.border = border;
        self.history.clear();
        self.history.commit(&self.path);
    }

    /// The settings.
    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Change the edit precision.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrecision`] above 10 decimal places.
    pub fn set_precision(&mut self, precision: u32) -> Result<(), ConfigError> {
        self.config = self.config.with_precision(precision)?;
        Ok(())
    }

    /// The undo history.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn precision(&self) -> Option<u32> {
        Some(self.config.precision)
    }

    /// Accept the current document if it fits the border, otherwise roll
    /// back to the last accepted one.
    fn try_accept(&mut self) -> bool {
        if self.path.is_inside_border(&self.border) {
            self.snapshot = self.path.clone();
            true
        } else {
            debug!("edit leaves the border, rolling back");
            self.path = self.snapshot.clone();
            false
        }
    }

    /// Finish an edit: check the border and record the result.
    ///
    /// Returns `false` when the edit was rolled back or left the document
    /// as it was.
    fn finish(&mut self) -> bool {
        if self.path == self.snapshot {
            trace!("edit left the document unchanged");
            return false;
        }
        let accepted = self.try_accept();
        if accepted && !self.dragging {
            self.history.commit(&self.path);
        }
        accepted
    }

    fn command_index(&self, address: CommandAddress) -> Result<usize, EditError> {
        self.path.check(address)?;
        address.command.ok_or(EditError::MissingCommand {
            shape: address.shape,
        })
    }

    fn command(&self, address: CommandAddress) -> Result<&Command, EditError> {
        let index = self.command_index(address)?;
        let shape = self
            .path
            .shape(address.shape)
            .ok_or(EditError::ShapeOutOfRange {
                index: address.shape,
                len: self.path.len(),
            })?;
        shape.command(index).ok_or(EditError::CommandOutOfRange {
            shape: address.shape,
            index,
            len: shape.len(),
        })
    }

    /// Apply `f` to one command and re-resolve the document. Does not check
    /// the border.
    fn edit_command(
        &mut self,
        address: CommandAddress,
        f: impl FnOnce(&mut Command) -> Result<(), EditError>,
    ) -> Result<(), EditError> {
        let index = self.command_index(address)?;
        match self
            .path
            .update_shape(address.shape, |shape| shape.update(index, f))
        {
            Some(Some(result)) => result,
            _ => Err(EditError::ShapeOutOfRange {
                index: address.shape,
                len: self.path.len(),
            }),
        }
    }

    /// Begin a drag gesture.
    pub fn drag_start(&mut self) {
        trace!("drag start");
        self.dragging = true;
        self.snapshot = self.path.clone();
    }

    /// Move one handle by `v`, or the whole shape if `address` names one.
    ///
    /// Relative commands cannot be dragged by a handle; they follow their
    /// predecessor. Dragging one is ignored and reported as `Ok(false)`.
    /// [`Handle::Whole`] moves every point of an absolute command.
    ///
    /// Returns whether the document changed: `false` if the edit was rolled
    /// back at the border or moved nothing, as when every command of a
    /// dragged shape is relative to a fixed predecessor.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not exist or the command has no
    /// such handle.
    pub fn drag(&mut self, address: CommandAddress, handle: Handle, v: Vec2) -> Result<bool, EditError> {
        self.path.check(address)?;
        let precision = self.precision();
        if address.command.is_none() {
            self.path
                .update_shape(address.shape, |shape| shape.translate(v, precision));
            return Ok(self.finish());
        }
        if self.command(address)?.is_relative() {
            trace!(%address, "ignoring drag of a relative command");
            return Ok(false);
        }
        self.edit_command(address, |command| command.move_handle(handle, v, precision))?;
        Ok(self.finish())
    }

    /// Drag an end point with its direction from the start point snapped to
    /// a multiple of `step` radians.
    ///
    /// `v` is the raw pointer movement; the applied movement is adjusted so
    /// the end point lands on the snapped direction.
    ///
    /// # Errors
    ///
    /// As for [`drag`](Self::drag).
    pub fn drag_snapped(&mut self, address: CommandAddress, v: Vec2, step: f64) -> Result<bool, EditError> {
        let command = self.command(address)?;
        let (start, end) = (command.start(), command.end());
        let target = (end + v).snap_to_angle(start, step);
        self.drag(address, Handle::EndPoint, target - end)
    }

    /// End a drag gesture, recording the final state in the history.
    ///
    /// Returns whether a new history state was recorded.
    pub fn drag_end(&mut self) -> bool {
        trace!("drag end");
        self.dragging = false;
        self.try_accept() && self.history.commit(&self.path)
    }

    /// Move the whole document by `v`.
    ///
    /// Returns whether the document changed.
    pub fn translate(&mut self, v: Vec2) -> bool {
        let precision = self.precision();
        self.path.translate(v, precision);
        self.finish()
    }

    /// Move a command, relative or not, or a whole shape by `v`. This is
    /// the keyboard counterpart of a drag.
    ///
    /// # Errors
    ///
    /// Returns an error if the address does not exist or names a
    /// closepath.
    pub fn nudge(&mut self, address: CommandAddress, v: Vec2) -> Result<bool, EditError> {
        self.path.check(address)?;
        if address.command.is_none() {
            return self.drag(address, Handle::Whole, v);
        }
        if self.command(address)?.is_close_path() {
            return Err(EditError::UnsupportedHandle {
                kind: CommandKind::ClosePath,
                handle: Handle::Whole,
            });
        }
        let precision = self.precision();
        self.edit_command(address, |command| command.move_handle(Handle::Whole, v, precision))?;
        Ok(self.finish())
    }

    /// Insert a new command of `kind` after the one at `address` (or after
    /// the last command when `address` names a shape).
    ///
    /// The new end point is placed at the configured offset from the
    /// previous end point, or at the opposite offset if that leaves the
    /// border. Returns `Ok(false)` if neither fits.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::ShapeClosed`] after a closepath and
    /// [`EditError::UnsupportedSuccessor`] for a closepath `kind`.
    pub fn insert_after(
        &mut self,
        address: CommandAddress,
        kind: CommandKind,
        relative: bool,
    ) -> Result<bool, EditError> {
        self.path.check(address)?;
        let len = self.path.shape(address.shape).map_or(0, Shape::len);
        let index = address.command.unwrap_or(len.saturating_sub(1));
        let prev = self.command(CommandAddress::new(address.shape, index))?;
        if prev.is_close_path() {
            return Err(EditError::ShapeClosed);
        }
        let offset = self.config.successor_offset;
        let mut successor = prev.successor(kind, relative, offset)?;
        if !successor.is_inside_border(&self.border) {
            debug!(%kind, "successor leaves the border, trying the opposite offset");
            successor = prev.successor(kind, relative, -offset)?;
            if !successor.is_inside_border(&self.border) {
                return Ok(false);
            }
        }
        if let Some(result) = self
            .path
            .update_shape(address.shape, |shape| shape.insert_after(index, successor))
        {
            result?;
        }
        Ok(self.finish())
    }

    /// Delete the command at `address`, or the whole shape.
    ///
    /// A shape left with nothing but closepaths is deleted as well.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::LeadingMoveto`] when deleting a moveto that
    /// other commands depend on.
    pub fn remove(&mut self, address: CommandAddress) -> Result<bool, EditError> {
        self.path.check(address)?;
        let Some(index) = address.command else {
            self.path.remove(address.shape);
            return Ok(self.finish());
        };
        let len = self.path.shape(address.shape).map_or(0, Shape::len);
        if self.command(address)?.is_move_to() && len > 1 {
            return Err(EditError::LeadingMoveto);
        }
        let emptied = self.path.update_shape(address.shape, |shape| {
            shape.remove(index);
            shape.commands().iter().all(Command::is_close_path)
        });
        if emptied == Some(true) {
            debug!(shape = address.shape, "dropping emptied shape");
            self.path.remove(address.shape);
        }
        Ok(self.finish())
    }

    /// Close the shape, or reopen it if it is closed.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::ShapeOutOfRange`] for a missing shape.
    pub fn toggle_closed(&mut self, shape: usize) -> Result<bool, EditError> {
        self.path.check(CommandAddress::whole_shape(shape))?;
        self.path.update_shape(shape, Shape::toggle_close);
        Ok(self.finish())
    }

    fn edit_arc(&mut self, address: CommandAddress, f: impl FnOnce(&mut EllipticalArc)) -> Result<bool, EditError> {
        self.edit_command(address, |command| {
            f(command.as_arc_mut()?);
            Ok(())
        })?;
        Ok(self.finish())
    }

    /// Flip the large arc flag of the arc at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotAnArc`] for other commands.
    pub fn toggle_large_arc(&mut self, address: CommandAddress) -> Result<bool, EditError> {
        self.edit_arc(address, EllipticalArc::toggle_large_arc)
    }

    /// Flip the sweep flag of the arc at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotAnArc`] for other commands.
    pub fn toggle_sweep(&mut self, address: CommandAddress) -> Result<bool, EditError> {
        self.edit_arc(address, EllipticalArc::toggle_sweep)
    }

    /// Rotate the arc at `address` by the configured step.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotAnArc`] for other commands.
    pub fn rotate_arc(&mut self, address: CommandAddress) -> Result<bool, EditError> {
        let step = self.config.rotation_step;
        self.edit_arc(address, |arc| arc.rotate(step))
    }

    /// Set the x axis rotation of the arc at `address`, in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NotAnArc`] for other commands.
    pub fn set_rotation(&mut self, address: CommandAddress, angle: f64) -> Result<bool, EditError> {
        self.edit_arc(address, |arc| arc.set_x_axis_rotation(angle))
    }

    /// Start a new shape with an absolute moveto at `point`, rounded to the
    /// configured new shape precision.
    ///
    /// Returns the address of the new moveto, or `None` if the point is
    /// outside the border.
    pub fn add_shape_at(&mut self, point: Point) -> Option<CommandAddress> {
        let Point { x, y } = point.round_to(self.config.new_shape_precision);
        let mut shape = Shape::new(self.path.end());
        shape.append(Token::new(false, TokenKind::MoveTo { x, y }));
        self.path.push(shape);
        self.finish()
            .then(|| CommandAddress::new(self.path.len() - 1, 0))
    }

    /// Step back in the history and load that state.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::Parse`] if the stored state does not parse,
    /// which only happens if the history was fed foreign data.
    pub fn undo(&mut self) -> Result<String, EditError> {
        let d = self.history.undo().to_owned();
        self.restore(&d)?;
        Ok(d)
    }

    /// Step forward in the history and load that state.
    ///
    /// # Errors
    ///
    /// As for [`undo`](Self::undo).
    pub fn redo(&mut self) -> Result<String, EditError> {
        let d = self.history.redo().to_owned();
        self.restore(&d)?;
        Ok(d)
    }

    fn restore(&mut self, d: &str) -> Result<(), ParseError> {
        let path = Path::parse(d)?;
        debug!(cursor = self.history.cursor(), "restored history state");
        self.replace(path);
        Ok(())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(d: &str) -> Editor {
        let mut editor = Editor::with_border(EditorConfig::default(), Border::new(0., 0., 100., 100.));
        editor.load(d).unwrap();
        editor
    }

    #[test]
    fn drag_end_point() {
        let mut e = editor("M 10 10 L 20 20");
        let accepted = e
            .drag(CommandAddress::new(0, 1), Handle::EndPoint, Vec2::new(5., -5.))
            .unwrap();
        assert!(accepted);
        assert_eq!(e.d(), "M 10 10 L 25 15");
    }

    #[test]
    fn drag_out_of_border_rolls_back() {
        let mut e = editor("M 10 10 L 20 20");
        let before = e.d();
        let accepted = e
            .drag(CommandAddress::new(0, 1), Handle::EndPoint, Vec2::new(0., 200.))
            .unwrap();
        assert!(!accepted);
        assert_eq!(e.d(), before);
        assert_eq!(e.history().len(), 2);
    }

    #[test]
    fn relative_commands_are_not_dragged() {
        let mut e = editor("M 10 10 l 20 20");
        let accepted = e
            .drag(CommandAddress::new(0, 1), Handle::EndPoint, Vec2::new(5., 5.))
            .unwrap();
        assert!(!accepted);
        assert_eq!(e.d(), "M 10 10 l 20 20");
        // Moving the moveto carries the relative line along.
        e.drag(CommandAddress::new(0, 0), Handle::EndPoint, Vec2::new(5., 5.))
            .unwrap();
        assert_eq!(e.path().shapes()[0].end(), Point::new(35., 35.));
    }

    #[test]
    fn whole_shape_drag() {
        let mut e = editor("M 10 10 L 20 20 Z M 50 50 l 5 5");
        e.drag(CommandAddress::whole_shape(1), Handle::Whole, Vec2::new(1., 2.))
            .unwrap();
        assert_eq!(e.d(), "M 10 10 L 20 20 Z M 51 52 l 5 5");
    }

    #[test]
    fn whole_shape_drag_of_relative_commands_changes_nothing() {
        let mut e = editor("M 10 10 c 1 1 2 2 3 3 s 1 1 2 2 a 5 5 0 0 1 4 4 t 1 1 Z l 2 2");
        let before = e.d();
        let changed = e
            .drag(CommandAddress::whole_shape(1), Handle::Whole, Vec2::new(1., 1.))
            .unwrap();
        assert!(!changed);
        assert_eq!(e.d(), before);
        assert_eq!(e.history().len(), 2);
        assert!(!e.translate(Vec2::ZERO));
        assert_eq!(e.history().len(), 2);
    }

    #[test]
    fn missing_command_reports_shape_length() {
        let mut e = editor("M 10 10 L 20 20 Z");
        assert_eq!(
            e.toggle_sweep(CommandAddress::new(0, 5)),
            Err(EditError::CommandOutOfRange {
                shape: 0,
                index: 5,
                len: 3,
            })
        );
        assert_eq!(
            e.drag_snapped(CommandAddress::new(0, 9), Vec2::ZERO, 0.5),
            Err(EditError::CommandOutOfRange {
                shape: 0,
                index: 9,
                len: 3,
            })
        );
    }

    #[test]
    fn rotation_is_normalized() {
        let mut e = editor("M 10 10 A 10 10 0 0 0 30 10");
        let arc = CommandAddress::new(0, 1);
        assert!(e.set_rotation(arc, 400.).unwrap());
        assert_eq!(e.d(), "M 10 10 A 10 10 40 0 0 30 10");
        assert!(e.set_rotation(arc, -90.).unwrap());
        assert_eq!(e.d(), "M 10 10 A 10 10 270 0 0 30 10");
    }

    #[test]
    fn drag_precision() {
        let mut e = editor("M 10 10 L 20 20");
        e.drag(CommandAddress::new(0, 1), Handle::EndPoint, Vec2::new(0.26, 0.04))
            .unwrap();
        assert_eq!(e.d(), "M 10 10 L 20.3 20");
    }

    #[test]
    fn drag_gesture_commits_once() {
        let mut e = editor("M 10 10 L 20 20");
        e.drag_start();
        for _ in 0..5 {
            e.drag(CommandAddress::new(0, 1), Handle::EndPoint, Vec2::new(1., 0.))
                .unwrap();
        }
        assert_eq!(e.history().len(), 2);
        assert!(e.drag_end());
        assert_eq!(e.history().len(), 3);
        assert_eq!(e.undo().unwrap(), "M 10 10 L 20 20");
        assert_eq!(e.redo().unwrap(), "M 10 10 L 25 20");
    }

    #[test]
    fn snapped_drag() {
        let mut e = editor("M 10 10 L 20 10");
        e.drag_snapped(
            CommandAddress::new(0, 1),
            Vec2::new(0., 1.),
            std::f64::consts::FRAC_PI_4,
        )
        .unwrap();
        let end = e.path().shapes()[0].end();
        assert!((end.y - 10.).abs() < 1e-9);
    }

    #[test]
    fn handle_errors() {
        let mut e = editor("M 10 10 L 20 20");
        assert_eq!(
            e.drag(CommandAddress::new(0, 1), Handle::RadiusX, Vec2::ZERO),
            Err(EditError::UnsupportedHandle {
                kind: CommandKind::LineTo,
                handle: Handle::RadiusX,
            })
        );
        assert_eq!(
            e.drag(CommandAddress::new(3, 0), Handle::EndPoint, Vec2::ZERO),
            Err(EditError::ShapeOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn insert_after_with_fallback() {
        let mut e = editor("M 10 10 L 95 95");
        assert!(e
            .insert_after(CommandAddress::new(0, 1), CommandKind::LineTo, false)
            .unwrap());
        assert_eq!(e.d(), "M 10 10 L 95 95 L 85 85");

        let mut e = editor("M 10 10");
        assert!(e
            .insert_after(CommandAddress::new(0, 0), CommandKind::CurveTo, false)
            .unwrap());
        assert_eq!(e.d(), "M 10 10 C 20 20 20 20 20 20");
    }

    #[test]
    fn insert_after_closepath_fails() {
        let mut e = editor("M 10 10 L 20 20 Z");
        assert_eq!(
            e.insert_after(CommandAddress::new(0, 2), CommandKind::LineTo, false),
            Err(EditError::ShapeClosed)
        );
        assert_eq!(
            e.insert_after(CommandAddress::new(0, 1), CommandKind::ClosePath, false),
            Err(EditError::UnsupportedSuccessor {
                kind: CommandKind::ClosePath
            })
        );
    }

    #[test]
    fn remove_rules() {
        let mut e = editor("M 10 10 L 20 20 Z M 50 50 Z");
        assert_eq!(
            e.remove(CommandAddress::new(0, 0)),
            Err(EditError::LeadingMoveto)
        );
        assert!(e.remove(CommandAddress::new(0, 1)).unwrap());
        assert_eq!(e.d(), "M 10 10 Z M 50 50 Z");
        // Removing the moveto leaves only a closepath: the shape goes.
        assert!(e.remove(CommandAddress::new(1, 0)).is_err());
        assert!(e.remove(CommandAddress::new(1, 1)).unwrap());
        assert!(e.remove(CommandAddress::new(1, 0)).unwrap());
        assert_eq!(e.path().len(), 1);
        assert_eq!(e.d(), "M 10 10 Z");
    }

    #[test]
    fn toggle_closed_and_arc_actions() {
        let mut e = editor("M 10 10 A 10 10 0 0 0 30 10");
        assert!(e.toggle_closed(0).unwrap());
        assert_eq!(e.d(), "M 10 10 A 10 10 0 0 0 30 10 Z");
        let arc = CommandAddress::new(0, 1);
        e.toggle_large_arc(arc).unwrap();
        e.toggle_sweep(arc).unwrap();
        e.rotate_arc(arc).unwrap();
        assert_eq!(e.d(), "M 10 10 A 10 10 5 1 1 30 10 Z");
        e.set_rotation(arc, 45.).unwrap();
        assert_eq!(e.d(), "M 10 10 A 10 10 45 1 1 30 10 Z");
        assert_eq!(
            e.toggle_sweep(CommandAddress::new(0, 0)),
            Err(EditError::NotAnArc {
                kind: CommandKind::MoveTo
            })
        );
        assert_eq!(
            e.toggle_sweep(CommandAddress::whole_shape(0)),
            Err(EditError::MissingCommand { shape: 0 })
        );
    }

    #[test]
    fn nudge_moves_relative_commands() {
        let mut e = editor("M 10 10 l 20 20");
        assert!(e.nudge(CommandAddress::new(0, 1), Vec2::new(1., 0.)).unwrap());
        assert_eq!(e.d(), "M 10 10 l 21 20");
    }

    #[test]
    fn add_shape_at_point() {
        let mut e = editor("M 10 10 L 20 20");
        let address = e.add_shape_at(Point::new(40.04, 50.06)).unwrap();
        assert_eq!(address, CommandAddress::new(1, 0));
        assert_eq!(e.d(), "M 10 10 L 20 20 M 40 50.1");
        assert_eq!(e.add_shape_at(Point::new(-5., 5.)), None);
        assert_eq!(e.path().len(), 2);
    }

    #[test]
    fn border_change_clears_history() {
        let mut e = editor("M 10 10 L 20 20");
        e.translate(Vec2::new(1., 1.));
        assert_eq!(e.history().len(), 3);
        e.set_border(Border::new(0., 0., 50., 50.));
        assert_eq!(e.history().entries().collect::<Vec<_>>(), ["M 11 11 L 21 21", ""]);
    }

    #[test]
    fn load_rejects_bad_data() {
        let mut e = editor("M 10 10 L 20 20");
        assert!(e.load("M 10 10 L").is_err());
        assert_eq!(e.d(), "M 10 10 L 20 20");
    }
}
