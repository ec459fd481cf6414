// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Malformed path text is a [`ParseError`]. Calling an edit with arguments
//! that do not fit the document (a missing shape, a handle the command does
//! not have, appending to a closed shape) is an [`EditError`]. An edit that
//! would leave the viewport is neither: it is reported as `Ok(false)` by the
//! [`Editor`](crate::Editor).

use std::fmt;

use thiserror::Error;

use crate::{CommandKind, Handle};

/// What the lexer was looking for when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Expected {
    /// A command letter.
    Command,
    /// A number.
    Number,
    /// A `0` or `1` arc flag.
    Flag,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Command => "command",
            Self::Number => "number",
            Self::Flag => "flag",
        })
    }
}

/// Malformed or incomplete path data.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The text at `offset` does not match the grammar.
    #[error("invalid path at {offset}: expected {expected}")]
    Syntax {
        /// Byte offset into the input.
        offset: usize,
        /// What the lexer was looking for.
        expected: Expected,
    },

    /// The input ended in the middle of a command.
    #[error("invalid path at {offset}: expected {expected}, received end of input")]
    UnexpectedEnd {
        /// Byte offset into the input.
        offset: usize,
        /// What the lexer was looking for.
        expected: Expected,
    },

    /// A number literal too large to represent, such as `1e309`.
    #[error("invalid path at {offset}: number out of range")]
    NonFinite {
        /// Byte offset of the start of the literal.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset of the failure.
    pub fn offset(&self) -> usize {
        match self {
            Self::Syntax { offset, .. }
            | Self::UnexpectedEnd { offset, .. }
            | Self::NonFinite { offset } => *offset,
        }
    }
}

/// An edit that does not apply to the document it was called on.
///
/// These indicate a bug in the caller rather than bad user input.
#[derive(Error, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum EditError {
    /// Commands cannot be appended to or inserted after a closepath.
    #[error("cannot add commands to a closed shape")]
    ShapeClosed,

    /// The shape index does not exist.
    #[error("shape {index} out of range (shapes: {len})")]
    ShapeOutOfRange {
        /// Requested shape index.
        index: usize,
        /// Number of shapes.
        len: usize,
    },

    /// The command index does not exist in the shape.
    #[error("command {index} out of range in shape {shape} (commands: {len})")]
    CommandOutOfRange {
        /// Shape index.
        shape: usize,
        /// Requested command index.
        index: usize,
        /// Number of commands in the shape.
        len: usize,
    },

    /// The operation needs a command but the address names a whole shape.
    #[error("shape {shape} was addressed where a command is required")]
    MissingCommand {
        /// Shape index.
        shape: usize,
    },

    /// The command does not own the requested handle.
    #[error("{kind} has no {handle} handle")]
    UnsupportedHandle {
        /// The command kind.
        kind: CommandKind,
        /// The requested handle.
        handle: Handle,
    },

    /// An arc operation was requested on another kind of command.
    #[error("{kind} is not an elliptical arc")]
    NotAnArc {
        /// The command kind.
        kind: CommandKind,
    },

    /// The leading moveto of a shape cannot be deleted while the shape has
    /// other commands.
    #[error("cannot delete the moveto that starts a non-empty shape")]
    LeadingMoveto,

    /// No successor can be synthesized for this command kind.
    #[error("cannot insert a {kind} after another command")]
    UnsupportedSuccessor {
        /// The requested kind.
        kind: CommandKind,
    },

    /// A command address string is not of the form `shape-N` or
    /// `shape-N-c-M`.
    #[error("invalid command address {0:?}")]
    InvalidAddress(String),

    /// A stored path could not be parsed back.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Invalid editor configuration.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Precision must be between 0 and 10 decimal places.
    #[error("invalid precision {0}: expected an integer in 0..=10")]
    InvalidPrecision(u32),

    /// The history must hold at least one entry.
    #[error("history size must be at least 1")]
    InvalidHistorySize,

    /// The view box is not four numbers with a non-negative size.
    #[error("invalid view box {0:?}: expected \"min-x min-y width height\"")]
    InvalidViewBox(String),
}
