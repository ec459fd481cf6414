// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An interactive editing model for SVG path data.
//!
//! The pathmark library parses the `d` attribute of an SVG `<path>` into
//! [`Shape`]s of resolved [`Command`]s, lets a host drag and edit their
//! points, and writes the result back out. Relative commands stay relative,
//! every edit is checked against a [`Border`], and an [`Editor`] keeps a
//! bounded undo [`History`] of the serialized document.
//!
//! # Examples
//!
//! Parsing and inspecting a path:
//! ```
//! use pathmark::{Path, Point};
//!
//! let path = Path::parse("M0 0C10 0 10 10 20 10S30 20 40 10").unwrap();
//! let shape = &path.shapes()[0];
//! assert_eq!(shape.len(), 3);
//! assert_eq!(shape.end(), Point::new(40.0, 10.0));
//! // Smooth curves keep their shorthand; the implied control point is derived.
//! assert_eq!(path.to_string(), "M 0 0 C 10 0 10 10 20 10 S 30 20 40 10");
//! ```
//!
//! Editing with a border and undo:
//! ```
//! use pathmark::{Border, CommandAddress, CommandKind, Editor, EditorConfig};
//!
//! let mut editor = Editor::with_border(EditorConfig::default(), Border::new(0.0, 0.0, 100.0, 100.0));
//! editor.load("M 10 10 L 20 20").unwrap();
//! editor.insert_after(CommandAddress::new(0, 1), CommandKind::LineTo, false).unwrap();
//! editor.toggle_closed(0).unwrap();
//! assert_eq!(editor.d(), "M 10 10 L 20 20 L 30 30 Z");
//! assert_eq!(editor.undo().unwrap(), "M 10 10 L 20 20 L 30 30");
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `mint`: Enable `From`/`Into` conversion of pathmark and [mint][] types, enabling
//!   interoperability with other graphics libraries.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the geometry,
//!   token and configuration types.
//!
//! # Logging
//!
//! Rejected input, border rollbacks and history changes are reported through
//! [`tracing`] at `warn`, `debug` and `trace` level. No subscriber is
//! installed by this crate.
//!
//! [mint]: https://crates.io/crates/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![allow(
    clippy::many_single_char_names,
    clippy::float_cmp,
    reason = "coordinates are compared exactly where they are copied, not computed"
)]

// Only used by the integration tests.
#[cfg(test)]
use rand as _;

mod arc;
mod border;
mod command;
pub mod common;
mod config;
mod cubic;
mod editor;
mod error;
mod history;
mod lexer;
mod line;
mod path;
mod point;
mod quad;
mod resolve;
mod shape;
mod token;
mod vec2;

pub use crate::arc::*;
pub use crate::border::*;
pub use crate::command::*;
pub use crate::config::*;
pub use crate::cubic::*;
pub use crate::editor::*;
pub use crate::error::*;
pub use crate::history::*;
pub use crate::lexer::*;
pub use crate::line::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::quad::*;
pub use crate::resolve::*;
pub use crate::shape::*;
pub use crate::token::*;
pub use crate::vec2::*;
