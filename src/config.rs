// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor settings.

use crate::common::MAX_PRECISION;
use crate::{ConfigError, History, Vec2};

/// Settings for an [`Editor`](crate::Editor).
///
/// The `with_*` methods validate their argument and return a new config.
///
/// ```
/// use pathmark::EditorConfig;
/// let config = EditorConfig::default().with_precision(2).unwrap();
/// assert_eq!(config.precision, 2);
/// assert!(EditorConfig::default().with_precision(11).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Decimal places kept when an edit moves a coordinate, `0..=10`.
    pub precision: u32,
    /// Number of states kept for undo.
    pub history_size: usize,
    /// Where a newly inserted command's end point goes, relative to the
    /// end of the command it follows. The negation is tried if this
    /// leaves the border.
    pub successor_offset: Vec2,
    /// Degrees added by one arc rotation step.
    pub rotation_step: f64,
    /// Decimal places for the point of a shape added by
    /// [`Editor::add_shape_at`](crate::Editor::add_shape_at).
    pub new_shape_precision: u32,
}

impl EditorConfig {
    /// Set the edit precision.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrecision`] above 10 decimal places.
    pub fn with_precision(self, precision: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            precision: check_precision(precision)?,
            ..self
        })
    }

    /// Set the number of undo states.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHistorySize`] for zero.
    pub fn with_history_size(self, history_size: usize) -> Result<Self, ConfigError> {
        if history_size == 0 {
            return Err(ConfigError::InvalidHistorySize);
        }
        Ok(Self {
            history_size,
            ..self
        })
    }

    /// Set the offset of inserted commands.
    #[must_use]
    pub fn with_successor_offset(self, successor_offset: Vec2) -> Self {
        Self {
            successor_offset,
            ..self
        }
    }

    /// Set the arc rotation step, in degrees.
    #[must_use]
    pub fn with_rotation_step(self, rotation_step: f64) -> Self {
        Self {
            rotation_step,
            ..self
        }
    }

    /// Set the precision of points added with a click.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrecision`] above 10 decimal places.
    pub fn with_new_shape_precision(self, precision: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            new_shape_precision: check_precision(precision)?,
            ..self
        })
    }

    /// Check every field, for configs built or deserialized field by field.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_precision(self.precision)?;
        check_precision(self.new_shape_precision)?;
        if self.history_size == 0 {
            return Err(ConfigError::InvalidHistorySize);
        }
        Ok(())
    }
}

fn check_precision(precision: u32) -> Result<u32, ConfigError> {
    if precision > MAX_PRECISION {
        return Err(ConfigError::InvalidPrecision(precision));
    }
    Ok(precision)
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            precision: 1,
            history_size: History::DEFAULT_SIZE,
            successor_offset: Vec2::new(10., 10.),
            rotation_step: 5.,
            new_shape_precision: 1,
        }
    }
}
