// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editing viewport.

use std::fmt;
use std::str::FromStr;

use crate::{ConfigError, Point};

/// The editing viewport, as four corner points in the path's coordinate
/// space.
///
/// Edits that would move geometry outside of it are rejected. Containment is
/// decided by `top_left` and `bottom_right`; the other two corners are kept
/// for hosts that map a rotated or skewed screen rectangle back into path
/// space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Border {
    /// The top left corner.
    pub top_left: Point,
    /// The top right corner.
    pub top_right: Point,
    /// The bottom left corner.
    pub bottom_left: Point,
    /// The bottom right corner.
    pub bottom_right: Point,
}

impl Border {
    /// A border from minimum and maximum coordinates.
    ///
    /// The result is normalized so `top_left` holds the minimum coordinates.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        Self {
            top_left: Point::new(x0, y0),
            top_right: Point::new(x1, y0),
            bottom_left: Point::new(x0, y1),
            bottom_right: Point::new(x1, y1),
        }
    }

    /// A border covering the given view box.
    pub fn from_view_box(view_box: ViewBox) -> Self {
        Self::new(
            view_box.min_x,
            view_box.min_y,
            view_box.min_x + view_box.width,
            view_box.min_y + view_box.height,
        )
    }

    /// A border that accepts every finite point.
    pub fn unbounded() -> Self {
        Self::new(f64::MIN, f64::MIN, f64::MAX, f64::MAX)
    }

    /// Width of the border.
    #[inline]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    /// Height of the border.
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    /// Whether `pt` lies inside the border, edges included.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.top_left.x
            && pt.y >= self.top_left.y
            && pt.x <= self.bottom_right.x
            && pt.y <= self.bottom_right.y
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl From<ViewBox> for Border {
    fn from(view_box: ViewBox) -> Self {
        Self::from_view_box(view_box)
    }
}

/// The `viewBox` of the editing canvas: `min-x min-y width height`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Width, never negative.
    pub width: f64,
    /// Height, never negative.
    pub height: f64,
}

impl ViewBox {
    /// Create a new view box.
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl FromStr for ViewBox {
    type Err = ConfigError;

    /// Parse the attribute syntax: four numbers separated by whitespace
    /// and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidViewBox(s.to_owned());
        let mut values = [0f64; 4];
        let mut parts = s
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .filter(|part| !part.is_empty());
        for value in &mut values {
            let part = parts.next().ok_or_else(invalid)?;
            *value = part.parse().map_err(|_| invalid())?;
            if !value.is_finite() {
                return Err(invalid());
            }
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        let [min_x, min_y, width, height] = values;
        if width < 0. || height < 0. {
            return Err(invalid());
        }
        Ok(Self::new(min_x, min_y, width, height))
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_includes_edges() {
        let border = Border::new(0., 0., 100., 50.);
        assert!(border.contains(Point::new(0., 0.)));
        assert!(border.contains(Point::new(100., 50.)));
        assert!(border.contains(Point::new(42., 7.)));
        assert!(!border.contains(Point::new(-0.1, 10.)));
        assert!(!border.contains(Point::new(10., 50.1)));
    }

    #[test]
    fn normalized_corners() {
        let border = Border::new(10., 20., -10., -20.);
        assert_eq!(border.top_left, Point::new(-10., -20.));
        assert_eq!(border.bottom_right, Point::new(10., 20.));
        assert_eq!(border.top_right, Point::new(10., -20.));
        assert_eq!(border.bottom_left, Point::new(-10., 20.));
    }

    #[test]
    fn view_box_parsing() {
        let vb: ViewBox = "0 0 100 50".parse().unwrap();
        assert_eq!(vb, ViewBox::new(0., 0., 100., 50.));
        let vb: ViewBox = "-5.5,10 20 30".parse().unwrap();
        assert_eq!(vb, ViewBox::new(-5.5, 10., 20., 30.));
        assert_eq!(vb.to_string(), "-5.5 10 20 30");

        assert!("0 0 100".parse::<ViewBox>().is_err());
        assert!("0 0 100 50 3".parse::<ViewBox>().is_err());
        assert!("0 0 -1 50".parse::<ViewBox>().is_err());
        assert!("a b c d".parse::<ViewBox>().is_err());
    }

    #[test]
    fn border_from_view_box() {
        let border = Border::from(ViewBox::new(-10., -10., 20., 40.));
        assert_eq!(border.width(), 20.);
        assert_eq!(border.height(), 40.);
        assert!(border.contains(Point::new(10., 30.)));
        assert!(!border.contains(Point::new(10., 30.5)));
    }
}
