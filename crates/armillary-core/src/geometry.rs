//! Geometric primitives for diagram rendering.
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Armillary uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! All geometry reaching the renderer has already been resolved by the layout
//! stage; nothing in this crate validates or mutates it.

use serde::Deserialize;

/// A 2D point representing a position in canvas space.
///
/// Points deserialize from a two-element `[x, y]` array.
///
/// # Examples
///
/// ```
/// # use armillary_core::geometry::Point;
/// let anchor = Point::new(10.0, 20.0);
/// let shifted = anchor.add_x(15.0);
/// assert_eq!(shifted.x(), 25.0);
/// assert_eq!(shifted.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "[f32; 2]")]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns a new point shifted horizontally by `dx`
    pub fn add_x(self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y,
        }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}
