//! Stroke definitions.
//!
//! [`StrokeDefinition`] carries the stroke color and width of an outline or
//! line. Use the [`apply_stroke!`](crate::apply_stroke!) macro to set the
//! matching SVG attributes on an element.
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |

use crate::color::Color;

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use armillary_core::draw::StrokeDefinition;
/// use armillary_core::color::Color;
///
/// // Default stroke (black, 1px)
/// let stroke = StrokeDefinition::default();
/// assert_eq!(stroke.width(), 1.0);
///
/// let stroke = StrokeDefinition::new(Color::new("red").unwrap(), 2.0);
/// assert_eq!(stroke.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use armillary_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::default();
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0);
///
/// let line = armillary_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
    }};
}
