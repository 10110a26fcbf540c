//! Shape primitives.
//!
//! A [`Shape`] is an axis-aligned rectangle or a circle together with its
//! optional fill and stroke. Absent fill or stroke leaves the SVG defaults in
//! place.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, StrokeDefinition, SvgNode},
    geometry::{Point, Size},
};

/// The fill of a shape: a color and the opacity it is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    color: Color,
    opacity: f32,
}

impl Fill {
    /// An opaque fill, using the color's own alpha
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: color.alpha(),
        }
    }

    /// A fill painted with an explicit opacity between 0.0 and 1.0
    pub fn translucent(color: Color, opacity: f32) -> Self {
        Self { color, opacity }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Geometry of a primitive shape in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    Rectangle { top_left: Point, size: Size },
    Circle { center: Point, radius: f32 },
}

/// A primitive shape record.
///
/// # Examples
///
/// ```
/// # use armillary_core::draw::{Drawable, Fill, Shape, ShapeGeometry, StrokeDefinition};
/// # use armillary_core::color::Color;
/// # use armillary_core::geometry::{Point, Size};
/// let rect = Shape::rectangle(Point::new(0.0, 0.0), Size::new(100.0, 50.0))
///     .with_fill(Fill::solid(Color::new("rgb(135, 206, 235)").unwrap()))
///     .with_stroke(StrokeDefinition::default());
///
/// assert!(matches!(rect.geometry(), ShapeGeometry::Rectangle { .. }));
/// let _node = rect.render_to_svg();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: ShapeGeometry,
    fill: Option<Fill>,
    stroke: Option<StrokeDefinition>,
}

impl Shape {
    /// An unstyled rectangle with its top-left corner at `top_left`
    pub fn rectangle(top_left: Point, size: Size) -> Self {
        Self {
            geometry: ShapeGeometry::Rectangle { top_left, size },
            fill: None,
            stroke: None,
        }
    }

    /// An unstyled circle
    pub fn circle(center: Point, radius: f32) -> Self {
        Self {
            geometry: ShapeGeometry::Circle { center, radius },
            fill: None,
            stroke: None,
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn geometry(&self) -> ShapeGeometry {
        self.geometry
    }

    pub fn fill(&self) -> Option<Fill> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }
}

impl Shape {
    /// Applies fill and stroke attributes to an SVG element, leaving SVG defaults when unset
    fn style<T: svg::Node>(&self, mut element: T) -> T {
        if let Some(fill) = self.fill {
            element.assign("fill", fill.color().to_string());
            element.assign("fill-opacity", fill.opacity());
        }

        if let Some(stroke) = &self.stroke {
            element.assign("stroke", stroke.color().to_string());
            element.assign("stroke-opacity", stroke.color().alpha());
            element.assign("stroke-width", stroke.width());
        }

        element
    }
}

impl Drawable for Shape {
    fn render_to_svg(&self) -> SvgNode {
        match self.geometry {
            ShapeGeometry::Rectangle { top_left, size } => {
                let rect = svg_element::Rectangle::new()
                    .set("x", top_left.x())
                    .set("y", top_left.y())
                    .set("width", size.width())
                    .set("height", size.height());
                Box::new(self.style(rect))
            }
            ShapeGeometry::Circle { center, radius } => {
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", radius);
                Box::new(self.style(circle))
            }
        }
    }
}
