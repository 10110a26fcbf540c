//! Transition arrows.
//!
//! Every transition is drawn as a straight [`ArrowLine`] whose end refers to
//! one shared [`ArrowMarker`] defined once in the document's `<defs>`.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, StrokeDefinition, SvgNode},
    geometry::{Point, Size},
};

/// A reusable arrowhead marker.
///
/// The default marker is a small triangle with id `arrow`, reference point
/// `(8, 3)`, automatic orientation and a 30x20 marker viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowMarker {
    id: String,
    reference: Point,
    size: Size,
    path: String,
}

impl ArrowMarker {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the `url(#id)` reference used by `marker-end`
    pub fn url(&self) -> String {
        format!("url(#{})", self.id)
    }

    /// Returns the point of the marker aligned with the line end
    pub fn reference(&self) -> Point {
        self.reference
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Default for ArrowMarker {
    fn default() -> Self {
        Self {
            id: "arrow".to_string(),
            reference: Point::new(8.0, 3.0),
            size: Size::new(30.0, 20.0),
            path: "M0,0 L0,6 L9,3 z".to_string(),
        }
    }
}

impl Drawable for ArrowMarker {
    fn render_to_svg(&self) -> SvgNode {
        let marker = svg_element::Marker::new()
            .set("id", self.id.as_str())
            .set("refX", self.reference.x())
            .set("refY", self.reference.y())
            .set("orient", "auto")
            .set("markerWidth", self.size.width())
            .set("markerHeight", self.size.height())
            .add(svg_element::Path::new().set("d", self.path.as_str()));

        Box::new(marker)
    }
}

/// A straight line between two points ending in an arrowhead marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowLine {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
    marker_url: String,
}

impl ArrowLine {
    /// Creates a line from `start` to `end` terminated by `marker`
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition, marker: &ArrowMarker) -> Self {
        Self {
            start,
            end,
            stroke,
            marker_url: marker.url(),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns the `marker-end` reference, e.g. `url(#arrow)`
    pub fn marker_url(&self) -> &str {
        &self.marker_url
    }
}

impl Drawable for ArrowLine {
    fn render_to_svg(&self) -> SvgNode {
        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y())
            .set("marker-end", self.marker_url.as_str());

        Box::new(apply_stroke!(line, &self.stroke))
    }
}
