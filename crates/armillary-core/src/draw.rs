//! Drawing primitives for statechart diagrams.
//!
//! Each primitive is a plain value describing exactly what will be emitted,
//! so rendered diagrams can be inspected before they are turned into SVG
//! nodes through the [`Drawable`] trait.

mod arrow;
mod shape;
mod stroke;
mod text;

pub use arrow::{ArrowLine, ArrowMarker};
pub use shape::{Fill, Shape, ShapeGeometry};
pub use stroke::StrokeDefinition;
pub use text::{FontStyle, FontWeight, TextDefinition, TextRun};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// A primitive that can be converted into a single SVG node.
pub trait Drawable {
    /// Renders this primitive at its own absolute position.
    fn render_to_svg(&self) -> SvgNode;
}
