use armillary_core::{
    draw::Shape,
    geometry::Point,
    semantic::{ShapeKind, StateBox},
};

use super::Palette;

/// Returns the primitive shape drawn for `state`.
///
/// - [`ShapeKind::Rectangle`]: a rectangle covering the state, sky blue fill, black 1px stroke.
/// - [`ShapeKind::Circle`]: a circle of the palette's fixed radius whose bounding
///   square starts at the state's coordinates; fill and stroke stay at SVG defaults.
/// - [`ShapeKind::Other`]: any unrecognized tag is styled as a translucent dark blue
///   rectangle without stroke. The tag is never rejected.
pub fn shape_of(state: &StateBox, palette: &Palette) -> Shape {
    let top_left = state.coordinates();

    match state.shape() {
        ShapeKind::Rectangle => Shape::rectangle(top_left, state.size())
            .with_fill(palette.rectangle_fill())
            .with_stroke(palette.rectangle_stroke().clone()),
        ShapeKind::Circle => {
            let radius = palette.circle_radius();
            Shape::circle(top_left.add_point(Point::new(radius, radius)), radius)
        }
        ShapeKind::Other(_) => {
            Shape::rectangle(top_left, state.size()).with_fill(palette.other_fill())
        }
    }
}
