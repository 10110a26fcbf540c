//! Text anchor lookup.
//!
//! The renderer asks a [`TextAnchors`] implementation where each text field
//! of a state starts. [`StackedAnchors`] is the default: it honors anchors
//! pinned by the layout stage and otherwise stacks the fields as rows under
//! the state's top-left corner.

use log::trace;

use armillary_core::{
    geometry::Point,
    semantic::{StateBox, TextField},
};

use crate::config::AnchorConfig;

/// Resolves the insertion point of a state's text field.
pub trait TextAnchors {
    /// Returns the `(x, y)` point where `field` of `state` is drawn
    fn text_position_of(&self, state: &StateBox, field: TextField) -> Point;
}

/// Stacks text fields as rows starting at the state's top-left corner.
///
/// # Examples
///
/// ```
/// # use armillary::anchors::{StackedAnchors, TextAnchors};
/// # use armillary::config::AnchorConfig;
/// # use armillary::geometry::{Point, Size};
/// # use armillary::semantic::{ShapeKind, StateBox, TextField};
/// let anchors = StackedAnchors::new(&AnchorConfig::new(5.0, 30.0));
/// let state = StateBox::new("Idle", ShapeKind::Rectangle, Point::new(100.0, 40.0), Size::new(80.0, 90.0));
///
/// assert_eq!(anchors.text_position_of(&state, TextField::Name), Point::new(105.0, 70.0));
/// assert_eq!(anchors.text_position_of(&state, TextField::Entry), Point::new(105.0, 100.0));
/// ```
#[derive(Debug, Clone)]
pub struct StackedAnchors {
    padding: f32,
    line_height: f32,
}

impl StackedAnchors {
    pub fn new(config: &AnchorConfig) -> Self {
        Self {
            padding: config.padding(),
            line_height: config.line_height(),
        }
    }
}

impl Default for StackedAnchors {
    fn default() -> Self {
        Self::new(&AnchorConfig::default())
    }
}

impl TextAnchors for StackedAnchors {
    fn text_position_of(&self, state: &StateBox, field: TextField) -> Point {
        if let Some(pinned) = state.anchor(field) {
            trace!(state = state.name(), field = field.as_str(); "Using pinned text anchor");
            return pinned;
        }

        let row = field.row() as f32 + 1.0;
        state
            .coordinates()
            .add_point(Point::new(self.padding, self.line_height * row))
    }
}
