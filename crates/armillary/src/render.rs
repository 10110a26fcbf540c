//! Rendering of laid-out statecharts into drawing primitives.
//!
//! - [`shape_of`] maps one state to its [`Shape`](armillary_core::draw::Shape)
//! - [`StateRenderer`] composes a state and its descendants into a [`StateGroup`]
//! - [`render_transitions`] maps transitions to arrow-terminated lines
//!
//! All renderers are total: no input is rejected and nothing is mutated.
//! Styles and metrics come from an immutable [`Palette`].

mod shape;
mod state;
mod transition;

pub use shape::shape_of;
pub use state::{StateGroup, StateRenderer};
pub use transition::render_transitions;

use armillary_core::{
    color::Color,
    draw::{Fill, FontStyle, FontWeight, StrokeDefinition, TextDefinition},
};

use crate::config::StyleConfig;

/// Fixed colors, fonts and metrics used by every renderer.
///
/// | Element | Style |
/// |---------|-------|
/// | Rectangle state | sky blue fill, black 1px stroke |
/// | Circle state | SVG defaults |
/// | Other state | `#044B94` fill at opacity 0.4, no stroke |
/// | Transition | black 1px stroke |
/// | Labels | normal, italic (oblique) and bold runs of one font |
#[derive(Debug, Clone)]
pub struct Palette {
    char_width: f32,
    circle_radius: f32,
    normal_text: TextDefinition,
    italic_text: TextDefinition,
    bold_text: TextDefinition,
    rectangle_fill: Fill,
    rectangle_stroke: StrokeDefinition,
    other_fill: Fill,
    transition_stroke: StrokeDefinition,
}

impl Palette {
    /// Builds a palette from the configurable style settings
    pub fn new(style: &StyleConfig) -> Self {
        let normal_text = TextDefinition::new()
            .with_font_family(style.font_family())
            .with_font_size(style.font_size());

        Self {
            char_width: style.char_width(),
            circle_radius: style.circle_radius(),
            italic_text: normal_text.clone().with_font_style(FontStyle::Oblique),
            bold_text: normal_text.clone().with_font_weight(FontWeight::Bold),
            normal_text,
            rectangle_fill: Fill::solid(
                Color::new("rgb(135, 206, 235)").expect("sky blue is a valid CSS color"),
            ),
            rectangle_stroke: StrokeDefinition::default(),
            other_fill: Fill::translucent(
                Color::new("#044B94").expect("'#044B94' is a valid CSS color"),
                0.4,
            ),
            transition_stroke: StrokeDefinition::default(),
        }
    }

    /// Horizontal advance of one character
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    /// Width of a run of `chars` characters
    pub fn advance(&self, chars: usize) -> f32 {
        chars as f32 * self.char_width
    }

    pub fn circle_radius(&self) -> f32 {
        self.circle_radius
    }

    pub fn normal_text(&self) -> &TextDefinition {
        &self.normal_text
    }

    pub fn italic_text(&self) -> &TextDefinition {
        &self.italic_text
    }

    pub fn bold_text(&self) -> &TextDefinition {
        &self.bold_text
    }

    pub fn rectangle_fill(&self) -> Fill {
        self.rectangle_fill
    }

    pub fn rectangle_stroke(&self) -> &StrokeDefinition {
        &self.rectangle_stroke
    }

    pub fn other_fill(&self) -> Fill {
        self.other_fill
    }

    pub fn transition_stroke(&self) -> &StrokeDefinition {
        &self.transition_stroke
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(&StyleConfig::default())
    }
}
