//! Text runs for state labels.
//!
//! A [`TextRun`] is one SVG `<text>` element: content, an insertion point,
//! a [`TextDefinition`] style, and an explicit `textLength`. Run lengths are
//! computed by the caller from a fixed per-character advance, so label
//! alignment never depends on the fonts available where the SVG is viewed.
//!
//! # Quick Start
//!
//! ```
//! # use armillary_core::draw::{Drawable, TextDefinition, TextRun};
//! # use armillary_core::geometry::Point;
//! let bold = TextDefinition::new().with_font_weight(armillary_core::draw::FontWeight::Bold);
//! let run = TextRun::new(&bold, "Idle", Point::new(5.0, 30.0), 60.0);
//!
//! assert_eq!(run.content(), "Idle");
//! assert_eq!(run.length(), 60.0);
//! let _node = run.render_to_svg();
//! ```

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, SvgNode},
    geometry::Point,
};

/// Slant of a text run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    /// Maps to SVG `font-style="oblique"`
    Oblique,
}

impl FontStyle {
    /// Returns the SVG font-style value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Oblique => "oblique",
        }
    }
}

/// Weight of a text run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG font-weight value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Defines the visual style for text runs.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `25` |
/// | Font style | [`FontStyle::Normal`] |
/// | Font weight | [`FontWeight::Normal`] |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    font_style: FontStyle,
    font_weight: FontWeight,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font family (e.g., "Arial", "monospace")
    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    /// Sets the font size in points
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 25,
            font_style: FontStyle::default(),
            font_weight: FontWeight::default(),
        }
    }
}

/// A single styled run of text with an explicit rendered length.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    position: Point,
    length: f32,
}

impl<'a> TextRun<'a> {
    /// Creates a new text run.
    ///
    /// # Arguments
    ///
    /// * `definition` - The [`TextDefinition`] controlling the run's appearance.
    /// * `content` - The text to render.
    /// * `position` - The insertion point (left end of the baseline).
    /// * `length` - The rendered width of the run, emitted as `textLength`.
    pub fn new(
        definition: &'a TextDefinition,
        content: &'a str,
        position: Point,
        length: f32,
    ) -> Self {
        Self {
            definition,
            content,
            position,
            length,
        }
    }

    pub fn definition(&self) -> &TextDefinition {
        self.definition
    }

    pub fn content(&self) -> &str {
        self.content
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn length(&self) -> f32 {
        self.length
    }
}

impl Drawable for TextRun<'_> {
    fn render_to_svg(&self) -> SvgNode {
        let mut text = svg_element::Text::new(self.content)
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("textLength", self.length);

        if self.definition.font_style() != FontStyle::Normal {
            text = text.set("font-style", self.definition.font_style().to_svg_value());
        }

        if self.definition.font_weight() != FontWeight::Normal {
            text = text.set("font-weight", self.definition.font_weight().to_svg_value());
        }

        Box::new(text)
    }
}
