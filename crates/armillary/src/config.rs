//! Configuration types for Armillary rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML by the CLI. Every key is optional and falls back to the fixed
//! defaults below.
//!
//! - [`AppConfig`] - Top-level configuration combining style and anchor settings.
//! - [`StyleConfig`] - Font and metric settings: character advance, circle radius, font.
//! - [`AnchorConfig`] - Placement of text rows inside a state when the layout stage
//!   does not pin them.
//!
//! # Example
//!
//! ```
//! # use armillary::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().char_width(), 15.0);
//! assert!(config.style().validate().is_ok());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Text anchor configuration section.
    #[serde(default)]
    anchors: AnchorConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and anchor configurations.
    pub fn new(style: StyleConfig, anchors: AnchorConfig) -> Self {
        Self { style, anchors }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the text anchor configuration.
    pub fn anchors(&self) -> &AnchorConfig {
        &self.anchors
    }
}

/// Font and metric settings.
///
/// `char_width` is the fixed horizontal advance of one character. Every text
/// run width and every label offset is a multiple of it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    char_width: f32,
    circle_radius: f32,
    font_family: String,
    font_size: u16,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    ///
    /// # Arguments
    ///
    /// * `char_width` - Horizontal advance of one character.
    /// * `circle_radius` - Radius of circle-shaped states.
    /// * `font_family` - Font family of every label.
    /// * `font_size` - Font size of every label.
    pub fn new(char_width: f32, circle_radius: f32, font_family: &str, font_size: u16) -> Self {
        Self {
            char_width,
            circle_radius,
            font_family: font_family.to_string(),
            font_size,
        }
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn circle_radius(&self) -> f32 {
        self.circle_radius
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Checks that the metrics describe a drawable style.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending key.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.char_width.is_finite() && self.char_width > 0.0) {
            return Err(format!(
                "style.char_width must be a positive number, got {}",
                self.char_width
            ));
        }
        if !(self.circle_radius.is_finite() && self.circle_radius > 0.0) {
            return Err(format!(
                "style.circle_radius must be a positive number, got {}",
                self.circle_radius
            ));
        }
        if self.font_family.trim().is_empty() {
            return Err("style.font_family must not be empty".to_string());
        }
        if self.font_size == 0 {
            return Err("style.font_size must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            char_width: 15.0,
            circle_radius: 10.0,
            font_family: "Arial".to_string(),
            font_size: 25,
        }
    }
}

/// Placement of text rows inside a state.
///
/// Rows are stacked downward from the state's top-left corner: the name on
/// the first row, then entry, exit and do.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    padding: f32,
    line_height: f32,
}

impl AnchorConfig {
    /// Creates a new [`AnchorConfig`] with the given left padding and row height.
    pub fn new(padding: f32, line_height: f32) -> Self {
        Self {
            padding,
            line_height,
        }
    }

    /// Horizontal distance from the state's left edge to every label
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Vertical distance between consecutive label baselines
    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            padding: 5.0,
            line_height: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_approx_eq!(f32, config.style().char_width(), 15.0);
        assert_approx_eq!(f32, config.style().circle_radius(), 10.0);
        assert_eq!(config.style().font_family(), "Arial");
        assert_eq!(config.style().font_size(), 25);
        assert_approx_eq!(f32, config.anchors().padding(), 5.0);
        assert_approx_eq!(f32, config.anchors().line_height(), 30.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            char_width = 12.0

            [anchors]
            line_height = 24.0
            "#,
        )
        .unwrap();

        assert_approx_eq!(f32, config.style().char_width(), 12.0);
        assert_approx_eq!(f32, config.style().circle_radius(), 10.0);
        assert_eq!(config.style().font_family(), "Arial");
        assert_approx_eq!(f32, config.anchors().padding(), 5.0);
        assert_approx_eq!(f32, config.anchors().line_height(), 24.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_approx_eq!(f32, config.style().char_width(), 15.0);
    }

    #[test]
    fn test_validate_rejects_bad_metrics() {
        assert!(StyleConfig::new(0.0, 10.0, "Arial", 25).validate().is_err());
        assert!(StyleConfig::new(f32::NAN, 10.0, "Arial", 25).validate().is_err());
        assert!(StyleConfig::new(15.0, -1.0, "Arial", 25).validate().is_err());
        assert!(StyleConfig::new(15.0, 10.0, " ", 25).validate().is_err());
        assert!(StyleConfig::new(15.0, 10.0, "Arial", 0).validate().is_err());
        assert!(StyleConfig::default().validate().is_ok());
    }
}
