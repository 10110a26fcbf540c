//! Armillary - renders hierarchical statecharts to SVG.
//!
//! The input is a statechart whose geometry has already been resolved by a
//! layout stage: a tree of [`semantic::StateBox`] values with absolute
//! coordinates and sizes, plus a list of [`semantic::Transition`]s with
//! resolved endpoints. Armillary draws each state as a shape with its
//! labels, nests child states inside their parent's group, and connects
//! states with arrow-terminated lines.

pub mod anchors;
pub mod config;
pub mod export;
pub mod render;

mod error;

pub use armillary_core::{color, draw, geometry, semantic};

pub use error::ArmillaryError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use svg::Document;

use anchors::StackedAnchors;
use config::AppConfig;
use export::{
    Exporter,
    svg::{DocumentAssembler, SvgExporter},
};
use render::Palette;
use semantic::{StateBox, Transition};

/// Renders laid-out statecharts to SVG.
///
/// The palette and text anchors are built once from the configuration and
/// never change afterwards, so one renderer can be shared by any number of
/// render calls.
///
/// # Examples
///
/// ```rust,no_run
/// use armillary::{StatechartRenderer, config::AppConfig};
/// use armillary::geometry::{Point, Size};
/// use armillary::semantic::{ShapeKind, StateBox, Transition};
///
/// let root = StateBox::new("Door", ShapeKind::Other("machine".to_string()), Point::new(0.0, 0.0), Size::new(400.0, 200.0))
///     .with_child(StateBox::new("Closed", ShapeKind::Rectangle, Point::new(20.0, 50.0), Size::new(120.0, 80.0)))
///     .with_child(StateBox::new("Open", ShapeKind::Rectangle, Point::new(260.0, 50.0), Size::new(120.0, 80.0)))
///     .with_transition(Transition::new(Point::new(140.0, 90.0), Point::new(260.0, 90.0)));
///
/// let renderer = StatechartRenderer::new(AppConfig::default());
///
/// // In memory
/// let svg = renderer.render_svg(&root);
/// assert!(svg.contains("Closed"));
///
/// // Or persisted as `./Door.svg`
/// let path = renderer.export(&root, ".").expect("Failed to export");
/// ```
#[derive(Debug, Default)]
pub struct StatechartRenderer {
    palette: Palette,
    anchors: StackedAnchors,
}

impl StatechartRenderer {
    /// Create a new renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including style and anchor settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            palette: Palette::new(config.style()),
            anchors: StackedAnchors::new(config.anchors()),
        }
    }

    /// Returns a document assembler bound to this renderer's palette and anchors
    pub fn assembler(&self) -> DocumentAssembler<'_> {
        DocumentAssembler::new(&self.palette, &self.anchors)
    }

    /// Assemble the document for `root` and the transitions it owns.
    pub fn render_document(&self, root: &StateBox) -> Document {
        self.render_document_with(root, root.transitions())
    }

    /// Assemble the document for `root` and an explicit list of transitions.
    pub fn render_document_with(&self, root: &StateBox, transitions: &[Transition]) -> Document {
        info!(
            state = root.name(),
            transitions = transitions.len();
            "Rendering statechart"
        );
        self.assembler().assemble(root, transitions)
    }

    /// Render `root` and its transitions to an SVG string without touching the filesystem.
    pub fn render_svg(&self, root: &StateBox) -> String {
        self.render_document(root).to_string()
    }

    /// Render `root` and write it to `<root name>.svg` inside `output_dir`.
    ///
    /// The directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ArmillaryError` if the directory cannot be created, the file
    /// name derived from the root state is invalid, or writing fails.
    pub fn export(
        &self,
        root: &StateBox,
        output_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, ArmillaryError> {
        self.export_with(root, root.transitions(), output_dir)
    }

    /// Like [`StatechartRenderer::export`], with an explicit list of transitions.
    ///
    /// # Errors
    ///
    /// See [`StatechartRenderer::export`].
    pub fn export_with(
        &self,
        root: &StateBox,
        transitions: &[Transition],
        output_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, ArmillaryError> {
        let output_dir = output_dir.as_ref();
        if !output_dir.as_os_str().is_empty() && !output_dir.exists() {
            debug!(dir = output_dir.display().to_string(); "Creating output directory");
            fs::create_dir_all(output_dir)?;
        }

        let exporter = SvgExporter::new(self.assembler(), output_dir);
        let path = exporter.export(root, transitions)?;

        info!(output_file = path.display().to_string(); "SVG exported successfully");
        Ok(path)
    }
}
