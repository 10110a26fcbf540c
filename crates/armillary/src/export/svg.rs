//! SVG export backend.
//!
//! [`DocumentAssembler`] stitches the rendered state tree, the shared arrow
//! marker and the transition lines into one [`Document`]. [`SvgExporter`]
//! writes that document to `<root name>.svg` in an output directory.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use svg::{Document, node::element::Definitions};
use tempfile::NamedTempFile;

use armillary_core::{
    draw::{ArrowMarker, Drawable},
    semantic::{StateBox, Transition},
};

use crate::{
    anchors::TextAnchors,
    export::{self, Exporter},
    render::{Palette, StateRenderer, render_transitions},
};

/// File extension of exported documents.
const EXTENSION: &str = "svg";

/// Builds complete SVG documents from a root state and its transitions.
pub struct DocumentAssembler<'a> {
    palette: &'a Palette,
    anchors: &'a dyn TextAnchors,
    marker: ArrowMarker,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(palette: &'a Palette, anchors: &'a dyn TextAnchors) -> Self {
        Self {
            palette,
            anchors,
            marker: ArrowMarker::default(),
        }
    }

    /// Assembles the document for `root`.
    ///
    /// The document is sized to the root state. It holds one `<defs>` block
    /// with the arrow marker, the root state's group, and then one line per
    /// transition so that arrowheads paint over the states.
    pub fn assemble(&self, root: &StateBox, transitions: &[Transition]) -> Document {
        let state_group = StateRenderer::new(self.palette, self.anchors).render(root);
        debug!(depth = state_group.depth(); "State tree rendered");

        let defs = Definitions::new().add(self.marker.render_to_svg());

        let mut doc = Document::new()
            .set("width", root.width())
            .set("height", root.height())
            .add(defs)
            .add(state_group.to_svg());

        for line in render_transitions(transitions, self.palette, &self.marker) {
            doc = doc.add(line.render_to_svg());
        }

        doc
    }
}

/// Writes assembled documents into an output directory.
pub struct SvgExporter<'a> {
    assembler: DocumentAssembler<'a>,
    output_dir: PathBuf,
}

impl<'a> SvgExporter<'a> {
    /// Creates an exporter writing into `output_dir`
    pub fn new(assembler: DocumentAssembler<'a>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            assembler,
            output_dir: output_dir.into(),
        }
    }

    /// Writes an SVG document to the specified file.
    ///
    /// The document is serialized up front and written to a temporary file
    /// next to `path`, which then replaces `path`. A failed write never leaves
    /// a partial document behind.
    pub fn write_document(&self, doc: &Document, path: &Path) -> Result<(), export::Error> {
        info!(file_name = path.display().to_string(); "Creating SVG file");

        let content = doc.to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut f = match NamedTempFile::new_in(dir) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = path.display().to_string(), err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = f.write_all(content.as_bytes()) {
            error!(file_name = path.display().to_string(), err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        if let Err(persist_err) = f.persist(path) {
            let err = persist_err.error;
            error!(file_name = path.display().to_string(), err:err; "Failed to persist SVG file");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for SvgExporter<'_> {
    fn export(&self, root: &StateBox, transitions: &[Transition]) -> Result<PathBuf, export::Error> {
        let path = self.output_dir.join(document_file_name(root)?);

        let doc = self.assembler.assemble(root, transitions);
        debug!("SVG document rendered");

        self.write_document(&doc, &path)?;
        Ok(path)
    }
}

/// Derives `<root name>.svg`.
///
/// # Errors
///
/// Returns [`export::Error::InvalidFileName`] when the name is empty, is `.`
/// or `..`, or contains a path separator or NUL byte.
pub fn document_file_name(root: &StateBox) -> Result<String, export::Error> {
    let name = root.name();
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(export::Error::InvalidFileName(name.to_string()));
    }

    Ok(format!("{name}.{EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use armillary_core::{
        geometry::{Point, Size},
        semantic::ShapeKind,
    };

    use super::*;
    use crate::anchors::StackedAnchors;

    fn root(name: &str) -> StateBox {
        StateBox::new(
            name,
            ShapeKind::Other("machine".to_string()),
            Point::new(0.0, 0.0),
            Size::new(400.0, 300.0),
        )
    }

    #[test]
    fn test_document_file_name() {
        assert_eq!(document_file_name(&root("Door")).unwrap(), "Door.svg");
        assert_eq!(
            document_file_name(&root("Traffic Light")).unwrap(),
            "Traffic Light.svg"
        );
    }

    #[test]
    fn test_document_file_name_rejects_paths() {
        for name in ["", ".", "..", "a/b", "a\\b", "nul\0byte"] {
            assert!(
                matches!(
                    document_file_name(&root(name)),
                    Err(export::Error::InvalidFileName(_))
                ),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_assemble_document_layout() {
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let assembler = DocumentAssembler::new(&palette, &anchors);
        let transitions = [
            Transition::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
            Transition::new(Point::new(10.0, 10.0), Point::new(20.0, 0.0)),
        ];

        let svg = assembler.assemble(&root("Door"), &transitions).to_string();

        assert!(svg.contains(r#"width="400""#));
        assert!(svg.contains(r#"height="300""#));
        assert_eq!(svg.matches("<defs").count(), 1);
        assert_eq!(svg.matches("<marker").count(), 1);
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("url(#arrow)").count(), 2);

        let defs = svg.find("<defs").unwrap();
        let group = svg.find("<g").unwrap();
        let line = svg.find("<line").unwrap();
        assert!(defs < group);
        assert!(group < line);
    }

    #[test]
    fn test_export_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let exporter = SvgExporter::new(DocumentAssembler::new(&palette, &anchors), dir.path());

        let path = exporter.export(&root("Door"), &[]).unwrap();

        assert_eq!(path, dir.path().join("Door.svg"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("Door"));
    }

    #[test]
    fn test_export_replaces_existing_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("Door.svg");
        fs::write(&stale, "stale content ".repeat(1000)).unwrap();

        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let exporter = SvgExporter::new(DocumentAssembler::new(&palette, &anchors), dir.path());

        let path = exporter.export(&root("Door"), &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
        assert!(!content.contains("stale content"));
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_export_surfaces_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let exporter = SvgExporter::new(
            DocumentAssembler::new(&palette, &anchors),
            dir.path().join("missing"),
        );

        let result = exporter.export(&root("Door"), &[]);
        assert!(matches!(result, Err(export::Error::Io(_))));
    }
}
