//! Loading laid-out statecharts from TOML.
//!
//! The layout stage hands over a document with a `[root]` table holding the
//! state tree. Transitions can be owned by the root (`[[root.transitions]]`)
//! or listed at top level (`[[transitions]]`); both lists are rendered, root
//! transitions first.
//!
//! ```toml
//! [root]
//! name = "Door"
//! shape = "machine"
//! coordinates = [0.0, 0.0]
//! width = 400.0
//! height = 200.0
//!
//! [[root.children]]
//! name = "Closed"
//! shape = "rectangle"
//! coordinates = [20.0, 50.0]
//! width = 120.0
//! height = 80.0
//!
//! [[transitions]]
//! coordinates = [[140.0, 90.0], [260.0, 90.0]]
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use armillary::semantic::{StateBox, Transition};

use crate::error::CliError;

/// A laid-out statechart as read from disk.
#[derive(Debug, Deserialize)]
pub struct StatechartFile {
    root: StateBox,
    #[serde(default)]
    transitions: Vec<Transition>,
}

impl StatechartFile {
    /// Parses a statechart document.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ParseInput`] naming `path` if the TOML is malformed
    /// or does not describe a statechart.
    pub fn parse(source: &str, path: &Path) -> Result<Self, CliError> {
        let file: Self = toml::from_str(source).map_err(|err| CliError::ParseInput {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        debug!(
            root = file.root.name(),
            depth = file.root.depth(),
            transitions = file.transitions.len();
            "Statechart loaded"
        );
        Ok(file)
    }

    pub fn root(&self) -> &StateBox {
        &self.root
    }

    /// Returns the root-owned transitions followed by the top-level ones
    pub fn transitions(&self) -> Vec<Transition> {
        self.root
            .transitions()
            .iter()
            .chain(&self.transitions)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_merges_transitions() {
        let source = r#"
            [root]
            name = "Door"
            coordinates = [0.0, 0.0]
            width = 100.0
            height = 100.0

            [[root.transitions]]
            coordinates = [[1.0, 1.0], [2.0, 2.0]]

            [[transitions]]
            coordinates = [[3.0, 3.0], [4.0, 4.0]]
        "#;

        let file = StatechartFile::parse(source, Path::new("door.toml")).unwrap();
        let transitions = file.transitions();

        assert_eq!(file.root().name(), "Door");
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].start().x(), 1.0);
        assert_eq!(transitions[1].start().x(), 3.0);
    }

    #[test]
    fn test_parse_missing_root_is_error() {
        let result = StatechartFile::parse("transitions = []", Path::new("empty.toml"));
        assert!(matches!(result, Err(CliError::ParseInput { .. })));
    }
}
