//! Laid-out statechart model.
//!
//! The types here are produced by the layout stage with every coordinate
//! already resolved. Rendering only reads them.
//!
//! - [`StateBox`] - A state node, either atomic or composite, with its nested children
//! - [`ShapeKind`] - The closed set of shape tags a state can carry
//! - [`Transition`] - A directed edge between two canvas points
//! - [`TextField`] - Named text slots of a state (name, entry, exit, do)
//!
//! Children are owned by their parent, so the tree cannot contain cycles.
//!
//! # Examples
//!
//! ```
//! # use armillary_core::semantic::{ShapeKind, StateBox, Transition};
//! # use armillary_core::geometry::{Point, Size};
//! let idle = StateBox::new("Idle", ShapeKind::Rectangle, Point::new(20.0, 60.0), Size::new(120.0, 60.0));
//! let busy = StateBox::new("Busy", ShapeKind::Rectangle, Point::new(220.0, 60.0), Size::new(120.0, 60.0))
//!     .with_entry("start()");
//!
//! let machine = StateBox::new("Machine", ShapeKind::Other("region".to_string()), Point::new(0.0, 0.0), Size::new(400.0, 200.0))
//!     .with_child(idle)
//!     .with_child(busy)
//!     .with_transition(Transition::new(Point::new(140.0, 90.0), Point::new(220.0, 90.0)));
//!
//! assert_eq!(machine.children().len(), 2);
//! assert_eq!(machine.transitions().len(), 1);
//! ```

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::Deserialize;

use crate::geometry::{Point, Size};

/// The shape tag of a state.
///
/// Parsing a tag never fails: `"rectangle"` and `"circle"` map to their
/// variants and every other tag is kept verbatim in [`ShapeKind::Other`],
/// which renders with the translucent fallback styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Other(String),
}

impl ShapeKind {
    /// Returns the tag string for this kind
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for ShapeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "rectangle" => Self::Rectangle,
            "circle" => Self::Circle,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ShapeKind {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named text slots of a state.
///
/// Only [`TextField::Name`] and [`TextField::Entry`] are drawn today;
/// exit and do activities are carried by the model without being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum TextField {
    Name,
    Entry,
    Exit,
    Do,
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "entry" => Ok(Self::Entry),
            "exit" => Ok(Self::Exit),
            "do" => Ok(Self::Do),
            _ => Err(format!(
                "invalid text field `{s}`, valid values: name, entry, exit, do"
            )),
        }
    }
}

impl TryFrom<String> for TextField {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TextField {
    /// Returns the field key as used by the layout stage
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Entry => "entry",
            Self::Exit => "exit",
            Self::Do => "do",
        }
    }

    /// Returns the zero-based row the field occupies inside its state
    pub fn row(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Entry => 1,
            Self::Exit => 2,
            Self::Do => 3,
        }
    }
}

/// A directed edge between two resolved canvas points.
///
/// Deserializes from `coordinates = [[x1, y1], [x2, y2]]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transition {
    coordinates: (Point, Point),
}

impl Transition {
    /// Creates a transition from `start` to `end`
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            coordinates: (start, end),
        }
    }

    /// Returns the ordered `(start, end)` pair
    pub fn coordinates(&self) -> (Point, Point) {
        self.coordinates
    }

    pub fn start(&self) -> Point {
        self.coordinates.0
    }

    pub fn end(&self) -> Point {
        self.coordinates.1
    }
}

/// A state node with fully resolved geometry.
///
/// `coordinates` is the top-left corner of the state on the canvas. A
/// composite state owns its children in drawing order; the root state may
/// additionally own the diagram's transitions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateBox {
    name: String,
    #[serde(default)]
    shape: ShapeKind,
    coordinates: Point,
    width: f32,
    height: f32,
    #[serde(default)]
    parallel_states: bool,
    #[serde(default)]
    entry: String,
    #[serde(default)]
    exit: String,
    #[serde(default, rename = "do")]
    do_activity: String,
    #[serde(default)]
    anchors: BTreeMap<TextField, Point>,
    #[serde(default)]
    children: Vec<StateBox>,
    #[serde(default)]
    transitions: Vec<Transition>,
}

impl StateBox {
    /// Creates an atomic, non-parallel state with no activities.
    ///
    /// # Arguments
    ///
    /// * `name` - The state name, also used to derive the output file name of a root state
    /// * `shape` - The shape tag
    /// * `coordinates` - Top-left corner on the canvas
    /// * `size` - Width and height of the state
    pub fn new(name: impl Into<String>, shape: ShapeKind, coordinates: Point, size: Size) -> Self {
        Self {
            name: name.into(),
            shape,
            coordinates,
            width: size.width(),
            height: size.height(),
            parallel_states: false,
            entry: String::new(),
            exit: String::new(),
            do_activity: String::new(),
            anchors: BTreeMap::new(),
            children: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Marks this state as a parallel composite
    pub fn with_parallel_states(mut self, parallel_states: bool) -> Self {
        self.parallel_states = parallel_states;
        self
    }

    /// Sets the entry activity
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    /// Sets the exit activity
    pub fn with_exit(mut self, exit: impl Into<String>) -> Self {
        self.exit = exit.into();
        self
    }

    /// Sets the do activity
    pub fn with_do_activity(mut self, do_activity: impl Into<String>) -> Self {
        self.do_activity = do_activity.into();
        self
    }

    /// Pins the text anchor of `field` to an explicit canvas point
    pub fn with_anchor(mut self, field: TextField, anchor: Point) -> Self {
        self.anchors.insert(field, anchor);
        self
    }

    /// Appends a child state
    pub fn with_child(mut self, child: StateBox) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a transition owned by this state
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    /// Returns the top-left corner of the state
    pub fn coordinates(&self) -> Point {
        self.coordinates
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn parallel_states(&self) -> bool {
        self.parallel_states
    }

    /// Returns the entry activity, empty when the state has none
    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn exit(&self) -> &str {
        &self.exit
    }

    pub fn do_activity(&self) -> &str {
        &self.do_activity
    }

    /// Returns the explicit anchor for `field`, if the layout stage pinned one
    pub fn anchor(&self, field: TextField) -> Option<Point> {
        self.anchors.get(&field).copied()
    }

    pub fn children(&self) -> &[StateBox] {
        &self.children
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the depth of the subtree rooted at this state (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(StateBox::depth)
            .max()
            .unwrap_or_default()
    }
}
