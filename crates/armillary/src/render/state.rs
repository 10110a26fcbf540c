//! Recursive composition of a state and its descendants.
//!
//! Draw order inside one state's group is fixed: the shape, the name runs,
//! the entry runs, then one nested group per child in child order. Later
//! items paint over earlier ones, so children always appear inside their
//! parent.

use log::debug;
use svg::node::element as svg_element;

use armillary_core::{
    draw::{Drawable, Shape, TextRun},
    semantic::{StateBox, TextField},
};

use super::{Palette, shape::shape_of};
use crate::anchors::TextAnchors;

const PARALLEL_STEREOTYPE: &str = "<<parallel>>";
const PARALLEL_STEREOTYPE_ADVANCE: usize = 13;
const PARALLEL_NAME_OFFSET: usize = 14;

const ENTRY_PREFIX: &str = "entry / ";
const ENTRY_PREFIX_ADVANCE: usize = 8;
const ENTRY_TEXT_OFFSET: usize = 9;

/// The rendered form of one state: its shape, labels and nested child groups.
///
/// The tree of groups mirrors the tree of states one to one.
#[derive(Debug, Clone, PartialEq)]
pub struct StateGroup<'a> {
    shape: Shape,
    name_runs: Vec<TextRun<'a>>,
    entry_runs: Vec<TextRun<'a>>,
    children: Vec<StateGroup<'a>>,
}

impl<'a> StateGroup<'a> {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the name label: one bold run, or the parallel stereotype followed by it
    pub fn name_runs(&self) -> &[TextRun<'a>] {
        &self.name_runs
    }

    /// Returns the entry label runs, empty when the state has no entry activity
    pub fn entry_runs(&self) -> &[TextRun<'a>] {
        &self.entry_runs
    }

    pub fn children(&self) -> &[StateGroup<'a>] {
        &self.children
    }

    /// Returns the nesting depth of this group (a group without children has depth 1)
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(StateGroup::depth)
            .max()
            .unwrap_or_default()
    }

    /// Converts this group and its descendants into an SVG `<g>` element
    pub fn to_svg(&self) -> svg_element::Group {
        let mut group = svg_element::Group::new().add(self.shape.render_to_svg());

        for run in self.name_runs.iter().chain(&self.entry_runs) {
            group = group.add(run.render_to_svg());
        }

        for child in &self.children {
            group = group.add(child.to_svg());
        }

        group
    }
}

/// Composes states into [`StateGroup`]s.
///
/// # Examples
///
/// ```
/// # use armillary::anchors::StackedAnchors;
/// # use armillary::render::{Palette, StateRenderer};
/// # use armillary::geometry::{Point, Size};
/// # use armillary::semantic::{ShapeKind, StateBox};
/// let palette = Palette::default();
/// let anchors = StackedAnchors::default();
/// let renderer = StateRenderer::new(&palette, &anchors);
///
/// let state = StateBox::new("Idle", ShapeKind::Rectangle, Point::new(0.0, 0.0), Size::new(100.0, 50.0));
/// let group = renderer.render(&state);
///
/// assert_eq!(group.name_runs().len(), 1);
/// assert!(group.entry_runs().is_empty());
/// ```
pub struct StateRenderer<'a> {
    palette: &'a Palette,
    anchors: &'a dyn TextAnchors,
}

impl<'a> StateRenderer<'a> {
    pub fn new(palette: &'a Palette, anchors: &'a dyn TextAnchors) -> Self {
        Self { palette, anchors }
    }

    /// Renders `state` and, recursively, all of its children.
    ///
    /// Recursion ends at states without children. The state tree is owned
    /// top-down and therefore acyclic, so no cycle check is performed.
    pub fn render<'s>(&self, state: &'s StateBox) -> StateGroup<'s>
    where
        'a: 's,
    {
        debug!(
            state = state.name(),
            shape = state.shape().as_str(),
            children = state.children().len();
            "Rendering state"
        );

        StateGroup {
            shape: shape_of(state, self.palette),
            name_runs: self.name_runs(state),
            entry_runs: self.entry_runs(state),
            children: state
                .children()
                .iter()
                .map(|child| self.render(child))
                .collect(),
        }
    }

    fn name_runs<'s>(&self, state: &'s StateBox) -> Vec<TextRun<'s>>
    where
        'a: 's,
    {
        let anchor = self.anchors.text_position_of(state, TextField::Name);
        let name = state.name();
        let name_length = self.palette.advance(name.chars().count());

        if state.parallel_states() {
            vec![
                TextRun::new(
                    self.palette.italic_text(),
                    PARALLEL_STEREOTYPE,
                    anchor,
                    self.palette.advance(PARALLEL_STEREOTYPE_ADVANCE),
                ),
                TextRun::new(
                    self.palette.bold_text(),
                    name,
                    anchor.add_x(self.palette.advance(PARALLEL_NAME_OFFSET)),
                    name_length,
                ),
            ]
        } else {
            vec![TextRun::new(
                self.palette.bold_text(),
                name,
                anchor,
                name_length,
            )]
        }
    }

    fn entry_runs<'s>(&self, state: &'s StateBox) -> Vec<TextRun<'s>>
    where
        'a: 's,
    {
        let entry = state.entry();
        if entry.is_empty() {
            return Vec::new();
        }

        // Exit and do activities have anchors too but are not drawn.
        let anchor = self.anchors.text_position_of(state, TextField::Entry);
        vec![
            TextRun::new(
                self.palette.italic_text(),
                ENTRY_PREFIX,
                anchor,
                self.palette.advance(ENTRY_PREFIX_ADVANCE),
            ),
            TextRun::new(
                self.palette.normal_text(),
                entry,
                anchor.add_x(self.palette.advance(ENTRY_TEXT_OFFSET)),
                self.palette.advance(entry.chars().count()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use armillary_core::{
        draw::{FontStyle, FontWeight, ShapeGeometry},
        geometry::{Point, Size},
        semantic::ShapeKind,
    };

    use super::*;
    use crate::anchors::StackedAnchors;

    const CHAR_WIDTH: f32 = 15.0;

    fn state(name: &str, shape: ShapeKind, x: f32, y: f32) -> StateBox {
        StateBox::new(name, shape, Point::new(x, y), Size::new(100.0, 50.0))
    }

    /// Asserts the per-node element counts for a whole tree.
    fn assert_structure(state: &StateBox, group: &StateGroup<'_>) {
        let expected_names = if state.parallel_states() { 2 } else { 1 };
        let expected_entries = if state.entry().is_empty() { 0 } else { 2 };

        assert_eq!(group.name_runs().len(), expected_names, "{}", state.name());
        assert_eq!(group.entry_runs().len(), expected_entries, "{}", state.name());
        assert_eq!(group.children().len(), state.children().len());

        for (child_state, child_group) in state.children().iter().zip(group.children()) {
            assert_structure(child_state, child_group);
        }
    }

    #[test]
    fn test_scenario_plain_rectangle() {
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let renderer = StateRenderer::new(&palette, &anchors);
        let idle = state("Idle", ShapeKind::Rectangle, 0.0, 0.0);

        let group = renderer.render(&idle);

        assert_eq!(
            group.shape().geometry(),
            ShapeGeometry::Rectangle {
                top_left: Point::new(0.0, 0.0),
                size: Size::new(100.0, 50.0),
            }
        );
        let [name] = group.name_runs() else {
            panic!("expected a single name run");
        };
        assert_eq!(name.content(), "Idle");
        assert_eq!(name.definition().font_weight(), FontWeight::Bold);
        assert_approx_eq!(f32, name.length(), 4.0 * CHAR_WIDTH);
        assert!(group.entry_runs().is_empty());
        assert!(group.children().is_empty());
    }

    #[test]
    fn test_scenario_circle_with_entry() {
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let renderer = StateRenderer::new(&palette, &anchors);
        let active = state("Active", ShapeKind::Circle, 10.0, 10.0).with_entry("log()");

        let group = renderer.render(&active);

        let radius = palette.circle_radius();
        assert_eq!(
            group.shape().geometry(),
            ShapeGeometry::Circle {
                center: Point::new(10.0 + radius, 10.0 + radius),
                radius,
            }
        );

        let [name] = group.name_runs() else {
            panic!("expected a single name run");
        };
        assert_eq!(name.content(), "Active");
        assert_eq!(name.definition().font_weight(), FontWeight::Bold);
        assert_eq!(
            name.position(),
            anchors.text_position_of(&active, TextField::Name)
        );
        assert_approx_eq!(f32, name.length(), 6.0 * CHAR_WIDTH);

        let entry_anchor = anchors.text_position_of(&active, TextField::Entry);
        let [prefix, activity] = group.entry_runs() else {
            panic!("expected prefix and activity runs");
        };
        assert_eq!(prefix.content(), "entry / ");
        assert_eq!(prefix.definition().font_style(), FontStyle::Oblique);
        assert_eq!(prefix.position(), entry_anchor);
        assert_approx_eq!(f32, prefix.length(), 8.0 * CHAR_WIDTH);

        assert_eq!(activity.content(), "log()");
        assert_eq!(activity.definition().font_style(), FontStyle::Normal);
        assert_eq!(activity.definition().font_weight(), FontWeight::Normal);
        assert_approx_eq!(f32, activity.position().x(), entry_anchor.x() + 9.0 * CHAR_WIDTH);
        assert_approx_eq!(f32, activity.position().y(), entry_anchor.y());
        assert_approx_eq!(f32, activity.length(), 5.0 * CHAR_WIDTH);
    }

    #[test]
    fn test_scenario_parallel_region() {
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let renderer = StateRenderer::new(&palette, &anchors);
        let region = state("Region", ShapeKind::Rectangle, 0.0, 0.0).with_parallel_states(true);

        let group = renderer.render(&region);
        let anchor = anchors.text_position_of(&region, TextField::Name);

        let [stereotype, name] = group.name_runs() else {
            panic!("expected stereotype and name runs");
        };
        assert_eq!(stereotype.content(), "<<parallel>>");
        assert_eq!(stereotype.definition().font_style(), FontStyle::Oblique);
        assert_eq!(stereotype.position(), anchor);
        assert_approx_eq!(f32, stereotype.length(), 13.0 * CHAR_WIDTH);

        assert_eq!(name.content(), "Region");
        assert_eq!(name.definition().font_weight(), FontWeight::Bold);
        assert_approx_eq!(f32, name.position().x(), anchor.x() + 14.0 * CHAR_WIDTH);
        assert_approx_eq!(f32, name.position().y(), anchor.y());
        assert_approx_eq!(f32, name.length(), 6.0 * CHAR_WIDTH);
    }

    #[test]
    fn test_scenario_three_levels() {
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let renderer = StateRenderer::new(&palette, &anchors);
        let tree = state("Outer", ShapeKind::Other("region".to_string()), 0.0, 0.0)
            .with_child(
                state("Middle", ShapeKind::Rectangle, 10.0, 40.0)
                    .with_child(state("Inner", ShapeKind::Circle, 20.0, 80.0)),
            )
            .with_child(state("Sibling", ShapeKind::Rectangle, 200.0, 40.0).with_entry("go()"));

        let group = renderer.render(&tree);

        assert_eq!(group.depth(), 3);
        assert_eq!(group.children().len(), 2);
        assert_eq!(group.children()[0].name_runs()[0].content(), "Middle");
        assert_eq!(group.children()[1].name_runs()[0].content(), "Sibling");
        assert_eq!(
            group.children()[0].children()[0].name_runs()[0].content(),
            "Inner"
        );
        assert_structure(&tree, &group);
    }

    #[test]
    fn test_inert_fields_are_not_drawn() {
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let renderer = StateRenderer::new(&palette, &anchors);
        let busy = state("Busy", ShapeKind::Rectangle, 0.0, 0.0)
            .with_exit("cleanup()")
            .with_do_activity("work()");

        let group = renderer.render(&busy);
        assert_eq!(group.name_runs().len(), 1);
        assert!(group.entry_runs().is_empty());

        let svg = group.to_svg().to_string();
        assert!(!svg.contains("cleanup()"));
        assert!(!svg.contains("work()"));
    }

    #[test]
    fn test_to_svg_preserves_draw_order() {
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let renderer = StateRenderer::new(&palette, &anchors);
        let tree = state("Parent", ShapeKind::Rectangle, 0.0, 0.0)
            .with_entry("enter()")
            .with_child(state("Child", ShapeKind::Circle, 10.0, 10.0));

        let svg = renderer.render(&tree).to_svg().to_string();

        let shape = svg.find("<rect").expect("shape");
        let name = svg.find("Parent").expect("name");
        let prefix = svg.find("entry / ").expect("entry prefix");
        let activity = svg.find("enter()").expect("entry activity");
        let child = svg.find("<circle").expect("child shape");

        assert!(shape < name);
        assert!(name < prefix);
        assert!(prefix < activity);
        assert!(activity < child);
        assert_eq!(svg.matches("<g").count(), 2);
    }

    #[test]
    fn test_pinned_anchor_is_used_for_name() {
        let palette = Palette::default();
        let anchors = StackedAnchors::default();
        let renderer = StateRenderer::new(&palette, &anchors);
        let pinned = state("Pinned", ShapeKind::Rectangle, 0.0, 0.0)
            .with_anchor(TextField::Name, Point::new(33.0, 44.0));

        let group = renderer.render(&pinned);
        assert_eq!(group.name_runs()[0].position(), Point::new(33.0, 44.0));
    }

    proptest! {
        #[test]
        fn prop_parallel_name_offset_is_fixed(name in "[A-Za-z][A-Za-z0-9_]{0,40}", x in -500.0f32..500.0, y in -500.0f32..500.0) {
            let palette = Palette::default();
            let anchors = StackedAnchors::default();
            let renderer = StateRenderer::new(&palette, &anchors);
            let region = state(&name, ShapeKind::Rectangle, x, y).with_parallel_states(true);
            let anchor = anchors.text_position_of(&region, TextField::Name);

            let group = renderer.render(&region);
            let runs = group.name_runs();

            prop_assert_eq!(runs.len(), 2);
            prop_assert_eq!(runs[0].length(), 13.0 * CHAR_WIDTH);
            prop_assert_eq!(runs[1].position().x(), anchor.x() + 14.0 * CHAR_WIDTH);
            prop_assert_eq!(runs[1].length(), name.chars().count() as f32 * CHAR_WIDTH);
        }

        #[test]
        fn prop_entry_runs_present_iff_entry_non_empty(entry in "[a-z()_ ]{0,20}") {
            let palette = Palette::default();
            let anchors = StackedAnchors::default();
            let renderer = StateRenderer::new(&palette, &anchors);
            let s = state("S", ShapeKind::Rectangle, 0.0, 0.0).with_entry(entry.as_str());
            let anchor = anchors.text_position_of(&s, TextField::Entry);

            let group = renderer.render(&s);

            if entry.is_empty() {
                prop_assert!(group.entry_runs().is_empty());
            } else {
                prop_assert_eq!(group.entry_runs().len(), 2);
                prop_assert_eq!(group.entry_runs()[1].position().x(), anchor.x() + 9.0 * CHAR_WIDTH);
            }
        }

        #[test]
        fn prop_rendering_is_deterministic(
            name in "[A-Za-z]{1,12}",
            entry in "[a-z()]{0,12}",
            parallel in any::<bool>(),
            tag in prop_oneof![Just("rectangle"), Just("circle"), Just("region")],
        ) {
            let palette = Palette::default();
            let anchors = StackedAnchors::default();
            let renderer = StateRenderer::new(&palette, &anchors);
            let s = state(&name, ShapeKind::from(tag), 3.0, 4.0)
                .with_entry(entry.as_str())
                .with_parallel_states(parallel)
                .with_child(state("Child", ShapeKind::Circle, 5.0, 6.0));

            prop_assert_eq!(renderer.render(&s), renderer.render(&s));
        }
    }
}
