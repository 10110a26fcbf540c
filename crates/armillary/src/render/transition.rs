use log::debug;

use armillary_core::{
    draw::{ArrowLine, ArrowMarker},
    semantic::Transition,
};

use super::Palette;

/// Maps transitions to straight arrow-terminated lines, one per transition, in input order.
///
/// Endpoints are used verbatim: no routing, bending or collision avoidance.
pub fn render_transitions(
    transitions: &[Transition],
    palette: &Palette,
    marker: &ArrowMarker,
) -> Vec<ArrowLine> {
    debug!(transitions = transitions.len(); "Rendering transitions");

    transitions
        .iter()
        .map(|transition| {
            let (start, end) = transition.coordinates();
            ArrowLine::new(start, end, palette.transition_stroke().clone(), marker)
        })
        .collect()
}
