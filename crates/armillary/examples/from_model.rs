//! Example: Rendering a statechart built from the model types
//!
//! This example builds a small laid-out statechart in code and writes it
//! to `Turnstile.svg` in the current directory.

use armillary::{
    StatechartRenderer,
    config::AppConfig,
    geometry::{Point, Size},
    semantic::{ShapeKind, StateBox, Transition},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let initial = StateBox::new(
        "Start",
        ShapeKind::Circle,
        Point::new(20.0, 95.0),
        Size::new(20.0, 20.0),
    );

    let locked = StateBox::new(
        "Locked",
        ShapeKind::Rectangle,
        Point::new(80.0, 60.0),
        Size::new(220.0, 90.0),
    )
    .with_entry("alarm()");

    let unlocked = StateBox::new(
        "Unlocked",
        ShapeKind::Rectangle,
        Point::new(380.0, 60.0),
        Size::new(220.0, 90.0),
    );

    let root = StateBox::new(
        "Turnstile",
        ShapeKind::Other("machine".to_string()),
        Point::new(0.0, 0.0),
        Size::new(640.0, 200.0),
    )
    .with_child(initial)
    .with_child(locked)
    .with_child(unlocked)
    .with_transition(Transition::new(
        Point::new(40.0, 105.0),
        Point::new(80.0, 105.0),
    ))
    .with_transition(Transition::new(
        Point::new(300.0, 90.0),
        Point::new(380.0, 90.0),
    ))
    .with_transition(Transition::new(
        Point::new(380.0, 120.0),
        Point::new(300.0, 120.0),
    ));

    let renderer = StatechartRenderer::new(AppConfig::default());
    let path = renderer.export(&root, ".")?;

    println!("Wrote {}", path.display());
    Ok(())
}
