use crate::controllers::ports::feedback_sink::{FeedbackSink, SinkVolumes};
use crate::controllers::ports::render_surface::RenderSurfacePort;
use crate::controllers::session::controller::SessionController;
use crate::core::data::point::SurfacePoint;
use crate::core::data::surface_extent::SurfaceExtent;
use crate::core::interaction::state::EngineTuning;
use crate::core::gesture::event::PointerEvent;
use crate::core::intro::script::IntroScript;
use crate::presenters::console::feedback::ConsoleFeedback;
use crate::presenters::console::surface::ConsoleSurface;
use crate::presenters::haptic_gate::HapticCapabilityGate;
use std::rc::Rc;
use std::time::Duration;

/// Plays a whole scripted session against the console presenters on
/// simulated time: intro, a drag across the surface, a held press that
/// reveals, and a reset. Useful as a smoke run without a window.
pub fn run_scripted_session() -> Result<(), Box<dyn std::error::Error>> {
    let extent = SurfaceExtent::new(390.0, 844.0)?;

    println!("dark lantern scripted session");
    println!("Surface: {}x{}", extent.width(), extent.height());

    let feedback = HapticCapabilityGate::new(ConsoleFeedback::new(SinkVolumes::default()));
    let surface = ConsoleSurface::new();
    let mut session = SessionController::new(
        extent,
        IntroScript::default(),
        EngineTuning::default(),
        Rc::new(feedback) as Rc<dyn FeedbackSink>,
        Rc::new(surface) as Rc<dyn RenderSurfacePort>,
    );

    session.start(Duration::ZERO);

    // Intro boundaries plus a few idle ticks in between.
    for step in [1000u64, 2000, 3000, 3700, 4400, 4700] {
        session.advance(Duration::from_millis(step));
    }

    // Drag from the edge toward the center.
    let center = extent.center();
    session.handle_pointer(
        PointerEvent::Down(SurfacePoint { x: 10.0, y: 10.0 }),
        Duration::from_millis(5000),
    );
    for step in 0..8u64 {
        let progress = step as f64 / 7.0;
        session.handle_pointer(
            PointerEvent::Move(SurfacePoint {
                x: 10.0 + (center.x - 10.0) * progress,
                y: 10.0 + (center.y - 10.0) * progress,
            }),
            Duration::from_millis(5040 + step * 40),
        );
    }

    // Hold at the center until the long press fires.
    session.advance(Duration::from_millis(5900));
    session.handle_pointer(PointerEvent::Up, Duration::from_millis(6000));

    session.request_reset(Duration::from_millis(6500));

    println!("Session complete");
    Ok(())
}
