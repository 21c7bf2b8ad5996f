use crate::controllers::ports::feedback_sink::{FeedbackSink, SinkVolumes};
use crate::controllers::ports::render_surface::RenderSurfacePort;
use crate::controllers::session::controller::SessionController;
use crate::core::data::point::SurfacePoint;
use crate::core::data::surface_extent::SurfaceExtent;
use crate::core::interaction::state::EngineTuning;
use crate::core::intro::script::IntroScript;
use crate::input::gui::pointer::PointerInputState;
use crate::presenters::console::feedback::ConsoleFeedback;
use crate::presenters::haptic_gate::HapticCapabilityGate;
use crate::presenters::pixels::adapter::SurfaceModel;
use crate::presenters::pixels::presenter::LightPresenter;
use std::rc::Rc;
use std::time::{Duration, Instant};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

/// Side of the square reset hit-zone in the top-right corner.
const RESET_ZONE_SIZE: f64 = 56.0;

fn in_reset_zone(point: SurfacePoint, extent: &SurfaceExtent) -> bool {
    point.x >= extent.width() - RESET_ZONE_SIZE && point.y <= RESET_ZONE_SIZE
}

/// Opens the window and runs the whole session against the live event loop.
pub struct RunGuiCommand;

impl RunGuiCommand {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Dark Lantern")
                .with_inner_size(LogicalSize::new(390.0, 700.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let size = window.inner_size();
        let extent = SurfaceExtent::new(f64::from(size.width), f64::from(size.height))
            .expect("window surface has a positive extent");

        let mut presenter = LightPresenter::new(window);
        let model = Rc::new(SurfaceModel::new((-extent.width(), extent.width())));
        let feedback = HapticCapabilityGate::new(ConsoleFeedback::new(SinkVolumes::default()));
        let mut session = SessionController::new(
            extent,
            IntroScript::default(),
            EngineTuning::default(),
            Rc::new(feedback) as Rc<dyn FeedbackSink>,
            Rc::clone(&model) as Rc<dyn RenderSurfacePort>,
        );

        let started = Instant::now();
        session.start(Duration::ZERO);

        let mut pointer = PointerInputState::default();
        let mut last_cursor = SurfacePoint::default();

        event_loop
            .run(move |event, elwt| {
                elwt.set_control_flow(ControlFlow::Poll);

                match event {
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(new_size) => {
                            presenter.resize(new_size.width, new_size.height);
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            last_cursor = SurfacePoint {
                                x: position.x,
                                y: position.y,
                            };
                            if let Some(pointer_event) = pointer.handle_cursor_moved(last_cursor) {
                                session.handle_pointer(pointer_event, started.elapsed());
                            }
                        }
                        WindowEvent::MouseInput { state, button, .. } => {
                            let reset_tap = state == ElementState::Pressed
                                && button == MouseButton::Left
                                && session.is_live()
                                && in_reset_zone(last_cursor, &extent);

                            if reset_tap {
                                session.request_reset(started.elapsed());
                            } else if let Some(pointer_event) =
                                pointer.handle_mouse_input(state, button, last_cursor)
                            {
                                session.handle_pointer(pointer_event, started.elapsed());
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            let result = match model.frame() {
                                Some(frame) if session.is_live() => {
                                    presenter.render_frame(&frame)
                                }
                                _ => presenter.render_intro(model.intro_offsets(Instant::now())),
                            };
                            if let Err(error) = result {
                                eprintln!("Render error: {error}");
                            }
                        }
                        _ => {}
                    },
                    Event::AboutToWait => {
                        session.advance(started.elapsed());
                        window.request_redraw();
                    }
                    _ => {}
                }
            })
            .expect("Event loop failed");
    }
}

impl Default for RunGuiCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::in_reset_zone;
    use crate::core::data::point::SurfacePoint;
    use crate::core::data::surface_extent::SurfaceExtent;

    #[test]
    fn reset_zone_covers_the_top_right_corner() {
        let extent = SurfaceExtent::new(390.0, 700.0).unwrap();

        assert!(in_reset_zone(SurfacePoint { x: 380.0, y: 10.0 }, &extent));
        assert!(!in_reset_zone(SurfacePoint { x: 10.0, y: 10.0 }, &extent));
        assert!(!in_reset_zone(SurfacePoint { x: 380.0, y: 100.0 }, &extent));
    }
}
