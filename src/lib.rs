mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::controllers::ports::feedback_sink::{FeedbackSink, SinkVolumes};
pub use crate::controllers::ports::render_surface::RenderSurfacePort;
pub use crate::controllers::session::controller::SessionController;
pub use crate::controllers::session::demo::run_scripted_session;
pub use crate::controllers::session::events::SurfaceEvent;
pub use crate::core::data::point::SurfacePoint;
pub use crate::core::data::surface_extent::{SurfaceExtent, SurfaceExtentError};
pub use crate::core::feedback::{AudioCue, BuzzSpec, FeedbackEvent, PulseSpec};
pub use crate::core::gesture::drag::{DragReport, DragTracker};
pub use crate::core::gesture::event::PointerEvent;
pub use crate::core::gesture::long_press::LongPressDetector;
pub use crate::core::interaction::engine::InteractionEngine;
pub use crate::core::interaction::hints::resolve_hint;
pub use crate::core::interaction::state::{EngineTuning, InteractionState, INITIAL_SPREAD_RADIUS};
pub use crate::core::intro::phase::IntroPhase;
pub use crate::core::intro::script::IntroScript;
pub use crate::core::intro::timeline::{IntroEffect, IntroTimeline};
pub use crate::core::light::buffer::{
    shade_light_buffer, LightBufferError, LightSpot, LIGHT_CHANNELS,
};
pub use crate::core::light::intensity::{light_intensity, INTENSITY_FLOOR};
pub use crate::core::timing::rate_limiter::PulseRateLimiter;
pub use crate::core::timing::timer_wheel::{TimerKey, TimerWheel};
pub use crate::core::view::{HintVariant, OffsetTransition, VisualFrame};
pub use crate::presenters::console::feedback::ConsoleFeedback;
pub use crate::presenters::console::surface::ConsoleSurface;
pub use crate::presenters::haptic_gate::HapticCapabilityGate;

#[cfg(feature = "gui")]
pub use crate::input::gui::run::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::{LightPresenter, SurfaceModel};
