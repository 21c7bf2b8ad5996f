use crate::controllers::ports::render_surface::RenderSurfacePort;
use crate::controllers::session::events::SurfaceEvent;
use crate::core::view::HintVariant;

/// Prints each presented update as one line. The session controller only
/// presents frames that changed, so the output stays readable.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn hint_text(hint: HintVariant) -> &'static str {
        match hint {
            HintVariant::None => "-",
            HintVariant::Idle => "Tap and explore around",
            HintVariant::LongPress => "Hey! Long Press / To reveal something",
        }
    }
}

impl RenderSurfacePort for ConsoleSurface {
    fn present(&self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Frame(frame) => {
                println!(
                    "frame: intensity {:.2} at ({:.0}, {:.0}) radius {:.0}{}{} hint '{}'",
                    frame.light_intensity,
                    frame.light_position.x,
                    frame.light_position.y,
                    frame.spread_radius,
                    if frame.revealed { " revealed" } else { "" },
                    if frame.spreading { " spreading" } else { "" },
                    Self::hint_text(frame.hint),
                );
            }
            SurfaceEvent::IntroOffsets(transition) => {
                println!(
                    "intro: offsets -> ({:.0}, {:.0}) over {:?}",
                    transition.top, transition.bottom, transition.duration
                );
            }
        }
    }
}
