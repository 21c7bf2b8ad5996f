use crate::controllers::ports::render_surface::RenderSurfacePort;
use crate::controllers::session::events::SurfaceEvent;
use crate::core::view::VisualFrame;
use std::cell::RefCell;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct OffsetAnimation {
    from: (f64, f64),
    to: (f64, f64),
    started: Instant,
    duration: Duration,
}

impl OffsetAnimation {
    fn pinned(offsets: (f64, f64), now: Instant) -> Self {
        Self {
            from: offsets,
            to: offsets,
            started: now,
            duration: Duration::ZERO,
        }
    }

    fn at(&self, now: Instant) -> (f64, f64) {
        if self.duration.is_zero() {
            return self.to;
        }

        let elapsed = now.saturating_duration_since(self.started);
        let progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);

        (
            self.from.0 + (self.to.0 - self.from.0) * progress,
            self.from.1 + (self.to.1 - self.from.1) * progress,
        )
    }
}

/// Latest visual state shared between the session controller and the draw
/// loop. The core hands over start/end values and nominal durations; this
/// adapter does the in-between interpolation. The event loop owns both
/// sides, so plain `RefCell` interior mutability is enough.
#[derive(Debug)]
pub struct SurfaceModel {
    frame: RefCell<Option<VisualFrame>>,
    offsets: RefCell<OffsetAnimation>,
}

impl SurfaceModel {
    #[must_use]
    pub fn new(initial_offsets: (f64, f64)) -> Self {
        Self {
            frame: RefCell::new(None),
            offsets: RefCell::new(OffsetAnimation::pinned(initial_offsets, Instant::now())),
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<VisualFrame> {
        *self.frame.borrow()
    }

    #[must_use]
    pub fn intro_offsets(&self, now: Instant) -> (f64, f64) {
        self.offsets.borrow().at(now)
    }
}

impl RenderSurfacePort for SurfaceModel {
    fn present(&self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Frame(frame) => {
                *self.frame.borrow_mut() = Some(frame);
            }
            SurfaceEvent::IntroOffsets(transition) => {
                let now = Instant::now();
                let mut animation = self.offsets.borrow_mut();
                let from = animation.at(now);
                *animation = OffsetAnimation {
                    from,
                    to: (transition.top, transition.bottom),
                    started: now,
                    duration: transition.duration,
                };
            }
        }
    }
}
