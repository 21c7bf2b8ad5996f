use crate::core::data::surface_extent::SurfaceExtent;
use crate::core::interaction::hints::resolve_hint;
use crate::core::interaction::state::{EngineTuning, InteractionState};
use crate::core::feedback::{AudioCue, FeedbackEvent, PulseSpec};
use crate::core::gesture::drag::DragTracker;
use crate::core::gesture::event::PointerEvent;
use crate::core::gesture::long_press::LongPressDetector;
use crate::core::light::intensity::light_intensity;
use crate::core::timing::rate_limiter::PulseRateLimiter;
use crate::core::timing::timer_wheel::{TimerKey, TimerWheel};
use crate::core::view::VisualFrame;
use std::time::Duration;

/// The steady-state gesture/feedback loop.
///
/// Composes the two gesture recognizers over one pointer stream, derives
/// light intensity from pointer distance, rate-limits the derived haptics
/// and runs the hint and long-press deadlines. Every method returns the
/// feedback effects of the transition it performed, exactly once each.
#[derive(Debug)]
pub struct InteractionEngine {
    state: InteractionState,
    tuning: EngineTuning,
    extent: SurfaceExtent,
    drag: DragTracker,
    long_press: LongPressDetector,
    limiter: PulseRateLimiter,
    wheel: TimerWheel,
}

impl InteractionEngine {
    /// Activates the engine at `now`: the idle hint shows and its hide
    /// deadline is armed.
    #[must_use]
    pub fn new(extent: SurfaceExtent, tuning: EngineTuning, now: Duration) -> Self {
        let mut wheel = TimerWheel::new();
        wheel.arm(TimerKey::HintHide, now + tuning.hint_display_duration);

        Self {
            state: InteractionState::default(),
            tuning,
            extent,
            drag: DragTracker::default(),
            long_press: LongPressDetector::new(tuning.long_press_duration),
            limiter: PulseRateLimiter::from_hz(tuning.haptic_rate_hz),
            wheel,
        }
    }

    /// Feeds one pointer event to both recognizers. Deadlines that came due
    /// before the event are processed first, so an expired long-press fires
    /// before a release at the same instant is seen.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Duration) -> Vec<FeedbackEvent> {
        let mut effects = self.advance(now);

        let report = self.drag.step(event);
        match event {
            PointerEvent::Down(_) => self.long_press.press(now),
            PointerEvent::Up => self.long_press.release(),
            PointerEvent::Move(_) => {}
        }

        if report.began {
            self.state.pointer_active = true;
            effects.push(FeedbackEvent::Audio(AudioCue::TorchOn));
        }

        if let Some(position) = report.position {
            self.state.pointer_position = position;
            self.state.light_intensity = light_intensity(position, &self.extent);

            if self.limiter.try_emit(now) {
                effects.push(FeedbackEvent::Pulse(PulseSpec {
                    intensity: self.state.light_intensity,
                    sharpness: self.tuning.pulse_sharpness,
                }));
            }
        }

        if report.ended {
            self.state.pointer_active = false;
            self.state.light_intensity = 0.0;
            effects.push(FeedbackEvent::Audio(AudioCue::TorchOff));
        }

        self.state.long_press_active = self.long_press.is_pressing();
        effects
    }

    /// Runs every deadline that has come due. Safe to call at any cadence;
    /// expired handlers are idempotent.
    pub fn advance(&mut self, now: Duration) -> Vec<FeedbackEvent> {
        let mut effects = Vec::new();

        for key in self.wheel.expire(now) {
            if key == TimerKey::HintHide {
                self.state.hint_visible = false;
            }
        }

        if self.long_press.poll(now) {
            effects.extend(self.fire_reveal());
        }

        self.state.long_press_active = self.long_press.is_pressing();
        effects
    }

    /// Restores the initial state and re-arms the hint deadline. The
    /// logical pointer is cleared even if the hardware pointer is still
    /// down; the next pointer-down begins a fresh press.
    pub fn reset(&mut self, now: Duration) -> Vec<FeedbackEvent> {
        self.state = InteractionState::default();
        self.drag.clear();
        self.long_press.release();
        self.limiter.clear();
        self.wheel
            .arm(TimerKey::HintHide, now + self.tuning.hint_display_duration);

        vec![
            FeedbackEvent::Audio(AudioCue::TorchOff),
            FeedbackEvent::Pulse(PulseSpec {
                intensity: self.tuning.reset_pulse_intensity,
                sharpness: self.tuning.pulse_sharpness,
            }),
        ]
    }

    fn fire_reveal(&mut self) -> Vec<FeedbackEvent> {
        if self.state.revealed {
            // One-shot: a second fire before a reset has no effect.
            return Vec::new();
        }

        self.state.revealed = true;
        self.state.light_intensity = 1.0;
        self.state.spreading = true;
        self.state.spread_radius = self.extent.cover_radius();

        vec![
            FeedbackEvent::Pulse(PulseSpec {
                intensity: self.tuning.reveal_pulse_intensity,
                sharpness: self.tuning.pulse_sharpness,
            }),
            FeedbackEvent::Audio(AudioCue::Welcome),
        ]
    }

    #[must_use]
    pub fn frame(&self) -> VisualFrame {
        VisualFrame {
            light_intensity: self.state.light_intensity,
            light_position: self.state.pointer_position,
            spread_radius: self.state.spread_radius,
            revealed: self.state.revealed,
            spreading: self.state.spreading,
            hint_visible: self.state.hint_visible,
            hint: resolve_hint(&self.state, &self.tuning),
        }
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn extent(&self) -> SurfaceExtent {
        self.extent
    }
}
