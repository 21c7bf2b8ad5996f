use crate::core::data::surface_extent::SurfaceExtent;
use crate::core::feedback::{AudioCue, BuzzSpec, FeedbackEvent, PulseSpec};
use crate::core::intro::phase::IntroPhase;
use crate::core::intro::script::IntroScript;
use crate::core::timing::timer_wheel::{TimerKey, TimerWheel};
use crate::core::view::OffsetTransition;
use std::time::Duration;

const HAMMER_PULSE: PulseSpec = PulseSpec {
    intensity: 0.8,
    sharpness: 0.5,
};

const BUZZ_INTENSITY: f64 = 0.3;
const BUZZ_SHARPNESS: f64 = 0.2;

fn buzz(duration: Duration) -> FeedbackEvent {
    FeedbackEvent::Buzz(BuzzSpec {
        intensity: BUZZ_INTENSITY,
        sharpness: BUZZ_SHARPNESS,
        duration,
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntroEffect {
    Feedback(FeedbackEvent),
    Offsets(OffsetTransition),
    HandOff,
}

/// The single-shot intro choreography.
///
/// Every phase boundary is a one-shot deadline on the timer wheel; the
/// hand-off deadline is armed at activation and never re-derived from the
/// phase deadlines, so it fires at `script.total` no matter how the phases
/// were tuned. User input has no effect during playback.
#[derive(Debug)]
pub struct IntroTimeline {
    script: IntroScript,
    extent: SurfaceExtent,
    phase: IntroPhase,
    top_offset: f64,
    bottom_offset: f64,
    wheel: TimerWheel,
}

impl IntroTimeline {
    #[must_use]
    pub fn new(script: IntroScript, extent: SurfaceExtent) -> Self {
        Self {
            script,
            extent,
            phase: IntroPhase::Idle,
            top_offset: 0.0,
            bottom_offset: 0.0,
            wheel: TimerWheel::new(),
        }
    }

    /// Starts playback. Calling it again after the first activation is a
    /// no-op: the timeline is single-shot.
    pub fn activate(&mut self, now: Duration) -> Vec<IntroEffect> {
        if self.phase != IntroPhase::Idle {
            return Vec::new();
        }

        let width = self.extent.width();
        self.phase = IntroPhase::Converging;
        self.top_offset = -width;
        self.bottom_offset = width;

        self.wheel
            .arm(TimerKey::IntroMeeting, now + self.script.meeting_at());
        self.wheel
            .arm(TimerKey::IntroHolding, now + self.script.holding_at());
        self.wheel
            .arm(TimerKey::IntroDiverging, now + self.script.diverging_at());
        self.wheel
            .arm(TimerKey::IntroHandoff, now + self.script.total);

        vec![
            IntroEffect::Feedback(FeedbackEvent::Audio(AudioCue::DoorOpen)),
            IntroEffect::Feedback(buzz(self.script.fast)),
            IntroEffect::Offsets(OffsetTransition {
                top: 0.0,
                bottom: 0.0,
                duration: self.script.fast,
            }),
        ]
    }

    /// Fires every phase boundary whose deadline has passed.
    pub fn advance(&mut self, now: Duration) -> Vec<IntroEffect> {
        let mut effects = Vec::new();

        for key in self.wheel.expire(now) {
            match key {
                TimerKey::IntroMeeting => {
                    self.phase = IntroPhase::Meeting;
                    self.top_offset = 0.0;
                    self.bottom_offset = 0.0;
                    effects.push(IntroEffect::Feedback(FeedbackEvent::Pulse(HAMMER_PULSE)));
                    // The meeting transition holds the offsets in place; what
                    // matters is that a transition of `slow` is scheduled.
                    effects.push(IntroEffect::Offsets(OffsetTransition {
                        top: 0.0,
                        bottom: 0.0,
                        duration: self.script.slow,
                    }));
                }
                TimerKey::IntroHolding => {
                    self.phase = IntroPhase::Holding;
                    effects.push(IntroEffect::Offsets(OffsetTransition {
                        top: 0.0,
                        bottom: 0.0,
                        duration: Duration::ZERO,
                    }));
                }
                TimerKey::IntroDiverging => {
                    let width = self.extent.width();
                    self.phase = IntroPhase::Diverging;
                    self.top_offset = width;
                    self.bottom_offset = -width;
                    effects.push(IntroEffect::Feedback(FeedbackEvent::Audio(
                        AudioCue::DoorClose,
                    )));
                    effects.push(IntroEffect::Feedback(FeedbackEvent::Pulse(HAMMER_PULSE)));
                    effects.push(IntroEffect::Feedback(buzz(self.script.fast)));
                    effects.push(IntroEffect::Offsets(OffsetTransition {
                        top: width,
                        bottom: -width,
                        duration: self.script.fast,
                    }));
                }
                TimerKey::IntroHandoff => {
                    self.phase = IntroPhase::Done;
                    effects.push(IntroEffect::HandOff);
                }
                TimerKey::HintHide => {}
            }
        }

        effects
    }

    #[must_use]
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    #[must_use]
    pub fn offsets(&self) -> (f64, f64) {
        (self.top_offset, self.bottom_offset)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase.is_done()
    }
}
