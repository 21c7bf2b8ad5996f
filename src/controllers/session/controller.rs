use crate::controllers::ports::feedback_sink::FeedbackSink;
use crate::controllers::ports::render_surface::RenderSurfacePort;
use crate::controllers::session::events::SurfaceEvent;
use crate::core::data::surface_extent::SurfaceExtent;
use crate::core::interaction::engine::InteractionEngine;
use crate::core::interaction::state::EngineTuning;
use crate::core::feedback::FeedbackEvent;
use crate::core::gesture::event::PointerEvent;
use crate::core::intro::phase::IntroPhase;
use crate::core::intro::script::IntroScript;
use crate::core::intro::timeline::{IntroEffect, IntroTimeline};
use crate::core::view::VisualFrame;
use std::rc::Rc;
use std::time::Duration;

enum Stage {
    Intro(IntroTimeline),
    Live(InteractionEngine),
}

/// Owns the whole session: intro playback, the hand-off, and the
/// steady-state interaction loop, dispatching effects to the injected
/// feedback sink and render surface.
///
/// All calls happen on one thread; `now` is a monotonic reading measured
/// from any fixed origin, as long as the same origin is used throughout the
/// session.
pub struct SessionController {
    feedback: Rc<dyn FeedbackSink>,
    surface: Rc<dyn RenderSurfacePort>,
    extent: SurfaceExtent,
    tuning: EngineTuning,
    stage: Stage,
    last_frame: Option<VisualFrame>,
}

impl SessionController {
    #[must_use]
    pub fn new(
        extent: SurfaceExtent,
        script: IntroScript,
        tuning: EngineTuning,
        feedback: Rc<dyn FeedbackSink>,
        surface: Rc<dyn RenderSurfacePort>,
    ) -> Self {
        Self {
            feedback,
            surface,
            extent,
            tuning,
            stage: Stage::Intro(IntroTimeline::new(script, extent)),
            last_frame: None,
        }
    }

    /// Begins intro playback. A session that is already past activation is
    /// unaffected.
    pub fn start(&mut self, now: Duration) {
        let effects = match &mut self.stage {
            Stage::Intro(timeline) => timeline.activate(now),
            Stage::Live(_) => Vec::new(),
        };
        self.apply_intro_effects(effects, now);
    }

    /// Drives all deadline-based work: intro phase boundaries, the
    /// hand-off, the hint timer and long-press firing.
    pub fn advance(&mut self, now: Duration) {
        let (intro_effects, feedback) = match &mut self.stage {
            Stage::Intro(timeline) => (timeline.advance(now), Vec::new()),
            Stage::Live(engine) => (Vec::new(), engine.advance(now)),
        };
        self.emit_all(feedback);
        self.apply_intro_effects(intro_effects, now);
        self.present_if_changed();
    }

    /// Routes a pointer event to the interaction engine. Input during the
    /// intro has no effect.
    pub fn handle_pointer(&mut self, event: PointerEvent, now: Duration) {
        let feedback = match &mut self.stage {
            Stage::Intro(_) => return,
            Stage::Live(engine) => engine.handle_pointer(event, now),
        };
        self.emit_all(feedback);
        self.present_if_changed();
    }

    /// The explicit reset control. Only meaningful once the engine is live.
    pub fn request_reset(&mut self, now: Duration) {
        let feedback = match &mut self.stage {
            Stage::Intro(_) => return,
            Stage::Live(engine) => engine.reset(now),
        };
        self.emit_all(feedback);
        self.present_if_changed();
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self.stage, Stage::Live(_))
    }

    /// The intro phase while the intro is playing, `None` once live.
    #[must_use]
    pub fn intro_phase(&self) -> Option<IntroPhase> {
        match &self.stage {
            Stage::Intro(timeline) => Some(timeline.phase()),
            Stage::Live(_) => None,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<VisualFrame> {
        match &self.stage {
            Stage::Intro(_) => None,
            Stage::Live(engine) => Some(engine.frame()),
        }
    }

    fn apply_intro_effects(&mut self, effects: Vec<IntroEffect>, now: Duration) {
        for effect in effects {
            match effect {
                IntroEffect::Feedback(event) => self.emit(event),
                IntroEffect::Offsets(transition) => {
                    self.surface.present(SurfaceEvent::IntroOffsets(transition));
                }
                IntroEffect::HandOff => {
                    self.stage =
                        Stage::Live(InteractionEngine::new(self.extent, self.tuning, now));
                }
            }
        }
    }

    fn emit_all(&self, events: Vec<FeedbackEvent>) {
        for event in events {
            self.emit(event);
        }
    }

    fn emit(&self, event: FeedbackEvent) {
        use crate::core::feedback::AudioCue;

        match event {
            FeedbackEvent::Audio(AudioCue::TorchOn) => self.feedback.torch_on(),
            FeedbackEvent::Audio(AudioCue::TorchOff) => self.feedback.torch_off(),
            FeedbackEvent::Audio(AudioCue::Welcome) => self.feedback.welcome(),
            FeedbackEvent::Audio(AudioCue::DoorOpen) => self.feedback.door_open(),
            FeedbackEvent::Audio(AudioCue::DoorClose) => self.feedback.door_close(),
            FeedbackEvent::Pulse(pulse) => {
                self.feedback.haptic_pulse(pulse.intensity, pulse.sharpness);
            }
            FeedbackEvent::Buzz(buzz) => {
                self.feedback
                    .haptic_continuous(buzz.intensity, buzz.sharpness, buzz.duration);
            }
        }
    }

    fn present_if_changed(&mut self) {
        if let Stage::Live(engine) = &self.stage {
            let frame = engine.frame();
            if self.last_frame != Some(frame) {
                self.surface.present(SurfaceEvent::Frame(frame));
                self.last_frame = Some(frame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SessionController;
    use crate::controllers::ports::feedback_sink::FeedbackSink;
    use crate::controllers::ports::render_surface::RenderSurfacePort;
    use crate::controllers::session::events::SurfaceEvent;
    use crate::core::data::point::SurfacePoint;
    use crate::core::data::surface_extent::SurfaceExtent;
    use crate::core::interaction::state::EngineTuning;
    use crate::core::gesture::event::PointerEvent;
    use crate::core::intro::phase::IntroPhase;
    use crate::core::intro::script::IntroScript;
    use crate::core::view::HintVariant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn millis(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn take_calls(&self) -> Vec<String> {
            std::mem::take(&mut *self.calls.borrow_mut())
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }
    }

    impl FeedbackSink for RecordingSink {
        fn torch_on(&self) {
            self.record("torch_on");
        }

        fn torch_off(&self) {
            self.record("torch_off");
        }

        fn welcome(&self) {
            self.record("welcome");
        }

        fn door_open(&self) {
            self.record("door_open");
        }

        fn door_close(&self) {
            self.record("door_close");
        }

        fn haptic_pulse(&self, intensity: f64, _sharpness: f64) {
            self.record(format!("pulse {:.1}", intensity));
        }

        fn haptic_continuous(&self, _intensity: f64, _sharpness: f64, _duration: Duration) {
            self.record("buzz");
        }

        fn stop_all(&self) {
            self.record("stop_all");
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        events: RefCell<Vec<SurfaceEvent>>,
    }

    impl RecordingSurface {
        fn take_events(&self) -> Vec<SurfaceEvent> {
            std::mem::take(&mut *self.events.borrow_mut())
        }
    }

    impl RenderSurfacePort for RecordingSurface {
        fn present(&self, event: SurfaceEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    struct Fixture {
        sink: Rc<RecordingSink>,
        surface: Rc<RecordingSurface>,
        session: SessionController,
    }

    fn fixture() -> Fixture {
        let sink = Rc::new(RecordingSink::default());
        let surface = Rc::new(RecordingSurface::default());
        let session = SessionController::new(
            SurfaceExtent::new(400.0, 300.0).unwrap(),
            IntroScript::default(),
            EngineTuning::default(),
            Rc::clone(&sink) as Rc<dyn FeedbackSink>,
            Rc::clone(&surface) as Rc<dyn RenderSurfacePort>,
        );

        Fixture {
            sink,
            surface,
            session,
        }
    }

    fn run_intro(fixture: &mut Fixture) {
        fixture.session.start(millis(0));
        fixture.session.advance(millis(3000));
        fixture.session.advance(millis(3700));
        fixture.session.advance(millis(4700));
        fixture.sink.take_calls();
        fixture.surface.take_events();
    }

    #[test]
    fn start_plays_the_door_open_and_buzz() {
        let mut fixture = fixture();

        fixture.session.start(millis(0));

        assert_eq!(fixture.sink.take_calls(), vec!["door_open", "buzz"]);
        assert_eq!(fixture.session.intro_phase(), Some(IntroPhase::Converging));
    }

    #[test]
    fn intro_runs_to_hand_off_at_total_duration() {
        let mut fixture = fixture();
        fixture.session.start(millis(0));

        fixture.session.advance(millis(4699));
        assert!(!fixture.session.is_live());

        fixture.session.advance(millis(4700));
        assert!(fixture.session.is_live());
        assert_eq!(fixture.session.intro_phase(), None);
    }

    #[test]
    fn diverging_cues_arrive_before_the_hand_off() {
        let mut fixture = fixture();
        fixture.session.start(millis(0));
        fixture.session.advance(millis(3000));
        fixture.session.advance(millis(3700));
        fixture.sink.take_calls();

        fixture.session.advance(millis(4700));

        let calls = fixture.sink.take_calls();
        assert_eq!(calls, vec!["door_close", "pulse 0.8", "buzz"]);
        assert!(fixture.session.is_live());
    }

    #[test]
    fn pointer_input_is_ignored_during_the_intro() {
        let mut fixture = fixture();
        fixture.session.start(millis(0));
        fixture.sink.take_calls();

        fixture.session.handle_pointer(
            PointerEvent::Down(SurfacePoint { x: 200.0, y: 150.0 }),
            millis(1000),
        );

        assert!(fixture.sink.take_calls().is_empty());
        assert_eq!(fixture.session.intro_phase(), Some(IntroPhase::Converging));
    }

    #[test]
    fn hand_off_activates_the_engine_with_the_hint_showing() {
        let mut fixture = fixture();
        run_intro(&mut fixture);

        let frame = fixture.session.frame().expect("engine is live");
        assert!(frame.hint_visible);
        assert_eq!(frame.hint, HintVariant::Idle);
    }

    #[test]
    fn center_press_held_reveals_with_a_single_welcome() {
        let mut fixture = fixture();
        run_intro(&mut fixture);

        fixture.session.handle_pointer(
            PointerEvent::Down(SurfacePoint { x: 200.0, y: 150.0 }),
            millis(5000),
        );
        fixture.session.advance(millis(5500));
        fixture.session.advance(millis(6000));

        let frame = fixture.session.frame().expect("engine is live");
        assert!(frame.revealed);
        assert!(frame.spreading);
        assert_eq!(frame.spread_radius, 400.0);

        let welcomes = fixture
            .sink
            .take_calls()
            .iter()
            .filter(|call| *call == "welcome")
            .count();
        assert_eq!(welcomes, 1);
    }

    #[test]
    fn frames_are_presented_only_when_they_change() {
        let mut fixture = fixture();
        run_intro(&mut fixture);

        fixture.session.advance(millis(4800));
        fixture.session.advance(millis(4900));

        let frames = fixture
            .surface
            .take_events()
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Frame(_)))
            .count();
        assert_eq!(frames, 0, "no state change, no frame");

        fixture.session.handle_pointer(
            PointerEvent::Down(SurfacePoint { x: 10.0, y: 10.0 }),
            millis(5000),
        );
        let frames = fixture
            .surface
            .take_events()
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Frame(_)))
            .count();
        assert_eq!(frames, 1);
    }

    #[test]
    fn intro_offset_transitions_reach_the_surface() {
        let mut fixture = fixture();

        fixture.session.start(millis(0));

        let offsets: Vec<_> = fixture
            .surface
            .take_events()
            .into_iter()
            .filter_map(|event| match event {
                SurfaceEvent::IntroOffsets(transition) => Some(transition),
                SurfaceEvent::Frame(_) => None,
            })
            .collect();
        assert_eq!(offsets.len(), 1);
        assert_eq!(offsets[0].top, 0.0);
        assert_eq!(offsets[0].bottom, 0.0);
        assert_eq!(offsets[0].duration, millis(3000));
    }

    #[test]
    fn reset_before_hand_off_is_a_no_op() {
        let mut fixture = fixture();
        fixture.session.start(millis(0));
        fixture.sink.take_calls();

        fixture.session.request_reset(millis(1000));

        assert!(fixture.sink.take_calls().is_empty());
    }

    #[test]
    fn reset_emits_the_acknowledgment_cues() {
        let mut fixture = fixture();
        run_intro(&mut fixture);

        fixture.session.request_reset(millis(6000));

        assert_eq!(fixture.sink.take_calls(), vec!["torch_off", "pulse 0.5"]);
    }

    #[test]
    fn full_scenario_press_release_reset_round_trip() {
        let mut fixture = fixture();
        run_intro(&mut fixture);

        fixture.session.handle_pointer(
            PointerEvent::Down(SurfacePoint { x: 200.0, y: 150.0 }),
            millis(5000),
        );
        fixture.session.advance(millis(5500));
        fixture.session.handle_pointer(PointerEvent::Up, millis(5600));
        fixture.session.request_reset(millis(5700));

        let frame = fixture.session.frame().expect("engine is live");
        assert!(!frame.revealed);
        assert!(!frame.spreading);
        assert!(frame.hint_visible);

        let calls = fixture.sink.take_calls();
        assert!(calls.contains(&"torch_on".to_string()));
        assert!(calls.contains(&"welcome".to_string()));
        assert!(calls.contains(&"torch_off".to_string()));
    }
}
