use std::time::Duration;

/// Recognizes a sustained, uninterrupted press of a fixed duration.
///
/// The countdown restarts from zero on every press; a release before the
/// deadline discards the accumulated time entirely.
#[derive(Debug)]
pub struct LongPressDetector {
    duration: Duration,
    deadline: Option<Duration>,
}

impl LongPressDetector {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    pub fn press(&mut self, now: Duration) {
        self.deadline = Some(now + self.duration);
    }

    pub fn release(&mut self) {
        self.deadline = None;
    }

    /// Returns true exactly once when the armed deadline has passed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// True while pressed and not yet fired.
    #[must_use]
    pub fn is_pressing(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::LongPressDetector;
    use std::time::Duration;

    fn millis(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn detector() -> LongPressDetector {
        LongPressDetector::new(millis(500))
    }

    #[test]
    fn fires_after_sustained_press() {
        let mut detector = detector();
        detector.press(millis(0));

        assert!(!detector.poll(millis(499)));
        assert!(detector.poll(millis(500)));
    }

    #[test]
    fn fires_exactly_once() {
        let mut detector = detector();
        detector.press(millis(0));

        assert!(detector.poll(millis(600)));
        assert!(!detector.poll(millis(700)));
    }

    #[test]
    fn release_before_deadline_has_no_effect() {
        let mut detector = detector();
        detector.press(millis(0));
        detector.release();

        assert!(!detector.poll(millis(1000)));
    }

    #[test]
    fn no_partial_credit_across_presses() {
        let mut detector = detector();
        detector.press(millis(0));
        detector.release();
        // 490ms of the first press must not count toward the second.
        detector.press(millis(490));

        assert!(!detector.poll(millis(600)));
        assert!(detector.poll(millis(990)));
    }

    #[test]
    fn pressing_window_tracks_armed_state() {
        let mut detector = detector();
        assert!(!detector.is_pressing());

        detector.press(millis(0));
        assert!(detector.is_pressing());

        detector.poll(millis(500));
        assert!(!detector.is_pressing());
    }

    #[test]
    fn repress_rearms_the_deadline() {
        let mut detector = detector();
        detector.press(millis(0));
        detector.press(millis(300));

        assert!(!detector.poll(millis(500)));
        assert!(detector.poll(millis(800)));
    }

    #[test]
    fn poll_before_any_press_is_quiet() {
        let mut detector = detector();

        assert!(!detector.poll(millis(10_000)));
    }
}
