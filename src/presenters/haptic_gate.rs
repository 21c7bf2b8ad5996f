use crate::controllers::ports::feedback_sink::FeedbackSink;
use std::time::Duration;

/// Wraps a sink and checks its haptic capability exactly once, at
/// construction. If the hardware is absent every haptic call becomes a
/// permanent no-op for the session; audio passes through untouched.
#[derive(Debug)]
pub struct HapticCapabilityGate<S: FeedbackSink> {
    inner: S,
    haptics_available: bool,
}

impl<S: FeedbackSink> HapticCapabilityGate<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        let haptics_available = inner.supports_haptics();

        Self {
            inner,
            haptics_available,
        }
    }
}

impl<S: FeedbackSink> FeedbackSink for HapticCapabilityGate<S> {
    fn torch_on(&self) {
        self.inner.torch_on();
    }

    fn torch_off(&self) {
        self.inner.torch_off();
    }

    fn welcome(&self) {
        self.inner.welcome();
    }

    fn door_open(&self) {
        self.inner.door_open();
    }

    fn door_close(&self) {
        self.inner.door_close();
    }

    fn haptic_pulse(&self, intensity: f64, sharpness: f64) {
        if self.haptics_available {
            self.inner.haptic_pulse(intensity, sharpness);
        }
    }

    fn haptic_continuous(&self, intensity: f64, sharpness: f64, duration: Duration) {
        if self.haptics_available {
            self.inner.haptic_continuous(intensity, sharpness, duration);
        }
    }

    fn stop_all(&self) {
        self.inner.stop_all();
    }

    fn supports_haptics(&self) -> bool {
        self.haptics_available
    }
}
