use std::time::Duration;

/// The audio/haptic capability consumed by the sequencers.
///
/// Every call is fire-and-forget: implementations absorb playback failures
/// silently and callers never await completion. `torch_on`/`torch_off` are
/// mutually exclusive; starting one stops the other if it is still
/// sounding. The welcome and door cues play on independent channels.
pub trait FeedbackSink {
    fn torch_on(&self);
    fn torch_off(&self);
    fn welcome(&self);
    fn door_open(&self);
    fn door_close(&self);
    fn haptic_pulse(&self, intensity: f64, sharpness: f64);
    fn haptic_continuous(&self, intensity: f64, sharpness: f64, duration: Duration);
    fn stop_all(&self);

    /// Whether haptic hardware is present. Checked once per session; a sink
    /// without haptics is treated as a permanent no-op for haptic calls.
    fn supports_haptics(&self) -> bool {
        true
    }
}

/// Per-channel playback volumes, each clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkVolumes {
    torch: f64,
    welcome: f64,
    door: f64,
}

impl SinkVolumes {
    #[must_use]
    pub fn torch(&self) -> f64 {
        self.torch
    }

    #[must_use]
    pub fn welcome(&self) -> f64 {
        self.welcome
    }

    #[must_use]
    pub fn door(&self) -> f64 {
        self.door
    }

    pub fn set_torch(&mut self, volume: f64) {
        self.torch = volume.clamp(0.0, 1.0);
    }

    pub fn set_welcome(&mut self, volume: f64) {
        self.welcome = volume.clamp(0.0, 1.0);
    }

    pub fn set_door(&mut self, volume: f64) {
        self.door = volume.clamp(0.0, 1.0);
    }
}

impl Default for SinkVolumes {
    fn default() -> Self {
        Self {
            torch: 0.3,
            welcome: 0.5,
            door: 0.4,
        }
    }
}
