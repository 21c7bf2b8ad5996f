use std::time::Duration;

/// Discrete audio cues understood by the feedback sink.
///
/// The torch pair is mutually exclusive at playback time (starting one stops
/// the other); the welcome and door cues are independent channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    TorchOn,
    TorchOff,
    Welcome,
    DoorOpen,
    DoorClose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseSpec {
    pub intensity: f64,
    pub sharpness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuzzSpec {
    pub intensity: f64,
    pub sharpness: f64,
    pub duration: Duration,
}

/// One fire-and-forget emission requested by a state transition.
///
/// Transitions return these instead of calling the sink directly, so each
/// effect happens exactly once per transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedbackEvent {
    Audio(AudioCue),
    Pulse(PulseSpec),
    Buzz(BuzzSpec),
}
