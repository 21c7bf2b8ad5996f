use crate::controllers::ports::feedback_sink::{FeedbackSink, SinkVolumes};
use std::time::Duration;

/// Logs every cue to stdout instead of playing it. Stands in for the audio
/// and haptic hardware in the headless demo.
#[derive(Debug)]
pub struct ConsoleFeedback {
    volumes: SinkVolumes,
}

impl ConsoleFeedback {
    #[must_use]
    pub fn new(volumes: SinkVolumes) -> Self {
        Self { volumes }
    }
}

impl FeedbackSink for ConsoleFeedback {
    fn torch_on(&self) {
        println!("audio: torch-on (volume {:.1})", self.volumes.torch());
    }

    fn torch_off(&self) {
        println!("audio: torch-off (volume {:.1})", self.volumes.torch());
    }

    fn welcome(&self) {
        println!("audio: welcome (volume {:.1})", self.volumes.welcome());
    }

    fn door_open(&self) {
        println!("audio: door-open (volume {:.1})", self.volumes.door());
    }

    fn door_close(&self) {
        println!("audio: door-close (volume {:.1})", self.volumes.door());
    }

    fn haptic_pulse(&self, intensity: f64, sharpness: f64) {
        println!(
            "haptic: pulse intensity {:.2} sharpness {:.2}",
            intensity, sharpness
        );
    }

    fn haptic_continuous(&self, intensity: f64, sharpness: f64, duration: Duration) {
        println!(
            "haptic: buzz intensity {:.2} sharpness {:.2} for {:?}",
            intensity, sharpness, duration
        );
    }

    fn stop_all(&self) {
        println!("audio: stop all");
    }
}
