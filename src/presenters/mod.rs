pub mod console;
pub mod haptic_gate;
#[cfg(feature = "gui")]
pub mod pixels;

pub use console::{ConsoleFeedback, ConsoleSurface};
pub use haptic_gate::HapticCapabilityGate;
