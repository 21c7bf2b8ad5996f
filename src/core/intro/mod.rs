pub mod phase;
pub mod script;
pub mod timeline;

pub use phase::IntroPhase;
pub use script::IntroScript;
pub use timeline::{IntroEffect, IntroTimeline};
