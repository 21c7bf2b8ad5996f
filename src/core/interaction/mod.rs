pub mod engine;
pub mod hints;
pub mod state;

pub use engine::InteractionEngine;
pub use hints::resolve_hint;
pub use state::{EngineTuning, InteractionState, INITIAL_SPREAD_RADIUS};
