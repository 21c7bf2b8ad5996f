use crate::core::view::{OffsetTransition, VisualFrame};

/// Visual-parameter updates streamed to the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// A new steady-state frame from the interaction engine.
    Frame(VisualFrame),
    /// A scheduled intro text transition.
    IntroOffsets(OffsetTransition),
}
