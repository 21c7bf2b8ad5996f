use crate::core::data::point::SurfacePoint;

/// Raw single-pointer input as produced by the host platform.
///
/// Both gesture recognizers consume the same stream; a second simultaneous
/// pointer is undefined behavior and must be filtered out by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(SurfacePoint),
    Move(SurfacePoint),
    Up,
}
