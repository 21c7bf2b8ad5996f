use crate::controllers::session::events::SurfaceEvent;

/// The visual capability consumed by the session controller.
///
/// Receives start/end values and nominal durations; interpolating between
/// successive values is the surface's responsibility.
pub trait RenderSurfacePort {
    fn present(&self, event: SurfaceEvent);
}
