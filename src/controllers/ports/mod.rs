pub mod feedback_sink;
pub mod render_surface;

pub use feedback_sink::{FeedbackSink, SinkVolumes};
pub use render_surface::RenderSurfacePort;
