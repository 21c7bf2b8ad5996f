pub mod feedback;
pub mod surface;

pub use feedback::ConsoleFeedback;
pub use surface::ConsoleSurface;
