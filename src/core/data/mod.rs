pub mod point;
pub mod surface_extent;

pub use point::SurfacePoint;
pub use surface_extent::{SurfaceExtent, SurfaceExtentError};
