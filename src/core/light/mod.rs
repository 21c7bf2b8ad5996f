pub mod buffer;
pub mod intensity;

pub use buffer::{shade_light_buffer, LightBufferError, LightSpot, LIGHT_CHANNELS};
pub use intensity::{light_intensity, INTENSITY_FLOOR};
