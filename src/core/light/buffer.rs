use rayon::prelude::*;

use crate::core::data::point::SurfacePoint;
use std::error::Error;
use std::fmt;

/// Bytes per pixel in the shaded output buffer (RGBA).
pub const LIGHT_CHANNELS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightBufferError {
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for LightBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "light buffer size {} does not match expected size {}",
                    buffer_size, expected_size
                )
            }
        }
    }
}

impl Error for LightBufferError {}

/// A radial light to rasterize: where it sits, how bright it is at the
/// center, and how far the falloff extends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSpot {
    pub position: SurfacePoint,
    pub intensity: f64,
    pub radius: f64,
}

/// Shades a radial falloff into an RGBA buffer, one parallel chunk per row.
///
/// Pixels outside the spot radius are black; alpha is always opaque. A spot
/// with non-positive or non-finite radius shades the whole buffer black.
pub fn shade_light_buffer(
    spot: &LightSpot,
    width: u32,
    height: u32,
    buffer: &mut [u8],
) -> Result<(), LightBufferError> {
    let expected_size = (width as usize) * (height as usize) * LIGHT_CHANNELS;
    if buffer.len() != expected_size {
        return Err(LightBufferError::BoundsMismatch {
            expected_size,
            buffer_size: buffer.len(),
        });
    }

    if buffer.is_empty() {
        return Ok(());
    }

    let lit = spot.radius.is_finite() && spot.radius > 0.0;
    let row_size = (width as usize) * LIGHT_CHANNELS;

    buffer
        .par_chunks_mut(row_size)
        .enumerate()
        .for_each(|(row_index, row)| {
            for column in 0..width as usize {
                let level = if lit {
                    let pixel = SurfacePoint {
                        x: column as f64 + 0.5,
                        y: row_index as f64 + 0.5,
                    };
                    let falloff =
                        (1.0 - pixel.distance_to(spot.position) / spot.radius).max(0.0);
                    (falloff * spot.intensity.clamp(0.0, 1.0) * 255.0).round() as u8
                } else {
                    0
                };

                let offset = column * LIGHT_CHANNELS;
                row[offset] = level;
                row[offset + 1] = level;
                row[offset + 2] = level;
                row[offset + 3] = 0xFF;
            }
        });

    Ok(())
}
