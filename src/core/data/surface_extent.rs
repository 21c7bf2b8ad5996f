use crate::core::data::point::SurfacePoint;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceExtentError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for SurfaceExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "surface extent must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for SurfaceExtentError {}

/// Dimensions of the interactive surface in surface coordinates.
///
/// Both sides are guaranteed positive and finite, so the derived values
/// (`center`, `max_light_distance`, `cover_radius`) are always usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceExtent {
    width: f64,
    height: f64,
}

impl SurfaceExtent {
    pub fn new(width: f64, height: f64) -> Result<Self, SurfaceExtentError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(SurfaceExtentError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn center(&self) -> SurfacePoint {
        SurfacePoint {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    /// Distance from the center at which the light falloff reaches zero.
    #[must_use]
    pub fn max_light_distance(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    /// Radius large enough for a centered circle to cover the whole surface.
    #[must_use]
    pub fn cover_radius(&self) -> f64 {
        self.width.max(self.height)
    }
}
