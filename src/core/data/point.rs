#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    #[must_use]
    pub fn distance_to(self, other: SurfacePoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
