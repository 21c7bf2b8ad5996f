use crate::core::data::point::SurfacePoint;
use crate::core::data::surface_extent::SurfaceExtent;

/// Minimum intensity while a pointer is touching, regardless of distance.
/// Keeps the feedback perceptible even at the surface edge.
pub const INTENSITY_FLOOR: f64 = 0.3;

/// Maps a pointer position to light intensity in `[INTENSITY_FLOOR, 1.0]`.
///
/// Intensity falls off linearly with distance from the surface center and
/// reaches 1.0 exactly at the center.
#[must_use]
pub fn light_intensity(position: SurfacePoint, extent: &SurfaceExtent) -> f64 {
    let distance = position.distance_to(extent.center());
    let falloff = 1.0 - distance / extent.max_light_distance();
    let safe_falloff = if falloff.is_finite() { falloff } else { 0.0 };

    safe_falloff.max(INTENSITY_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::{light_intensity, INTENSITY_FLOOR};
    use crate::core::data::point::SurfacePoint;
    use crate::core::data::surface_extent::SurfaceExtent;

    const EPSILON: f64 = 1e-12;

    fn test_extent() -> SurfaceExtent {
        SurfaceExtent::new(400.0, 300.0).unwrap()
    }

    #[test]
    fn intensity_at_center_is_one() {
        let extent = test_extent();

        assert_eq!(light_intensity(extent.center(), &extent), 1.0);
    }

    #[test]
    fn intensity_is_one_only_at_center() {
        let extent = test_extent();
        let near_center = SurfacePoint { x: 200.1, y: 150.0 };

        assert!(light_intensity(near_center, &extent) < 1.0);
    }

    #[test]
    fn intensity_falls_off_linearly_with_distance() {
        let extent = test_extent();
        // max_light_distance = 150; half way out means intensity 0.5.
        let half_way = SurfacePoint { x: 200.0, y: 75.0 };

        assert!((light_intensity(half_way, &extent) - 0.5).abs() <= EPSILON);
    }

    #[test]
    fn floor_applies_at_ninety_percent_distance() {
        let extent = test_extent();
        // d / max_distance = 0.9 would give 0.1 without the floor.
        let far = SurfacePoint { x: 200.0, y: 150.0 - 135.0 };

        assert_eq!(light_intensity(far, &extent), INTENSITY_FLOOR);
    }

    #[test]
    fn floor_applies_beyond_max_distance() {
        let extent = test_extent();
        let outside = SurfacePoint { x: -5000.0, y: -5000.0 };

        assert_eq!(light_intensity(outside, &extent), INTENSITY_FLOOR);
    }

    #[test]
    fn intensity_stays_within_bounds_across_the_surface() {
        let extent = test_extent();

        for x in 0..=40 {
            for y in 0..=30 {
                let point = SurfacePoint {
                    x: f64::from(x) * 10.0,
                    y: f64::from(y) * 10.0,
                };
                let intensity = light_intensity(point, &extent);

                assert!(intensity >= INTENSITY_FLOOR);
                assert!(intensity <= 1.0);
            }
        }
    }
}
