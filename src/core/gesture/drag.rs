use crate::core::gesture::event::PointerEvent;
use crate::core::data::point::SurfacePoint;

/// Tracks whether a pointer is down and where it last was.
///
/// Runs alongside `LongPressDetector` on the same event stream; neither
/// recognizer cancels the other.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: bool,
    position: Option<SurfacePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragReport {
    /// The pointer transitioned from up to down with this event.
    pub began: bool,
    /// The pointer transitioned from down to up with this event.
    pub ended: bool,
    /// Position to track, present when the event carried one while active.
    pub position: Option<SurfacePoint>,
}

impl DragTracker {
    pub fn step(&mut self, event: PointerEvent) -> DragReport {
        match event {
            PointerEvent::Down(position) => {
                let began = !self.active;
                self.active = true;
                self.position = Some(position);

                DragReport {
                    began,
                    ended: false,
                    position: Some(position),
                }
            }
            PointerEvent::Move(position) => {
                if !self.active {
                    // A move without a preceding down carries no drag.
                    return DragReport::default();
                }
                self.position = Some(position);

                DragReport {
                    began: false,
                    ended: false,
                    position: Some(position),
                }
            }
            PointerEvent::Up => {
                if !self.active {
                    return DragReport::default();
                }
                self.active = false;

                DragReport {
                    began: false,
                    ended: true,
                    position: None,
                }
            }
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn position(&self) -> Option<SurfacePoint> {
        self.position
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{DragReport, DragTracker};
    use crate::core::data::point::SurfacePoint;
    use crate::core::gesture::event::PointerEvent;

    fn point(x: f64, y: f64) -> SurfacePoint {
        SurfacePoint { x, y }
    }

    #[test]
    fn down_begins_exactly_once_per_press() {
        let mut tracker = DragTracker::default();

        let first = tracker.step(PointerEvent::Down(point(1.0, 2.0)));
        let second = tracker.step(PointerEvent::Down(point(3.0, 4.0)));

        assert!(first.began);
        assert!(!second.began);
        assert!(tracker.is_active());
    }

    #[test]
    fn move_while_active_tracks_position() {
        let mut tracker = DragTracker::default();
        tracker.step(PointerEvent::Down(point(1.0, 1.0)));

        let report = tracker.step(PointerEvent::Move(point(5.0, 6.0)));

        assert_eq!(report.position, Some(point(5.0, 6.0)));
        assert_eq!(tracker.position(), Some(point(5.0, 6.0)));
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut tracker = DragTracker::default();

        let report = tracker.step(PointerEvent::Move(point(5.0, 6.0)));

        assert_eq!(report, DragReport::default());
        assert!(!tracker.is_active());
    }

    #[test]
    fn up_ends_an_active_drag() {
        let mut tracker = DragTracker::default();
        tracker.step(PointerEvent::Down(point(1.0, 1.0)));

        let report = tracker.step(PointerEvent::Up);

        assert!(report.ended);
        assert!(!tracker.is_active());
    }

    #[test]
    fn repeated_up_is_idempotent() {
        let mut tracker = DragTracker::default();
        tracker.step(PointerEvent::Down(point(1.0, 1.0)));
        tracker.step(PointerEvent::Up);

        let report = tracker.step(PointerEvent::Up);

        assert!(!report.ended);
        assert!(!report.began);
    }

    #[test]
    fn last_position_survives_release() {
        let mut tracker = DragTracker::default();
        tracker.step(PointerEvent::Down(point(1.0, 1.0)));
        tracker.step(PointerEvent::Move(point(9.0, 9.0)));
        tracker.step(PointerEvent::Up);

        assert_eq!(tracker.position(), Some(point(9.0, 9.0)));
    }

    #[test]
    fn clear_restores_defaults() {
        let mut tracker = DragTracker::default();
        tracker.step(PointerEvent::Down(point(1.0, 1.0)));

        tracker.clear();

        assert!(!tracker.is_active());
        assert_eq!(tracker.position(), None);
    }

    #[test]
    fn press_after_release_begins_again() {
        let mut tracker = DragTracker::default();
        tracker.step(PointerEvent::Down(point(1.0, 1.0)));
        tracker.step(PointerEvent::Up);

        let report = tracker.step(PointerEvent::Down(point(2.0, 2.0)));

        assert!(report.began);
    }
}
