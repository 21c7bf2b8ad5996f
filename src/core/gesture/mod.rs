//! The two pointer-gesture recognizers.
//!
//! `DragTracker` and `LongPressDetector` observe the same pointer stream and
//! update disjoint state; recognizing one gesture never cancels the other.
//! They are composed by the interaction engine, not by each other.

pub mod drag;
pub mod event;
pub mod long_press;

pub use drag::{DragReport, DragTracker};
pub use event::PointerEvent;
pub use long_press::LongPressDetector;
