//! The session controller: intro playback, hand-off, steady-state loop.
//!
//! Follows the ports & adapters pattern: the controller consumes a
//! `FeedbackSink` and a `RenderSurfacePort` and never touches hardware
//! directly, so tests can substitute recording stubs.

pub mod controller;
pub mod demo;
pub mod events;

pub use controller::SessionController;
pub use demo::run_scripted_session;
pub use events::SurfaceEvent;
