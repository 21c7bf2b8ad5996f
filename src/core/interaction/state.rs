use crate::core::data::point::SurfacePoint;
use std::time::Duration;

/// Light radius before a reveal spreads it across the surface.
pub const INITIAL_SPREAD_RADIUS: f64 = 150.0;

/// Live state of the steady-state interaction loop.
///
/// `light_intensity` is derived from the pointer position, never set
/// independently; it is zero whenever the pointer is up and nothing has been
/// revealed. `spreading` implies `revealed`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    pub pointer_active: bool,
    pub pointer_position: SurfacePoint,
    pub light_intensity: f64,
    pub long_press_active: bool,
    pub revealed: bool,
    pub spreading: bool,
    pub spread_radius: f64,
    pub hint_visible: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            pointer_active: false,
            pointer_position: SurfacePoint::default(),
            light_intensity: 0.0,
            long_press_active: false,
            revealed: false,
            spreading: false,
            spread_radius: INITIAL_SPREAD_RADIUS,
            hint_visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineTuning {
    pub long_press_duration: Duration,
    pub hint_display_duration: Duration,
    /// Above this intensity the idle hint is suppressed while touching.
    pub hint_suppress_intensity: f64,
    pub haptic_rate_hz: u32,
    pub pulse_sharpness: f64,
    pub reveal_pulse_intensity: f64,
    pub reset_pulse_intensity: f64,
    /// External theming flag; when false the idle hint is never suppressed.
    pub decorative_mode: bool,
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            long_press_duration: Duration::from_millis(500),
            hint_display_duration: Duration::from_millis(3000),
            hint_suppress_intensity: 0.7,
            haptic_rate_hz: 32,
            pulse_sharpness: 0.5,
            reveal_pulse_intensity: 1.0,
            reset_pulse_intensity: 0.5,
            decorative_mode: true,
        }
    }
}
