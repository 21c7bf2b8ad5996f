use crate::core::interaction::state::{EngineTuning, InteractionState};
use crate::core::view::HintVariant;

/// Resolves which hint applies to the current state.
///
/// The idle hint is double-gated: it needs the hint timer still running AND,
/// in decorative mode, a touching pointer must not have pushed the intensity
/// past the suppression threshold. At most one variant applies at a time.
#[must_use]
pub fn resolve_hint(state: &InteractionState, tuning: &EngineTuning) -> HintVariant {
    if state.revealed {
        return HintVariant::None;
    }

    if state.long_press_active {
        return HintVariant::LongPress;
    }

    if !state.hint_visible {
        return HintVariant::None;
    }

    let suppressed = tuning.decorative_mode
        && state.pointer_active
        && state.light_intensity > tuning.hint_suppress_intensity;

    if suppressed {
        HintVariant::None
    } else {
        HintVariant::Idle
    }
}
