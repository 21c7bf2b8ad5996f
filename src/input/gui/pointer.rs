use crate::core::data::point::SurfacePoint;
use crate::core::gesture::event::PointerEvent;
use winit::event::{ElementState, MouseButton};

/// Translates winit mouse events into the single-pointer stream the core
/// consumes. Only the left button counts; moves while the button is up are
/// dropped so the core never sees a move without a preceding down.
#[derive(Debug, Default)]
pub struct PointerInputState {
    down: bool,
}

impl PointerInputState {
    pub fn handle_mouse_input(
        &mut self,
        state: ElementState,
        button: MouseButton,
        position: SurfacePoint,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed if !self.down => {
                self.down = true;
                Some(PointerEvent::Down(position))
            }
            ElementState::Released if self.down => {
                self.down = false;
                Some(PointerEvent::Up)
            }
            _ => None,
        }
    }

    pub fn handle_cursor_moved(&mut self, position: SurfacePoint) -> Option<PointerEvent> {
        self.down.then_some(PointerEvent::Move(position))
    }

    #[must_use]
    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
