// Capturing a new binding for one slot of an action

use super::action::Action;
use super::binding::Binding;
use super::state::FrameInputState;
use winit::keyboard::KeyCode;

/// Aborts a capture without changing anything
pub const CANCEL_KEY: KeyCode = KeyCode::Escape;

/// Empties the targeted slot
pub const CLEAR_KEY: KeyCode = KeyCode::Backspace;

/// Result of inspecting one frame while waiting for a new binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebindOutcome {
    /// Nothing usable was pressed this frame
    Waiting,
    Cancelled,
    Bound(Binding),
    Cleared,
    /// The captured input was refused, leaving the slot as it was
    Rejected(Binding),
}

impl RebindOutcome {
    /// Whether the capture is over
    pub fn is_finished(&self) -> bool {
        !matches!(self, RebindOutcome::Waiting)
    }
}

/// The slot being rebound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebindRequest {
    pub action: Action,
    pub slot: usize,
}

impl RebindRequest {
    pub fn new(action: Action, slot: usize) -> Self {
        Self { action, slot }
    }

    /// Decide what this frame's input means for the capture.
    ///
    /// A key is only taken when it is the single key struck this frame; otherwise the
    /// first mouse button pressed (left, right, middle, side1, side2) is used.
    pub fn poll(&self, input: &FrameInputState) -> RebindOutcome {
        if input.is_key_pressed(CANCEL_KEY) {
            return RebindOutcome::Cancelled;
        }

        let mut pressed = input.pressed_keys_this_frame();
        if let (Some(key), None) = (pressed.next(), pressed.next()) {
            return if key == CLEAR_KEY {
                RebindOutcome::Cleared
            } else {
                RebindOutcome::Bound(Binding::Key(key))
            };
        }

        input
            .first_mouse_pressed_this_frame()
            .map_or(RebindOutcome::Waiting, |button| {
                RebindOutcome::Bound(Binding::Mouse(button))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::binding::MouseButton;
    use crate::input::device::ScriptedDevice;

    fn setup() -> (ScriptedDevice, FrameInputState) {
        let device = ScriptedDevice::default();
        let state = FrameInputState::new(&device);
        (device, state)
    }

    #[test]
    fn test_waiting_without_input() {
        let (mut device, mut state) = setup();
        state.advance(&mut device);

        let request = RebindRequest::new(Action::Jump, 0);
        assert_eq!(request.poll(&state), RebindOutcome::Waiting);
        assert!(!request.poll(&state).is_finished());
    }

    #[test]
    fn test_single_key_binds() {
        let (mut device, mut state) = setup();
        device.press_key(KeyCode::KeyJ);
        state.advance(&mut device);

        let request = RebindRequest::new(Action::Jump, 0);
        assert_eq!(
            request.poll(&state),
            RebindOutcome::Bound(Binding::key(KeyCode::KeyJ))
        );
    }

    #[test]
    fn test_held_key_is_not_captured() {
        let (mut device, mut state) = setup();
        device.press_key(KeyCode::KeyJ);
        state.advance(&mut device);
        state.advance(&mut device);

        let request = RebindRequest::new(Action::Jump, 0);
        assert_eq!(request.poll(&state), RebindOutcome::Waiting);
    }

    #[test]
    fn test_two_keys_at_once_are_ignored() {
        let (mut device, mut state) = setup();
        device.press_key(KeyCode::KeyJ);
        device.press_key(KeyCode::KeyK);
        state.advance(&mut device);

        let request = RebindRequest::new(Action::Jump, 0);
        assert_eq!(request.poll(&state), RebindOutcome::Waiting);
    }

    #[test]
    fn test_two_keys_fall_back_to_mouse() {
        let (mut device, mut state) = setup();
        device.press_key(KeyCode::KeyJ);
        device.press_key(KeyCode::KeyK);
        device.press_mouse(MouseButton::Side2);
        state.advance(&mut device);

        let request = RebindRequest::new(Action::Jump, 0);
        assert_eq!(
            request.poll(&state),
            RebindOutcome::Bound(Binding::mouse(MouseButton::Side2))
        );
    }

    #[test]
    fn test_escape_cancels() {
        let (mut device, mut state) = setup();
        device.press_key(CANCEL_KEY);
        device.press_mouse(MouseButton::Left);
        state.advance(&mut device);

        let request = RebindRequest::new(Action::Up, 1);
        assert_eq!(request.poll(&state), RebindOutcome::Cancelled);
    }

    #[test]
    fn test_backspace_clears() {
        let (mut device, mut state) = setup();
        device.press_key(CLEAR_KEY);
        state.advance(&mut device);

        let request = RebindRequest::new(Action::Up, 1);
        assert_eq!(request.poll(&state), RebindOutcome::Cleared);
        assert!(request.poll(&state).is_finished());
    }

    #[test]
    fn test_mouse_binds_by_priority() {
        let (mut device, mut state) = setup();
        device.press_mouse(MouseButton::Middle);
        device.press_mouse(MouseButton::Right);
        state.advance(&mut device);

        let request = RebindRequest::new(Action::Accept, 1);
        assert_eq!(
            request.poll(&state),
            RebindOutcome::Bound(Binding::mouse(MouseButton::Right))
        );
    }
}
