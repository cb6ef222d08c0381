// Double-buffered per-frame input state

use super::binding::{Binding, MouseButton};
use super::device::{DeviceSnapshot, InputDevice};
use glam::Vec2;
use log::debug;
use winit::keyboard::KeyCode;

/// Pointer handling applied after each frame's sample.
///
/// If both flags are set, snapping to the center wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerConfinement {
    /// Warp the pointer back to the window center every frame (mouse-look)
    pub snap_to_center: bool,

    /// Keep the pointer inside the window's client area
    pub stay_in_window: bool,
}

impl PointerConfinement {
    pub fn snap_to_center() -> Self {
        Self {
            snap_to_center: true,
            stay_in_window: false,
        }
    }

    pub fn stay_in_window() -> Self {
        Self {
            snap_to_center: false,
            stay_in_window: true,
        }
    }
}

/// Device state for the current and previous frame.
///
/// All control queries are gated on window focus: while the window is in the
/// background every query reports `false` and the snapshots stay frozen.
#[derive(Debug, Clone)]
pub struct FrameInputState {
    /// Snapshot taken on the previous advance
    previous: DeviceSnapshot,

    /// Snapshot taken on the latest advance
    current: DeviceSnapshot,

    /// Pointer movement between the two snapshots, measured before confinement
    mouse_delta: Vec2,

    /// Focus as reported on the latest advance
    focused: bool,

    confinement: PointerConfinement,
}

impl FrameInputState {
    /// Create the state from an initial sample. Both snapshots start identical.
    pub fn new<D: InputDevice + ?Sized>(device: &D) -> Self {
        let initial = device.sample();
        Self {
            previous: initial.clone(),
            current: initial,
            mouse_delta: Vec2::ZERO,
            focused: device.has_focus(),
            confinement: PointerConfinement::default(),
        }
    }

    /// Step to a new frame. Call once per tick before anything queries input.
    pub fn advance<D: InputDevice + ?Sized>(&mut self, device: &mut D) {
        let focused = device.has_focus();
        if focused != self.focused {
            debug!("Input focus {}", if focused { "gained" } else { "lost" });
            self.focused = focused;
        }

        if !focused {
            return;
        }

        self.previous = std::mem::replace(&mut self.current, device.sample());
        self.mouse_delta = self.current.pointer - self.previous.pointer;

        self.confine_pointer(device);
    }

    fn confine_pointer<D: InputDevice + ?Sized>(&mut self, device: &mut D) {
        if self.confinement.snap_to_center {
            device.set_pointer_position(device.window_size() * 0.5);
            self.current.pointer = device.pointer_position();
        } else if self.confinement.stay_in_window {
            let clamped = self.current.pointer.clamp(Vec2::ZERO, device.window_size());
            if clamped != self.current.pointer {
                device.set_pointer_position(clamped);
            }
            self.current.pointer = device.pointer_position();
        }
    }

    /// Held state of a control in a snapshot; `None` for an unbound control
    fn held(snapshot: &DeviceSnapshot, control: Binding) -> Option<bool> {
        match control {
            Binding::Key(key) => Some(snapshot.is_key_down(key)),
            Binding::Mouse(button) => Some(snapshot.is_mouse_down(button)),
            Binding::Unbound => None,
        }
    }

    /// Check if a control is held this frame
    pub fn is_down(&self, control: Binding) -> bool {
        self.focused && Self::held(&self.current, control) == Some(true)
    }

    /// Check if a control is not held this frame
    pub fn is_up(&self, control: Binding) -> bool {
        self.focused && Self::held(&self.current, control) == Some(false)
    }

    /// Check if a control went down this frame
    pub fn is_pressed(&self, control: Binding) -> bool {
        self.focused
            && Self::held(&self.current, control) == Some(true)
            && Self::held(&self.previous, control) == Some(false)
    }

    /// Check if a control went up this frame
    pub fn is_released(&self, control: Binding) -> bool {
        self.focused
            && Self::held(&self.current, control) == Some(false)
            && Self::held(&self.previous, control) == Some(true)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.is_down(Binding::Key(key))
    }

    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.is_pressed(Binding::Key(key))
    }

    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.is_down(Binding::Mouse(button))
    }

    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.is_pressed(Binding::Mouse(button))
    }

    /// Keys that went down this frame (held now, not held last frame)
    pub fn pressed_keys_this_frame(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.current
            .keys
            .iter()
            .copied()
            .filter(move |key| self.is_key_pressed(*key))
    }

    /// The mouse button that went down this frame, by rebinding priority
    pub fn first_mouse_pressed_this_frame(&self) -> Option<MouseButton> {
        MouseButton::PRIORITY
            .into_iter()
            .find(|button| self.is_mouse_pressed(*button))
    }

    /// Pointer position after confinement
    pub fn mouse_position(&self) -> Vec2 {
        self.current.pointer
    }

    /// Pointer movement since the previous frame
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Scroll wheel movement since the previous frame
    pub fn scroll_delta(&self) -> i32 {
        self.current.scroll.wrapping_sub(self.previous.scroll)
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn confinement(&self) -> PointerConfinement {
        self.confinement
    }

    pub fn set_confinement(&mut self, confinement: PointerConfinement) {
        self.confinement = confinement;
    }

    pub fn current(&self) -> &DeviceSnapshot {
        &self.current
    }

    pub fn previous(&self) -> &DeviceSnapshot {
        &self.previous
    }
}
