// Device sampling boundary between the input core and the platform

use super::binding::MouseButton;
use glam::Vec2;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Raw state of every physical control at one instant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceSnapshot {
    /// Keys currently held
    pub keys: HashSet<KeyCode>,

    /// Held state per mouse button, indexed by [`MouseButton::index`]
    pub mouse: [bool; MouseButton::COUNT],

    /// Pointer position in window pixels
    pub pointer: Vec2,

    /// Scroll wheel accumulator (120 units per wheel notch)
    pub scroll: i32,
}

impl DeviceSnapshot {
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse[button.index()]
    }
}

/// A source of device state, sampled once per frame.
///
/// Implemented by [`WinitDevice`](super::WinitDevice) for real windows and by
/// [`ScriptedDevice`] for headless hosts and tests.
pub trait InputDevice {
    /// Whether the host window currently has input focus
    fn has_focus(&self) -> bool;

    /// Current raw state of all controls
    fn sample(&self) -> DeviceSnapshot;

    /// Current pointer position, re-read after a warp
    fn pointer_position(&self) -> Vec2;

    /// Window client area size in pixels
    fn window_size(&self) -> Vec2;

    /// Move the device pointer to a window position
    fn set_pointer_position(&mut self, position: Vec2);
}

/// Device whose state is driven programmatically
#[derive(Debug, Clone)]
pub struct ScriptedDevice {
    focused: bool,
    live: DeviceSnapshot,
    size: Vec2,
    warps: usize,
}

impl ScriptedDevice {
    /// Create a focused device with the given window size and nothing held
    pub fn new(size: Vec2) -> Self {
        Self {
            focused: true,
            live: DeviceSnapshot::default(),
            size,
            warps: 0,
        }
    }

    pub fn press_key(&mut self, key: KeyCode) {
        self.live.keys.insert(key);
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.live.keys.remove(&key);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        self.live.mouse[button.index()] = true;
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        self.live.mouse[button.index()] = false;
    }

    /// Release every key and button
    pub fn release_all(&mut self) {
        self.live.keys.clear();
        self.live.mouse = [false; MouseButton::COUNT];
    }

    pub fn move_pointer(&mut self, position: Vec2) {
        self.live.pointer = position;
    }

    /// Add wheel units to the scroll accumulator
    pub fn scroll(&mut self, amount: i32) {
        self.live.scroll = self.live.scroll.wrapping_add(amount);
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Number of pointer warps requested so far
    pub fn warp_count(&self) -> usize {
        self.warps
    }
}

impl Default for ScriptedDevice {
    fn default() -> Self {
        Self::new(Vec2::new(1280.0, 720.0))
    }
}

impl InputDevice for ScriptedDevice {
    fn has_focus(&self) -> bool {
        self.focused
    }

    fn sample(&self) -> DeviceSnapshot {
        self.live.clone()
    }

    fn pointer_position(&self) -> Vec2 {
        self.live.pointer
    }

    fn window_size(&self) -> Vec2 {
        self.size
    }

    fn set_pointer_position(&mut self, position: Vec2) {
        self.live.pointer = position;
        self.warps += 1;
    }
}
