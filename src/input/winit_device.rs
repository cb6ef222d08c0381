// InputDevice backed by winit window events

use super::binding::MouseButton;
use super::device::{DeviceSnapshot, InputDevice};
use glam::Vec2;
use log::{debug, warn};
use std::sync::Arc;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

/// Scroll accumulator units per wheel notch
pub const SCROLL_UNITS_PER_LINE: f32 = 120.0;

/// Tracks live device state from window events. The frame state samples it once per tick.
pub struct WinitDevice {
    /// Window used for cursor warps; `None` when running headless
    window: Option<Arc<Window>>,

    live: DeviceSnapshot,
    focused: bool,
    size: Vec2,
}

impl WinitDevice {
    /// Create a device for a window
    pub fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        Self {
            focused: window.has_focus(),
            size: Vec2::new(size.width as f32, size.height as f32),
            window: Some(window),
            live: DeviceSnapshot::default(),
        }
    }

    /// Create a focused device with no window attached
    pub fn headless(size: Vec2) -> Self {
        Self {
            window: None,
            live: DeviceSnapshot::default(),
            focused: true,
            size,
        }
    }

    /// Feed a window event into the live state
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key_changed(code, event.state);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = MouseButton::from_winit(*button) {
                    self.mouse_changed(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => self.scrolled(*delta),
            WindowEvent::Focused(focused) => self.focus_changed(*focused),
            WindowEvent::Resized(size) => {
                self.resized(Vec2::new(size.width as f32, size.height as f32));
            }
            _ => {}
        }
    }

    pub fn key_changed(&mut self, code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.live.keys.insert(code);
            }
            ElementState::Released => {
                self.live.keys.remove(&code);
            }
        }
    }

    pub fn mouse_changed(&mut self, button: MouseButton, state: ElementState) {
        self.live.mouse[button.index()] = state == ElementState::Pressed;
    }

    pub fn cursor_moved(&mut self, position: Vec2) {
        self.live.pointer = position;
    }

    pub fn scrolled(&mut self, delta: MouseScrollDelta) {
        let units = match delta {
            MouseScrollDelta::LineDelta(_, lines) => lines * SCROLL_UNITS_PER_LINE,
            MouseScrollDelta::PixelDelta(pixels) => pixels.y as f32,
        };
        self.live.scroll = self.live.scroll.wrapping_add(units.round() as i32);
    }

    pub fn focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Releases are not delivered to a background window
            self.live.keys.clear();
            self.live.mouse = [false; MouseButton::COUNT];
        }
    }

    pub fn resized(&mut self, size: Vec2) {
        self.size = size;
    }
}

impl InputDevice for WinitDevice {
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
        if let Some(window) = &self.window {
            let target = PhysicalPosition::new(f64::from(position.x), f64::from(position.y));
            if let Err(err) = window.set_cursor_position(target) {
                warn!("Failed to move cursor: {err}");
                return;
            }
            debug!("Moved cursor to {position}");
        }
        self.live.pointer = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press_and_release() {
        let mut device = WinitDevice::headless(Vec2::new(640.0, 480.0));
        device.key_changed(KeyCode::KeyW, ElementState::Pressed);
        assert!(device.sample().is_key_down(KeyCode::KeyW));

        // Repeats keep the key held
        device.key_changed(KeyCode::KeyW, ElementState::Pressed);
        assert_eq!(device.sample().keys.len(), 1);

        device.key_changed(KeyCode::KeyW, ElementState::Released);
        assert!(!device.sample().is_key_down(KeyCode::KeyW));
    }

    #[test]
    fn test_mouse_buttons() {
        let mut device = WinitDevice::headless(Vec2::new(640.0, 480.0));
        device.mouse_changed(MouseButton::Side1, ElementState::Pressed);
        assert!(device.sample().is_mouse_down(MouseButton::Side1));

        device.mouse_changed(MouseButton::Side1, ElementState::Released);
        assert!(!device.sample().is_mouse_down(MouseButton::Side1));
    }

    #[test]
    fn test_scroll_units() {
        let mut device = WinitDevice::headless(Vec2::new(640.0, 480.0));
        device.scrolled(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(device.sample().scroll, 120);

        device.scrolled(MouseScrollDelta::LineDelta(0.0, -2.0));
        assert_eq!(device.sample().scroll, -120);

        device.scrolled(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 30.0)));
        assert_eq!(device.sample().scroll, -90);
    }

    #[test]
    fn test_cursor_and_resize() {
        let mut device = WinitDevice::headless(Vec2::new(640.0, 480.0));
        device.cursor_moved(Vec2::new(12.0, 34.0));
        device.resized(Vec2::new(1024.0, 768.0));

        assert_eq!(device.pointer_position(), Vec2::new(12.0, 34.0));
        assert_eq!(device.window_size(), Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let mut device = WinitDevice::headless(Vec2::new(640.0, 480.0));
        device.key_changed(KeyCode::KeyA, ElementState::Pressed);
        device.mouse_changed(MouseButton::Left, ElementState::Pressed);

        device.focus_changed(false);
        assert!(!device.has_focus());
        let snapshot = device.sample();
        assert!(snapshot.keys.is_empty());
        assert!(!snapshot.is_mouse_down(MouseButton::Left));
    }

    #[test]
    fn test_headless_warp_moves_pointer() {
        let mut device = WinitDevice::headless(Vec2::new(640.0, 480.0));
        device.set_pointer_position(Vec2::new(320.0, 240.0));
        assert_eq!(device.pointer_position(), Vec2::new(320.0, 240.0));
    }
}
