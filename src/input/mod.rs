// Input handling system
//
// This module samples keyboard and mouse state once per frame, maps named actions
// to physical bindings, and keeps those bindings in a hand-editable config file
// that can be changed from inside the application.
//
// ## Architecture
//
// - `action`: The bindable actions
// - `binding`: Keys and mouse buttons an action can be bound to
// - `keys`: Key names used in config files
// - `device`: Device sampling boundary and a scripted device
// - `winit_device`: Device fed by winit window events
// - `state`: Double-buffered frame state with edge detection
// - `table`: Action to binding slots, with reserved keys
// - `config`: Config file format and persistence
// - `rebind`: Capturing a new binding for a slot
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use action_input::input::{Action, ConfigStore, InputManager, WinitDevice};
//
// let mut device = WinitDevice::new(window.clone());
// let mut input = InputManager::load(ConfigStore::new("."), &device)?;
//
// // In your event loop, feed window events to the device
// device.handle_window_event(&event);
//
// // At the start of each tick, advance the input state
// input.update(&mut device);
//
// if input.is_pressed(Action::Accept) {
//     // Accept was pressed this tick
// }
// ```

pub mod action;
pub mod binding;
pub mod config;
pub mod device;
pub mod keys;
pub mod manager;
pub mod rebind;
pub mod state;
pub mod table;
pub mod winit_device;

// Re-export commonly used types
pub use action::Action;
pub use binding::{Binding, MouseButton, EMPTY_LABEL};
pub use config::{ConfigError, ConfigStore, LoadReport};
pub use device::{DeviceSnapshot, InputDevice, ScriptedDevice};
pub use manager::InputManager;
pub use rebind::{RebindOutcome, RebindRequest};
pub use state::{FrameInputState, PointerConfinement};
pub use table::{ActionBindingTable, RESERVED_KEYS};
pub use winit_device::WinitDevice;
