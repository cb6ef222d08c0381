// Input manager - owns frame state, bindings and their config file

use super::action::Action;
use super::binding::Binding;
use super::config::{ConfigError, ConfigStore, LoadReport};
use super::device::InputDevice;
use super::rebind::{RebindOutcome, RebindRequest};
use super::state::{FrameInputState, PointerConfinement};
use super::table::ActionBindingTable;
use log::info;

/// Main input object, created by the application root and handed to screens
pub struct InputManager {
    /// Where bindings are loaded from and saved to
    store: ConfigStore,

    /// Action to binding slots
    bindings: ActionBindingTable,

    /// Device state for this and the previous frame
    state: FrameInputState,

    /// Slot waiting for a new binding, if any
    rebind: Option<RebindRequest>,

    /// Skips recorded by the latest load
    last_load: LoadReport,
}

impl InputManager {
    /// Create a manager with an empty binding table
    pub fn new<D: InputDevice + ?Sized>(store: ConfigStore, device: &D) -> Self {
        Self {
            store,
            bindings: ActionBindingTable::new(),
            state: FrameInputState::new(device),
            rebind: None,
            last_load: LoadReport::default(),
        }
    }

    /// Create a manager and load its bindings, bootstrapping the config file if needed
    pub fn load<D: InputDevice + ?Sized>(store: ConfigStore, device: &D) -> Result<Self, ConfigError> {
        let mut manager = Self::new(store, device);
        manager.reload()?;
        Ok(manager)
    }

    /// Advance to a new frame. Call once per tick before any input query.
    ///
    /// While a rebind is in progress, this frame's input is applied to it and the
    /// outcome is returned.
    pub fn update<D: InputDevice + ?Sized>(&mut self, device: &mut D) -> Option<RebindOutcome> {
        self.state.advance(device);

        let request = self.rebind?;
        let outcome = match request.poll(&self.state) {
            RebindOutcome::Bound(binding) => {
                if self.bindings.insert_binding(request.action, binding, request.slot) {
                    RebindOutcome::Bound(binding)
                } else {
                    RebindOutcome::Rejected(binding)
                }
            }
            RebindOutcome::Cleared => {
                if self.bindings.clear_slot(request.action, request.slot) {
                    RebindOutcome::Cleared
                } else {
                    RebindOutcome::Rejected(Binding::Unbound)
                }
            }
            outcome => outcome,
        };

        match outcome {
            RebindOutcome::Waiting => {}
            RebindOutcome::Cancelled => {
                info!("Rebinding {} slot {} cancelled", request.action, request.slot);
            }
            RebindOutcome::Bound(binding) => {
                info!("Bound {} slot {} to {binding}", request.action, request.slot);
            }
            RebindOutcome::Cleared => {
                info!("Cleared {} slot {}", request.action, request.slot);
            }
            RebindOutcome::Rejected(binding) => {
                info!(
                    "Rejected {binding} for {} slot {}, keeping it unchanged",
                    request.action, request.slot
                );
            }
        }

        if outcome.is_finished() {
            self.rebind = None;
        }
        Some(outcome)
    }

    /// Start waiting for a new binding for one slot of an action
    pub fn begin_rebind(&mut self, action: Action, slot: usize) {
        self.rebind = Some(RebindRequest::new(action, slot));
    }

    pub fn cancel_rebind(&mut self) {
        self.rebind = None;
    }

    pub fn is_rebinding(&self) -> bool {
        self.rebind.is_some()
    }

    /// The slot currently being rebound
    pub fn rebind_target(&self) -> Option<RebindRequest> {
        self.rebind
    }

    /// Check if an action is held
    pub fn is_down(&self, action: Action) -> bool {
        self.bindings.is_down(action, &self.state)
    }

    /// Check if an action is not held
    pub fn is_up(&self, action: Action) -> bool {
        self.bindings.is_up(action, &self.state)
    }

    /// Check if an action was pressed this frame
    pub fn is_pressed(&self, action: Action) -> bool {
        self.bindings.is_pressed(action, &self.state)
    }

    /// Check if an action was released this frame
    pub fn is_released(&self, action: Action) -> bool {
        self.bindings.is_released(action, &self.state)
    }

    /// Label of an action's first binding, for hint text
    pub fn first_binding_label(&self, action: Action) -> String {
        self.bindings.first_binding_label(action)
    }

    /// Slots bound to an action, for rebinding rows
    pub fn get_bindings(&self, action: Action) -> &[Binding] {
        self.bindings.get_bindings(action)
    }

    pub fn bindings(&self) -> &ActionBindingTable {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut ActionBindingTable {
        &mut self.bindings
    }

    pub fn state(&self) -> &FrameInputState {
        &self.state
    }

    pub fn set_confinement(&mut self, confinement: PointerConfinement) {
        self.state.set_confinement(confinement);
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Skips recorded by the latest load
    pub fn last_load_report(&self) -> &LoadReport {
        &self.last_load
    }

    /// Write the bindings to the config file
    pub fn save(&self) -> Result<(), ConfigError> {
        self.store.save(&self.bindings)
    }

    /// Throw away the current bindings and load them from the config file again
    pub fn reload(&mut self) -> Result<&LoadReport, ConfigError> {
        let mut table = ActionBindingTable::new();
        self.last_load = self.store.load_into(&mut table)?;
        self.bindings = table;
        Ok(&self.last_load)
    }
}
