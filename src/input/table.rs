// Action to binding table with slot-based rebinding

use super::action::Action;
use super::binding::{Binding, EMPTY_LABEL};
use super::state::FrameInputState;
use log::debug;
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Keys pinned to Accept and Back. Rebinding never places, replaces or clears them.
pub const RESERVED_KEYS: [KeyCode; 2] = [KeyCode::Enter, KeyCode::Escape];

fn is_reserved(binding: &Binding) -> bool {
    binding
        .key_code()
        .is_some_and(|code| RESERVED_KEYS.contains(&code))
}

/// Maps every action to an ordered list of binding slots
#[derive(Debug, Clone, PartialEq)]
pub struct ActionBindingTable {
    bindings: HashMap<Action, Vec<Binding>>,
}

impl ActionBindingTable {
    /// Create a table with every action mapped to no bindings
    pub fn new() -> Self {
        Self {
            bindings: Action::ALL
                .into_iter()
                .map(|action| (action, Vec::new()))
                .collect(),
        }
    }

    /// Create a table holding the autogenerated default bindings
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.reset_to_defaults();
        table
    }

    /// Every action, in the order used for saving and for rebinding rows
    pub fn all_actions(&self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter()
    }

    /// All slots bound to an action
    pub fn get_bindings(&self, action: Action) -> &[Binding] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn slots_mut(&mut self, action: Action) -> &mut Vec<Binding> {
        self.bindings.entry(action).or_default()
    }

    /// Append a binding to an action
    pub fn add_binding(&mut self, action: Action, binding: Binding) {
        self.slots_mut(action).push(binding);
    }

    /// Put a binding into a slot, appending if the slot does not exist yet.
    ///
    /// Unbound and reserved bindings are rejected, and a slot that already holds a
    /// reserved key keeps it. Returns whether the binding was stored.
    pub fn insert_binding(&mut self, action: Action, binding: Binding, slot: usize) -> bool {
        if !binding.is_bound() || is_reserved(&binding) {
            debug!("Rejected binding {binding} for {action}");
            return false;
        }

        let slots = self.slots_mut(action);
        match slots.get_mut(slot) {
            None => slots.push(binding),
            Some(existing) if is_reserved(existing) => {
                debug!("Slot {slot} of {action} holds reserved {existing}, keeping it");
                return false;
            }
            Some(existing) => *existing = binding,
        }
        true
    }

    /// Empty a slot, keeping the positions of later slots. Reserved keys stay, in
    /// which case this returns false.
    pub fn clear_slot(&mut self, action: Action, slot: usize) -> bool {
        match self.slots_mut(action).get_mut(slot) {
            Some(existing) if is_reserved(existing) => {
                debug!("Slot {slot} of {action} holds reserved {existing}, keeping it");
                false
            }
            Some(existing) => {
                *existing = Binding::Unbound;
                true
            }
            None => true,
        }
    }

    /// Remove every binding from every action
    pub fn clear(&mut self) {
        for slots in self.bindings.values_mut() {
            slots.clear();
        }
    }

    /// Replace all bindings with the autogenerated defaults
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        super::config::apply_config(self, super::config::DEFAULT_CONFIG);
    }

    /// Display string of the first slot, used for hint text
    pub fn first_binding_label(&self, action: Action) -> String {
        self.get_bindings(action)
            .first()
            .map_or_else(|| EMPTY_LABEL.to_string(), ToString::to_string)
    }

    /// Check if any binding of an action is held
    pub fn is_down(&self, action: Action, input: &FrameInputState) -> bool {
        self.get_bindings(action).iter().any(|b| input.is_down(*b))
    }

    /// Check if any binding of an action is not held
    pub fn is_up(&self, action: Action, input: &FrameInputState) -> bool {
        self.get_bindings(action).iter().any(|b| input.is_up(*b))
    }

    /// Check if any binding of an action went down this frame
    pub fn is_pressed(&self, action: Action, input: &FrameInputState) -> bool {
        self.get_bindings(action).iter().any(|b| input.is_pressed(*b))
    }

    /// Check if any binding of an action went up this frame
    pub fn is_released(&self, action: Action, input: &FrameInputState) -> bool {
        self.get_bindings(action).iter().any(|b| input.is_released(*b))
    }
}

impl Default for ActionBindingTable {
    fn default() -> Self {
        Self::new()
    }
}
