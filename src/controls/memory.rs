//! In-memory control registry.
//!
//! Backs the panel when no real toolkit is wired up, and doubles as the test
//! harness: tests seed controls, then drive [`MemoryControls::emit`] or
//! [`MemoryControls::change_bool`] in place of real user input.

use std::collections::HashMap;

use crate::controls::{ChangeHandler, ControlId, ControlRegistry, ControlValue};

/// Registry holding control state in a hash map.
#[derive(Default)]
pub struct MemoryControls {
    values: HashMap<ControlId, ControlValue>,
    handlers: HashMap<ControlId, Vec<ChangeHandler>>,
}

impl MemoryControls {
    /// Creates an empty registry with no controls present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing every panel control at its default.
    pub fn with_all_controls() -> Self {
        let mut controls = Self::new();
        for id in ControlId::ALL {
            controls.values.insert(id, id.default_value());
        }
        controls
    }

    /// Adds a boolean control (present from now on).
    pub fn insert_bool(&mut self, id: ControlId, value: bool) {
        self.values.insert(id, ControlValue::Bool(value));
    }

    /// Adds a numeric control (present from now on).
    pub fn insert_number(&mut self, id: ControlId, value: f64) {
        self.values.insert(id, ControlValue::Number(value));
    }

    /// Whether a control exists in this registry.
    pub fn contains(&self, id: ControlId) -> bool {
        self.values.contains_key(&id)
    }

    /// Fires the change handlers bound to `id` with its current value.
    ///
    /// This is the in-memory stand-in for the toolkit dispatching a change
    /// event; handlers run synchronously, one after the other.
    pub fn emit(&mut self, id: ControlId) {
        let Some(value) = self.values.get(&id).copied() else {
            return;
        };
        if let Some(handlers) = self.handlers.get_mut(&id) {
            for handler in handlers.iter_mut() {
                handler(value);
            }
        }
    }

    /// Simulates a user toggling a boolean control: writes the value, then
    /// fires its change handlers.
    pub fn change_bool(&mut self, id: ControlId, value: bool) {
        if self.set_bool(id, value) {
            self.emit(id);
        }
    }

    /// Simulates a user moving a slider: writes the value, then fires its
    /// change handlers.
    pub fn change_number(&mut self, id: ControlId, value: f64) {
        if self.set_number(id, value) {
            self.emit(id);
        }
    }

    /// Number of handlers bound to `id`.
    pub fn handler_count(&self, id: ControlId) -> usize {
        self.handlers.get(&id).map_or(0, Vec::len)
    }
}

impl ControlRegistry for MemoryControls {
    fn bool_value(&self, id: ControlId) -> Option<bool> {
        self.values.get(&id).and_then(ControlValue::as_bool)
    }

    fn number_value(&self, id: ControlId) -> Option<f64> {
        self.values.get(&id).and_then(ControlValue::as_number)
    }

    fn set_bool(&mut self, id: ControlId, value: bool) -> bool {
        match self.values.get_mut(&id) {
            Some(slot @ ControlValue::Bool(_)) => {
                *slot = ControlValue::Bool(value);
                true
            }
            _ => false,
        }
    }

    fn set_number(&mut self, id: ControlId, value: f64) -> bool {
        match self.values.get_mut(&id) {
            Some(slot @ ControlValue::Number(_)) => {
                *slot = ControlValue::Number(value);
                true
            }
            _ => false,
        }
    }

    fn on_change(&mut self, id: ControlId, handler: ChangeHandler) -> bool {
        if !self.values.contains_key(&id) {
            return false;
        }
        self.handlers.entry(id).or_default().push(handler);
        true
    }
}
