//! The control panel binder.
//!
//! [`ControlPanel`] is the orchestrator tying the three seams together: it
//! resets controls to their defaults through a [`ControlRegistry`], writes
//! the physics flag into the shared [`NetworkOptions`], and pushes the
//! updated options into the injected [`RenderEngine`].

use std::sync::Arc;

use log::{debug, warn};

use crate::config::DEFAULT_PHYSICS_ENABLED;
use crate::controls::{ControlId, ControlRegistry, ControlValue};
use crate::engine::RenderEngine;
use crate::options::{NetworkOptions, SharedOptions};

/// Binds the panel controls to a rendering engine instance.
///
/// The options object and the engine handle are injected at construction and
/// shared with every change handler the panel registers; the panel never
/// reaches for ambient globals.
pub struct ControlPanel {
    options: SharedOptions,
    engine: Arc<dyn RenderEngine>,
}

impl ControlPanel {
    /// Creates a panel around an existing shared options object.
    pub fn new(options: SharedOptions, engine: Arc<dyn RenderEngine>) -> Self {
        Self { options, engine }
    }

    /// Creates a panel with freshly defaulted options.
    pub fn with_defaults(engine: Arc<dyn RenderEngine>) -> Self {
        Self::new(NetworkOptions::new().into_shared(), engine)
    }

    /// Handle to the options shared with the engine and the change handlers.
    pub fn options(&self) -> &SharedOptions {
        &self.options
    }

    /// Snapshot of the current options.
    pub fn options_snapshot(&self) -> NetworkOptions {
        *self.options.lock()
    }

    /// Current state of the physics flag.
    pub fn physics_enabled(&self) -> bool {
        self.options.lock().physics.enabled
    }

    pub fn engine(&self) -> &Arc<dyn RenderEngine> {
        &self.engine
    }

    /// Resets every control to its default value.
    ///
    /// Controls absent from the registry are skipped with a warning; the
    /// remaining controls are still reset.
    pub fn reset_all(&self, controls: &mut dyn ControlRegistry) {
        for id in ControlId::ALL {
            let written = match id.default_value() {
                ControlValue::Bool(value) => controls.set_bool(id, value),
                ControlValue::Number(value) => controls.set_number(id, value),
            };
            if !written {
                warn!("control {id} not present, skipping reset");
            }
        }
    }

    /// Resets every control, restores the physics default, and applies the
    /// updated options to the engine.
    pub fn reset_physics(&self, controls: &mut dyn ControlRegistry) {
        self.reset_all(controls);
        let mut options = self.options.lock();
        options.physics.enabled = DEFAULT_PHYSICS_ENABLED;
        self.engine.apply_options(&options);
    }

    /// One-time setup once the host UI is ready: resets every control, then
    /// binds the physics toggle so that each change event writes the new
    /// checked state into the options and applies them to the engine.
    ///
    /// Each toggle triggers exactly one apply; toggles are never coalesced.
    pub fn initialize(&self, controls: &mut dyn ControlRegistry) {
        self.reset_all(controls);

        let options = Arc::clone(&self.options);
        let engine = Arc::clone(&self.engine);
        let bound = controls.on_change(
            ControlId::SwitchPhysics,
            Box::new(move |value| {
                let Some(enabled) = value.as_bool() else {
                    return;
                };
                let mut options = options.lock();
                options.physics.enabled = enabled;
                engine.apply_options(&options);
            }),
        );
        if bound {
            debug!("bound physics toggle to engine {}", self.engine.name());
        } else {
            warn!(
                "control {} not present, physics toggle not bound",
                ControlId::SwitchPhysics
            );
        }
    }
}
