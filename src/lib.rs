//! Force Panel – interactive controls for force-directed graph renderers.
//!
//! This crate binds a small control panel (a physics on/off toggle plus the
//! Barnes-Hut parameter sliders) to a running graph rendering engine. The
//! host UI, the shared options object, and the engine are all reached through
//! injected seams, so the same binder drives a real toolkit or an in-memory
//! registry in tests.

pub mod config;
pub mod controls;
pub mod engine;
pub mod figure;
pub mod graph;
pub mod options;
pub mod panel;

pub use controls::{
    ChangeHandler, ControlId, ControlRegistry, ControlValue, MemoryControls, UnknownControl,
};
pub use engine::{NullEngine, RecordingEngine, RenderEngine};
pub use figure::{Dimension, FigureSize, InvalidDimension};
pub use graph::{EdgeData, GraphData, NodeData};
pub use options::{
    BarnesHutOptions, NetworkOptions, PhysicsOptions, PhysicsOverrides, SharedOptions,
};
pub use panel::ControlPanel;

use std::sync::Arc;

/// High-level convenience wrapper that owns both the registry and the panel.
pub struct Dashboard<R: ControlRegistry> {
    controls: R,
    panel: ControlPanel,
}

impl<R: ControlRegistry> Dashboard<R> {
    /// Creates a dashboard with freshly defaulted options.
    pub fn new(controls: R, engine: Arc<dyn RenderEngine>) -> Self {
        Self {
            controls,
            panel: ControlPanel::with_defaults(engine),
        }
    }

    /// Creates a dashboard with the given overrides merged over the default
    /// options.
    pub fn with_overrides(
        controls: R,
        engine: Arc<dyn RenderEngine>,
        overrides: &PhysicsOverrides,
    ) -> Self {
        let options = NetworkOptions::with_overrides(overrides).into_shared();
        Self {
            controls,
            panel: ControlPanel::new(options, engine),
        }
    }

    /// Runs the panel's one-time setup against the owned registry.
    pub fn initialize(&mut self) {
        self.panel.initialize(&mut self.controls);
    }

    /// Resets every control to its default value.
    pub fn reset_all(&mut self) {
        self.panel.reset_all(&mut self.controls);
    }

    /// Resets controls and physics, applying the result to the engine.
    pub fn reset_physics(&mut self) {
        self.panel.reset_physics(&mut self.controls);
    }

    /// Hands a node/edge dataset to the engine.
    pub fn load_graph(&self, graph: &GraphData) {
        self.panel.engine().load_graph(graph);
    }

    /// Current state of the physics flag.
    pub fn physics_enabled(&self) -> bool {
        self.panel.physics_enabled()
    }

    /// Snapshot of the current options.
    pub fn options_snapshot(&self) -> NetworkOptions {
        self.panel.options_snapshot()
    }

    /// Current options in the engine's JSON wire format.
    pub fn options_json(&self) -> Result<String, serde_json::Error> {
        self.panel.options_snapshot().to_json()
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn controls(&self) -> &R {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut R {
        &mut self.controls
    }
}
