//! Seam between the panel and the rendering engine instance.

use parking_lot::Mutex;

use crate::graph::GraphData;
use crate::options::NetworkOptions;

/// Handle to a running render/simulation instance.
///
/// The panel never owns the engine's lifecycle; it only pushes options (and
/// optionally graph data) into it. Applies are synchronous and take effect on
/// the engine's next frame.
pub trait RenderEngine: Send + Sync {
    fn name(&self) -> &str;

    /// Applies a complete options document to the running instance.
    fn apply_options(&self, options: &NetworkOptions);

    /// Optional hook for replacing the node/edge data of the instance.
    fn load_graph(&self, _graph: &GraphData) {}
}

/// Engine that discards everything. Useful when the panel is driven headless.
#[derive(Debug, Default)]
pub struct NullEngine;

impl NullEngine {
    pub fn new() -> Self {
        Self
    }
}

impl RenderEngine for NullEngine {
    fn name(&self) -> &str {
        "null"
    }

    fn apply_options(&self, _options: &NetworkOptions) {}
}

/// Engine that records every apply for diagnostics and tests.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    applied: Mutex<Vec<NetworkOptions>>,
    graphs_loaded: Mutex<usize>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `apply_options` calls observed so far.
    pub fn apply_count(&self) -> usize {
        self.applied.lock().len()
    }

    /// The most recently applied options document, if any.
    pub fn last_applied(&self) -> Option<NetworkOptions> {
        self.applied.lock().last().copied()
    }

    /// Every applied options document, oldest first.
    pub fn applied(&self) -> Vec<NetworkOptions> {
        self.applied.lock().clone()
    }

    /// Number of `load_graph` calls observed so far.
    pub fn graph_load_count(&self) -> usize {
        *self.graphs_loaded.lock()
    }
}

impl RenderEngine for RecordingEngine {
    fn name(&self) -> &str {
        "recording"
    }

    fn apply_options(&self, options: &NetworkOptions) {
        self.applied.lock().push(*options);
    }

    fn load_graph(&self, _graph: &GraphData) {
        *self.graphs_loaded.lock() += 1;
    }
}
