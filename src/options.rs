//! Engine options shared between the control panel and the rendering engine.
//!
//! The rendering engine consumes a nested options object in camelCase JSON.
//! The panel owns a [`SharedOptions`] handle and writes `physics.enabled`;
//! everything else is carried through untouched so the engine sees a complete
//! options document on every apply.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_AVOID_OVERLAP, DEFAULT_CENTRAL_GRAVITY, DEFAULT_DAMPING,
    DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_PHYSICS_ENABLED, DEFAULT_SPRING_CONSTANT,
    DEFAULT_SPRING_LENGTH, DEFAULT_THETA,
};

/// Options handle shared between the panel and its bound change handlers.
pub type SharedOptions = Arc<Mutex<NetworkOptions>>;

/// Barnes-Hut solver parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarnesHutOptions {
    pub theta: f64,
    pub gravitational_constant: f64,
    pub central_gravity: f64,
    pub spring_length: f64,
    pub spring_constant: f64,
    pub damping: f64,
    pub avoid_overlap: f64,
}

impl Default for BarnesHutOptions {
    fn default() -> Self {
        Self {
            theta: DEFAULT_THETA,
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            central_gravity: DEFAULT_CENTRAL_GRAVITY,
            spring_length: DEFAULT_SPRING_LENGTH,
            spring_constant: DEFAULT_SPRING_CONSTANT,
            damping: DEFAULT_DAMPING,
            avoid_overlap: DEFAULT_AVOID_OVERLAP,
        }
    }
}

/// Physics section of the engine options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsOptions {
    pub enabled: bool,
    pub barnes_hut: BarnesHutOptions,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_PHYSICS_ENABLED,
            barnes_hut: BarnesHutOptions::default(),
        }
    }
}

/// Partial physics options merged over the defaults at construction time.
///
/// Fields left as `None` keep their default value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhysicsOverrides {
    pub enabled: Option<bool>,
    pub theta: Option<f64>,
    pub gravitational_constant: Option<f64>,
    pub central_gravity: Option<f64>,
    pub spring_length: Option<f64>,
    pub spring_constant: Option<f64>,
    pub damping: Option<f64>,
    pub avoid_overlap: Option<f64>,
}

impl PhysicsOverrides {
    /// Applies every set field onto `physics`.
    pub fn apply(&self, physics: &mut PhysicsOptions) {
        if let Some(enabled) = self.enabled {
            physics.enabled = enabled;
        }
        let bh = &mut physics.barnes_hut;
        if let Some(theta) = self.theta {
            bh.theta = theta;
        }
        if let Some(gravitational_constant) = self.gravitational_constant {
            bh.gravitational_constant = gravitational_constant;
        }
        if let Some(central_gravity) = self.central_gravity {
            bh.central_gravity = central_gravity;
        }
        if let Some(spring_length) = self.spring_length {
            bh.spring_length = spring_length;
        }
        if let Some(spring_constant) = self.spring_constant {
            bh.spring_constant = spring_constant;
        }
        if let Some(damping) = self.damping {
            bh.damping = damping;
        }
        if let Some(avoid_overlap) = self.avoid_overlap {
            bh.avoid_overlap = avoid_overlap;
        }
    }
}

/// Complete options document handed to the rendering engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkOptions {
    pub physics: PhysicsOptions,
}

impl NetworkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options with the given overrides merged over the defaults.
    pub fn with_overrides(overrides: &PhysicsOverrides) -> Self {
        let mut options = Self::default();
        overrides.apply(&mut options.physics);
        options
    }

    /// Serializes into the engine's camelCase JSON wire format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Wraps the options in the shared handle used by the panel.
    pub fn into_shared(self) -> SharedOptions {
        Arc::new(Mutex::new(self))
    }
}
