//! Default values for the control panel and the engine physics options.

use crate::figure::Dimension;

/// Whether force-directed layout is enabled at startup.
pub const DEFAULT_PHYSICS_ENABLED: bool = true;

/// Default Barnes-Hut gravitational constant (node-to-node repulsion).
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = -2000.0;

/// Default pull towards the layout center.
pub const DEFAULT_CENTRAL_GRAVITY: f64 = 0.3;

/// Default rest length of edge springs.
pub const DEFAULT_SPRING_LENGTH: f64 = 95.0;

/// Default stiffness of edge springs.
pub const DEFAULT_SPRING_CONSTANT: f64 = 0.04;

/// Default node overlap avoidance factor (0 disables it).
pub const DEFAULT_AVOID_OVERLAP: f64 = 0.0;

/// Default Barnes-Hut approximation parameter.
pub const DEFAULT_THETA: f64 = 0.5;

/// Default velocity damping applied by the layout solver.
pub const DEFAULT_DAMPING: f64 = 0.09;

/// Default figure width: the full width of the embedding container.
pub const DEFAULT_FIGURE_WIDTH: Dimension = Dimension::Percent(100.0);

/// Default figure height.
pub const DEFAULT_FIGURE_HEIGHT: Dimension = Dimension::Pixels(800.0);
