//! Control identifiers, values, and the registry seam over the host UI.

pub mod memory;

pub use memory::MemoryControls;

use std::fmt;
use std::str::FromStr;

use crate::config::{
    DEFAULT_AVOID_OVERLAP, DEFAULT_CENTRAL_GRAVITY, DEFAULT_GRAVITATIONAL_CONSTANT,
    DEFAULT_PHYSICS_ENABLED, DEFAULT_SPRING_CONSTANT, DEFAULT_SPRING_LENGTH,
};

/// Identifier of a panel control.
///
/// The string forms match the element ids used by the stock HTML panel, so a
/// DOM-backed registry can map them one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    SwitchPhysics,
    SliderGravitationalConstant,
    SliderCentralGravity,
    SliderSpringLength,
    SliderSpringConstant,
    SliderAvoidOverlap,
}

impl ControlId {
    /// Every control the panel manages, in reset order.
    pub const ALL: [ControlId; 6] = [
        ControlId::SwitchPhysics,
        ControlId::SliderGravitationalConstant,
        ControlId::SliderCentralGravity,
        ControlId::SliderSpringLength,
        ControlId::SliderSpringConstant,
        ControlId::SliderAvoidOverlap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlId::SwitchPhysics => "switchPhysics",
            ControlId::SliderGravitationalConstant => "sliderGravitationalConstant",
            ControlId::SliderCentralGravity => "sliderCentralGravity",
            ControlId::SliderSpringLength => "sliderSpringLength",
            ControlId::SliderSpringConstant => "sliderSpringConstant",
            ControlId::SliderAvoidOverlap => "sliderAvoidOverlap",
        }
    }

    /// Startup value for this control.
    pub fn default_value(&self) -> ControlValue {
        match self {
            ControlId::SwitchPhysics => ControlValue::Bool(DEFAULT_PHYSICS_ENABLED),
            ControlId::SliderGravitationalConstant => {
                ControlValue::Number(DEFAULT_GRAVITATIONAL_CONSTANT)
            }
            ControlId::SliderCentralGravity => ControlValue::Number(DEFAULT_CENTRAL_GRAVITY),
            ControlId::SliderSpringLength => ControlValue::Number(DEFAULT_SPRING_LENGTH),
            ControlId::SliderSpringConstant => ControlValue::Number(DEFAULT_SPRING_CONSTANT),
            ControlId::SliderAvoidOverlap => ControlValue::Number(DEFAULT_AVOID_OVERLAP),
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlId {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownControl(s.to_owned()))
    }
}

/// Error returned when a string id does not name a panel control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control id: {0:?}")]
pub struct UnknownControl(pub String);

/// Current value of a control: checked state for the toggle, unitless scalar
/// for the sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    Number(f64),
}

impl ControlValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ControlValue::Bool(v) => Some(*v),
            ControlValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ControlValue::Number(v) => Some(*v),
            ControlValue::Bool(_) => None,
        }
    }
}

/// Callback invoked with a control's new value after each change event.
pub type ChangeHandler = Box<dyn FnMut(ControlValue) + Send>;

/// Capability interface over the host UI's input controls.
///
/// Lookups return `None` (and writes return `false`) for controls absent from
/// the host document; callers are expected to skip those rather than fail.
pub trait ControlRegistry {
    /// Checked state of a boolean control, if present.
    fn bool_value(&self, id: ControlId) -> Option<bool>;

    /// Scalar value of a numeric control, if present.
    fn number_value(&self, id: ControlId) -> Option<f64>;

    /// Writes a checked state. Returns `false` if the control is absent.
    fn set_bool(&mut self, id: ControlId, value: bool) -> bool;

    /// Writes a scalar value. Returns `false` if the control is absent.
    fn set_number(&mut self, id: ControlId, value: f64) -> bool;

    /// Subscribes `handler` to change events on `id`. Returns `false` if the
    /// control is absent and nothing was bound. The subscription lives as
    /// long as the registry.
    fn on_change(&mut self, id: ControlId, handler: ChangeHandler) -> bool;
}
