//! Figure dimensions in the engine's CSS-like syntax.
//!
//! The engine accepts widths and heights either as pixel counts (`"800px"`)
//! or as percentages of the embedding container (`"100%"`). Anything else is
//! rejected up front rather than passed through to the engine.

use std::fmt;
use std::str::FromStr;

use crate::config::{DEFAULT_FIGURE_HEIGHT, DEFAULT_FIGURE_WIDTH};

/// Error raised for a malformed figure dimension.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dimension must be either a percentage or a pixel value, e.g. '100%' or '100px', got {0:?}")]
pub struct InvalidDimension(pub String);

/// A width or height of the rendered figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Absolute size in pixels.
    Pixels(f64),
    /// Size relative to the embedding container, in percent.
    Percent(f64),
}

impl Dimension {
    /// Absolute pixel size from a whole pixel count.
    pub fn pixels(count: u32) -> Self {
        Dimension::Pixels(f64::from(count))
    }

    /// Relative size from a fraction, so `0.5` becomes `50%`.
    pub fn fraction(fraction: f64) -> Self {
        Dimension::Percent(fraction * 100.0)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(count) => write!(f, "{count}px"),
            Dimension::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl FromStr for Dimension {
    type Err = InvalidDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(count) = s.strip_suffix("px") {
            return count
                .trim()
                .parse::<f64>()
                .map(Dimension::Pixels)
                .map_err(|_| InvalidDimension(s.to_owned()));
        }
        if let Some(percent) = s.strip_suffix('%') {
            return percent
                .trim()
                .parse::<f64>()
                .map(Dimension::Percent)
                .map_err(|_| InvalidDimension(s.to_owned()));
        }
        // Bare integers are treated as pixel counts.
        if let Ok(count) = s.parse::<i64>() {
            return Ok(Dimension::Pixels(count as f64));
        }
        Err(InvalidDimension(s.to_owned()))
    }
}

/// Width and height of the rendered figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIGURE_WIDTH,
            height: DEFAULT_FIGURE_HEIGHT,
        }
    }
}

impl FigureSize {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// Parses a size from the engine's string syntax.
    pub fn parse(width: &str, height: &str) -> Result<Self, InvalidDimension> {
        Ok(Self {
            width: width.parse()?,
            height: height.parse()?,
        })
    }
}
