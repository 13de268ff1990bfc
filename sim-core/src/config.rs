use crate::error::Result;
use serde::Deserialize;

/// Gravitational constant used by the bundled initial-condition files,
/// which are given in SI units.
pub const DEFAULT_GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;

/// Physics configuration shared by the step driver and the scale calculator.
///
/// Every field has a default, so a TOML file only needs to name the
/// values it overrides:
///
/// ```toml
/// gravitational_constant = 1.0
/// target_extent = 400.0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `G` in `F = G * m1 * m2 / r^2`.
    pub gravitational_constant: f64,
    /// Pixels per unit used until a scale can be derived from body positions.
    pub default_scale: f64,
    /// Pixel distance from the viewport center that the outermost body maps to.
    pub target_extent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            default_scale: 1.0,
            target_extent: 450.0,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
