//! Viewer settings loaded from a TOML file.
//!
//! ```toml
//! [physics]
//! gravitational_constant = 6.67408e-11
//!
//! [view]
//! width = 1000.0
//! height = 900.0
//! systems_dir = "initial_system"
//! ```

use serde::Deserialize;
use sim_core::Config;
use std::path::{Path, PathBuf};

/// Window and control defaults for the viewer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub width: f32,
    pub height: f32,
    /// Directory listed in the file panel.
    pub systems_dir: PathBuf,
    /// Initial position of the speed slider, in `[-10, 10]`.
    pub speed: f64,
    /// Target time between repaints, in seconds.
    pub frame_period: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 900.0,
            systems_dir: PathBuf::from("initial_system"),
            speed: 0.0,
            frame_period: 1.0 / 60.0,
        }
    }
}

/// Contents of the `--config` file.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: Config,
    pub view: ViewSettings,
}

impl Settings {
    pub fn from_toml_str(text: &str) -> sim_core::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> sim_core::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
