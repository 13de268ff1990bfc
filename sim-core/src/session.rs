//! A loaded system of bodies together with its simulation clock.
//!
//! [`Session`] is the single owner of the body sequence. The event loop
//! drives it through [`Session::step`]; the renderer only ever borrows
//! the bodies through [`Session::bodies`].

use crate::{
    body::Body,
    config::Config,
    energy,
    error::Result,
    loader::{self, LoadReport, SkippedLine},
    phases, scale,
};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Session {
    bodies: Vec<Body>,
    time: f64,
    scale: f64,
    cfg: Config,
    source: Option<PathBuf>,
    skipped: Vec<SkippedLine>,
}

impl Session {
    /// Creates a session at time zero and derives the initial scale
    /// from the bodies' positions and `cfg.target_extent`.
    pub fn new(bodies: Vec<Body>, cfg: Config) -> Self {
        let scale = scale::compute_scale(&bodies, cfg.target_extent, cfg.default_scale);
        Self {
            bodies,
            time: 0.0,
            scale,
            cfg,
            source: None,
            skipped: Vec::new(),
        }
    }

    /// Loads an initial-conditions file into a fresh session.
    pub fn load(path: impl AsRef<Path>, cfg: Config) -> Result<Self> {
        let path = path.as_ref();
        let LoadReport { bodies, skipped } = loader::load_system(path)?;
        let mut session = Self::new(bodies, cfg);
        session.source = Some(path.to_path_buf());
        session.skipped = skipped;
        Ok(session)
    }

    /// Replaces the bodies with the contents of `path`, resets the clock
    /// and recomputes the scale.
    ///
    /// On error the current session is left untouched.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<()> {
        *self = Self::load(path, self.cfg)?;
        Ok(())
    }

    /// Advances the system by `dt` simulated seconds.
    ///
    /// Runs the force phase, then the integration phase, then adds `dt`
    /// to the clock. A non-finite `dt` is ignored.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() {
            warn!("ignoring non-finite time step {dt}");
            return;
        }
        phases::step(&mut self.bodies, dt, self.cfg.gravitational_constant);
        self.time += dt;
        debug!("t = {:.3} after step of {dt}", self.time);
    }

    /// Recomputes the scale for a new target extent, keeping the current
    /// scale if the bodies have no spatial extent.
    pub fn rescale(&mut self, target_extent: f64) -> f64 {
        self.scale = scale::compute_scale(&self.bodies, target_extent, self.scale);
        info!("scale set to {} px/unit", self.scale);
        self.scale
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Elapsed simulated time since the last load.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Pixels per simulation unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Unknown-kind lines skipped by the last load.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn kinetic_energy(&self) -> f64 {
        energy::kinetic_energy(&self.bodies)
    }

    pub fn potential_energy(&self) -> f64 {
        energy::potential_energy(&self.bodies, self.cfg.gravitational_constant)
    }

    pub fn total_energy(&self) -> f64 {
        energy::total_energy(&self.bodies, self.cfg.gravitational_constant)
    }
}
