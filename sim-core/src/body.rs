use crate::error::{Error, Result};
use glam::DVec2;
use std::fmt;
use std::str::FromStr;

/// Kind tag of a body.
///
/// Stars and planets obey identical physics; the tag only travels with
/// the body so the renderer and the loader can name it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
}

impl BodyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive: `Star`, `STAR` and `star` all parse.
impl FromStr for BodyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "star" => Ok(BodyKind::Star),
            "planet" => Ok(BodyKind::Planet),
            other => Err(other.to_string()),
        }
    }
}

/// One point mass of the simulated system.
///
/// `pos`, `vel` and `force` are mutated in place by the step driver.
/// `force` is transient: it is rebuilt from zero at the start of every
/// step. `mass` is fixed at construction and only readable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    /// Display radius in pixels.
    pub radius: f64,
    /// Lowercased color name, interpreted by the renderer.
    pub color: String,
    mass: f64,
    pub pos: DVec2,
    pub vel: DVec2,
    pub force: DVec2,
}

impl Body {
    /// Creates a body after checking its physical preconditions.
    ///
    /// ### Errors
    /// [`Error::InvalidBody`] if `mass` is not a finite positive number,
    /// or if `radius`, `pos` or `vel` hold a non-finite value.
    pub fn new(
        kind: BodyKind,
        radius: f64,
        color: &str,
        mass: f64,
        pos: DVec2,
        vel: DVec2,
    ) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidBody(format!(
                "{kind} mass must be a finite positive number, got {mass}"
            )));
        }
        if !radius.is_finite() {
            return Err(Error::InvalidBody(format!(
                "{kind} radius must be finite, got {radius}"
            )));
        }
        if !pos.is_finite() || !vel.is_finite() {
            return Err(Error::InvalidBody(format!(
                "{kind} state must be finite, got pos={pos} vel={vel}"
            )));
        }

        Ok(Self {
            kind,
            radius,
            color: color.to_lowercase(),
            mass,
            pos,
            vel,
            force: DVec2::ZERO,
        })
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Largest of `|x|` and `|y|`.
    #[inline]
    pub fn max_abs_coordinate(&self) -> f64 {
        self.pos.abs().max_element()
    }
}
