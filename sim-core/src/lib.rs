//! Core 2-D gravitational N-body simulation library.
//!
//! Main components:
//! - [`body`] — point-mass bodies and their kind tag.
//! - [`phases`] — force accumulation and explicit Euler integration.
//! - [`session`] — owned body sequence, simulation clock and step driver.
//! - [`scale`] — simulation-space to pixel scale factor.
//! - [`loader`] — initial-conditions text format.
//! - [`energy`] — mechanical energy diagnostics.
//! - [`config`] — physics configuration.
//! - [`error`] — crate error type.
//! - [`types`] — shared type aliases and IDs.

pub mod body;
pub mod config;
pub mod energy;
pub mod error;
pub mod loader;
pub mod phases;
pub mod scale;
pub mod session;
pub mod types;

pub use body::{Body, BodyKind};
pub use config::Config;
pub use error::{Error, Result};
pub use session::Session;
