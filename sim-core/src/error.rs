use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while building a system of bodies.
///
/// The physics step itself never returns one of these; degenerate
/// configurations are handled locally and logged instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A body failed its construction preconditions (mass, finiteness).
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A data line of an initial-conditions file could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The TOML configuration could not be deserialized.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
