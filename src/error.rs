use thiserror::Error;

/// Rejected logger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `Config::out` was not set
    #[error("destination is a mandatory field")]
    MissingDestination,
}

/// Unknown color mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid color mode, expected one of `auto`, `always`, `never`")]
pub struct ParseColorModeError;

/// Unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(pub String);
