use thiserror::Error;

/// Malformed tab registry. Fatal: the host is never built from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tab registry is empty")]
    Empty,

    #[error("tab #{position} has no name")]
    MissingName { position: usize },

    #[error("tab '{name}' has no view")]
    MissingView { name: String },
}

/// Programmatic selection of a tab that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tab index {index} is out of range (registry has {len} tabs)")]
pub struct RangeError {
    pub index: usize,
    pub len: usize,
}
