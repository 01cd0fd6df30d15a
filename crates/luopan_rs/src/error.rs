//! Error type for the convenience layer.

use std::path::PathBuf;

use luopan_chart::ChartError;
use luopan_time::TimeError;
use thiserror::Error;

/// Errors from the convenience API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LuopanError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Configuration text could not be parsed or holds an invalid value.
    #[error("config: {0}")]
    Config(String),
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// [`crate::init`] was called more than once.
    #[error("engine config already initialized")]
    AlreadyInitialized,
}

impl LuopanError {
    /// Whether the caller supplied a bad value (as opposed to an environment problem).
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Chart(e) => e.is_invalid_input(),
            Self::Time(e) => !matches!(e, TimeError::OutOfRange),
            Self::Config(_) | Self::Io { .. } | Self::AlreadyInitialized => false,
        }
    }
}

impl From<toml::de::Error> for LuopanError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_errors_pass_through() {
        let e = LuopanError::from(ChartError::InvalidPeriod(0));
        assert!(e.is_invalid_input());
        assert_eq!(e.to_string(), "period 0 outside 1..=9");
    }

    #[test]
    fn config_errors_are_not_input_errors() {
        assert!(!LuopanError::Config("bad".into()).is_invalid_input());
        assert!(!LuopanError::AlreadyInitialized.is_invalid_input());
    }
}
