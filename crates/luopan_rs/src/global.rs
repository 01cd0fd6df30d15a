//! Process-wide engine configuration.
//!
//! Set once with [`init`]; read-only afterwards. Functions that take no
//! explicit config read it from here, or use the default when unset.

use std::sync::OnceLock;

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::LuopanError;

static CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Install the global config. Fails if one is already installed.
pub fn init(config: EngineConfig) -> Result<(), LuopanError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| LuopanError::AlreadyInitialized)?;
    debug!("engine config initialized");
    Ok(())
}

pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

/// The global config, or the default when [`init`] was never called.
pub fn config() -> EngineConfig {
    CONFIG.get().copied().unwrap_or_default()
}
