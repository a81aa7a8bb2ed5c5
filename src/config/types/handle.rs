//! Process-wide config handle.
//!
//! The store is published once at startup and never replaced. Readers get a
//! cheap `Arc` clone and need no coordination.

use crate::config::{ConfigError, ConfigStore};
use std::sync::{Arc, OnceLock};

/// Global config storage.
static CONFIG: OnceLock<Arc<ConfigStore>> = OnceLock::new();

/// Publish the loaded config for the rest of the process.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on a second call; the first
/// published store stays in place.
pub fn init_config(config: ConfigStore) -> Result<Arc<ConfigStore>, ConfigError> {
    let arc = Arc::new(config);
    CONFIG
        .set(Arc::clone(&arc))
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(arc)
}

/// Published config, if `init_config` has run.
#[inline]
pub fn try_cfg() -> Option<Arc<ConfigStore>> {
    CONFIG.get().cloned()
}

/// Published config.
///
/// # Panics
/// Panics if called before [`init_config`]; reading config before startup
/// finished is a programming error.
#[inline]
pub fn cfg() -> Arc<ConfigStore> {
    try_cfg().expect("config read before init_config()")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the handle is process-global and write-once.
    #[test]
    fn test_init_once() {
        let first = init_config(ConfigStore::load().unwrap()).unwrap();
        assert!(Arc::ptr_eq(&first, &cfg()));

        let second = init_config(ConfigStore::load().unwrap());
        assert!(matches!(second, Err(ConfigError::AlreadyInitialized)));
        assert!(Arc::ptr_eq(&first, &cfg()));
        assert_eq!(try_cfg().unwrap().site.title, "TheJsTutorials");
    }
}
