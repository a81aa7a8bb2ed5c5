//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod show;

pub use args::{Cli, Commands};

use anyhow::Result;
use std::path::{Path, PathBuf};

use blogconf::config::{ConfigStore, find_config_file};
use blogconf::log;

/// Load `config_name` (searched upward from cwd) or the built-in values.
///
/// Returns the store and the file it was read from.
pub fn load_config(config_name: &Path) -> Result<(ConfigStore, Option<PathBuf>)> {
    match find_config_file(config_name) {
        Some(path) => Ok((ConfigStore::from_path(&path)?, Some(path))),
        None => {
            log!(
                "config";
                "{} not found, using built-in values",
                config_name.display()
            );
            Ok((ConfigStore::load()?, None))
        }
    }
}
