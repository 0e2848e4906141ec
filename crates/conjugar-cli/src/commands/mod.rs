pub mod conjugate;
pub mod drill;
pub mod init;
pub mod stats;
pub mod verbs;

use std::path::PathBuf;

use anyhow::Result;

use conjugar_core::config::{load_config_from, ConjugarConfig};
use conjugar_core::storage::FileStore;

/// Load config and open the statistics store it points at.
pub fn open_store(config_path: Option<PathBuf>) -> Result<(ConjugarConfig, FileStore)> {
    let config = load_config_from(config_path.as_deref())?;
    tracing::debug!("using data file {}", config.data_file.display());
    let store = FileStore::open(&config.data_file);
    Ok((config, store))
}
