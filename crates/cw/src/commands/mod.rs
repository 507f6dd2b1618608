//! CLI command implementations.

mod content;
mod nav;
mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use cw_config::{CliSettings, Config};
use cw_site::ContentStore;
use cw_storage::{FsStore, KeyValueStore};

use crate::error::CliError;

pub(crate) use content::{RenderArgs, ResetArgs, SetArgs, ShowArgs};
pub(crate) use nav::NavArgs;
pub(crate) use serve::ServeArgs;

/// Options shared by every command that opens the content store.
#[derive(Args)]
pub(crate) struct StoreArgs {
    /// Path to configuration file (default: auto-discover cw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding persisted content (overrides config).
    #[arg(long, env = "CW_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,
}

impl StoreArgs {
    /// Load configuration with the storage directory override applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            storage_dir: self.storage_dir.clone(),
            ..CliSettings::default()
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Open and load the content store described by the configuration.
    pub(crate) fn open_store(&self) -> Result<(Config, ContentStore), CliError> {
        let config = self.load_config()?;
        let storage: Arc<dyn KeyValueStore> =
            Arc::new(FsStore::new(config.storage_resolved.dir.clone()));
        let mut store = ContentStore::new(storage, config.storage_resolved.key.clone());
        store.load();
        Ok((config, store))
    }
}
