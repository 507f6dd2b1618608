//! `cw serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use cw_config::{CliSettings, Config};
use cw_server::{run_server, server_config_from_cw_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover cw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding persisted content (overrides config).
    #[arg(long, env = "CW_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// College name supplied by the hosting site (overrides config).
    #[arg(long)]
    college_name: Option<String>,

    /// Enable verbose output (request and storage logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            storage_dir: self.storage_dir,
            college_name: self.college_name,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        std::fs::create_dir_all(&config.storage_resolved.dir).map_err(|e| {
            CliError::Server(format!("Failed to create storage directory: {e}"))
        })?;

        if config.config_path.is_none() {
            output.warning("No cw.toml found, using default configuration");
        }
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Storage: {} (key {})",
            config.storage_resolved.dir.display(),
            config.storage_resolved.key
        ));
        if let Some(name) = &config.site.college_name {
            output.info(&format!("College name: {name}"));
        }

        let server_config = server_config_from_cw_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
