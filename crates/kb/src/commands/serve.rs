//! `kb serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use kb_config::{CliSettings, Config};
use kb_server::{run_server, server_config_from_kb_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover kb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Base URL the site is served under (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output (show asset warnings and request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            base_url: self.base_url,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on http://{}:{}{}",
            config.server.host, config.server.port, config.site.base_url
        ));
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        } else {
            output.info("Config: defaults (no kb.toml found)");
        }
        if !config.homepage.feature_cards {
            output.info("Feature cards: disabled");
        }

        tracing::info!(
            config = ?config.config_path,
            assets = %config.build_resolved.asset_dir.display(),
            feature_cards = config.homepage.feature_cards,
            "Configuration loaded"
        );

        let server_config = server_config_from_kb_config(&config, version.to_owned(), self.verbose);
        run_server(server_config).await?;

        Ok(())
    }
}
