//! `kb build` command implementation.

use std::path::PathBuf;

use clap::Args;
use kb_assets::AssetDir;
use kb_config::{CliSettings, Config};
use kb_site::{BuildConfig, SiteLinks, StaticSiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (default: build/ next to kb.toml).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Base URL the site will be served under (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Fail when an image reference cannot be resolved.
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover kb.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            base_url: self.base_url,
            strict_assets: self.strict.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let output_dir = &config.build_resolved.output_dir;

        output.info(&format!("Output: {}", output_dir.display()));
        output.info(&format!("Base URL: {}", config.site.base_url));
        tracing::info!(
            config = ?config.config_path,
            assets = %config.build_resolved.asset_dir.display(),
            strict = config.build_resolved.strict_assets,
            "Building site"
        );

        let build_config = BuildConfig {
            site: kb_server::site_info(&config),
            links: SiteLinks::new(&config.site.base_url, config.site.trailing_slash),
            asset_dir: AssetDir::new(&config.build_resolved.asset_dir),
            strict_assets: config.build_resolved.strict_assets,
        };

        let report = StaticSiteBuilder::new(build_config).build(output_dir)?;

        for warning in &report.warnings {
            output.warning(&format!("Warning: {warning}"));
        }
        if report.assets == 0 {
            output.warning(&format!(
                "No static assets found in {}",
                config.build_resolved.asset_dir.display()
            ));
        }

        output.success(&format!(
            "Site built successfully to {} ({} files, {} assets)",
            output_dir.display(),
            report.pages.len(),
            report.assets
        ));
        Ok(())
    }
}
