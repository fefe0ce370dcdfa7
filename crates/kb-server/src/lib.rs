//! HTTP preview server for the knowledge base site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - The rendered homepage at the site base URL
//! - JSON endpoints for the feature cards and site configuration
//! - Static images and stylesheets from `kb-assets`
//!
//! # Quick Start
//!
//! ```ignore
//! use kb_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         port: 8080,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (kb-server)
//!                        │
//!                        ├─► {base}             homepage HTML (rendered once at startup)
//!                        ├─► {base}api/features feature cards (kb-site)
//!                        ├─► {base}api/config   site identity
//!                        │
//!                        └─► fallback           static assets (kb-assets)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use std::path::PathBuf;

use kb_assets::AssetDir;
use kb_site::{SiteInfo, SiteLinks, StaticAssets};
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site identity.
    pub site: SiteInfo,
    /// Base URL the site is mounted under.
    pub base_url: String,
    /// Append trailing slashes to internal routes.
    pub trailing_slash: bool,
    /// Directory images and stylesheets are served from.
    pub asset_dir: PathBuf,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            site: SiteInfo::default(),
            base_url: "/".to_owned(),
            trailing_slash: false,
            asset_dir: PathBuf::from(kb_assets::DEFAULT_DIR),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let links = SiteLinks::new(&config.base_url, config.trailing_slash);
    let asset_dir = AssetDir::new(config.asset_dir);
    let resolver = StaticAssets::new(links.clone(), asset_dir.clone());

    let state = Arc::new(AppState::new(
        config.site,
        links,
        asset_dir,
        &resolver,
        config.version,
        config.verbose,
    ));

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the `kb.toml` configuration.
#[must_use]
pub fn server_config_from_kb_config(
    config: &kb_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        site: site_info(config),
        base_url: config.site.base_url.clone(),
        trailing_slash: config.site.trailing_slash,
        asset_dir: config.build_resolved.asset_dir.clone(),
        verbose,
        version,
    }
}

/// Extract the homepage site identity from the configuration.
#[must_use]
pub fn site_info(config: &kb_config::Config) -> SiteInfo {
    SiteInfo {
        title: config.site.title.clone(),
        tagline: config.site.tagline.clone(),
        feature_cards: config.homepage.feature_cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_config_from_kb_config() {
        let mut config = kb_config::Config::default();
        config.server.port = 9000;
        config.site.base_url = "/kb/".to_owned();
        config.homepage.feature_cards = false;

        let server = server_config_from_kb_config(&config, "1.2.3".to_owned(), true);

        assert_eq!(server.port, 9000);
        assert_eq!(server.base_url, "/kb/");
        assert_eq!(server.asset_dir, config.build_resolved.asset_dir);
        assert!(!server.site.feature_cards);
        assert_eq!(server.version, "1.2.3");
        assert!(server.verbose);
    }
}
