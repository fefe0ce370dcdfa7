//! CLI error types.

use kb_config::ConfigError;
use kb_server::ServerError;
use kb_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Server(#[from] ServerError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_errors_display_inner_message() {
        let err = CliError::from(ConfigError::Validation(
            "site.title cannot be empty".to_owned(),
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: site.title cannot be empty"
        );

        let err = CliError::from(BuildError::MissingAsset("img/logo.svg".to_owned()));
        assert_eq!(err.to_string(), "Asset not found: img/logo.svg");
    }
}
