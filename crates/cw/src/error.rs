//! CLI error types.

use cw_config::ConfigError;
use cw_content::ContentError;
use cw_site::StoreError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("Failed to save content: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Navigation item not found: {0}")]
    ItemNotFound(String),

    #[error("Child {child} not found under {parent}")]
    ChildNotFound { parent: String, child: String },

    #[error("{0}")]
    Server(String),
}
