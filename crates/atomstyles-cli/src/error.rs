use atomstyles::{RegistryError, StyleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("Style registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Failed to render output: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
