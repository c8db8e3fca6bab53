//! Error types for loading site data and configuration.
//!
//! Composition and the popup/scroll controllers never fail; only the
//! file-backed collaborators (catalog, config) can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a catalog or a config file.
#[derive(Debug, Error)]
pub enum SiteError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON did not match the record schema.
    #[error("invalid catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Config TOML did not match [`crate::SiteConfig`].
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        /// Offending path
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
