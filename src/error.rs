//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`SearchError`], [`ConfigError`]), while CLI/main uses `anyhow`
//! for convenient error propagation.
//!
//! # Example
//!
//! ```ignore
//! use store_search::error::{Result, ResultExt};
//!
//! fn write_defaults(path: &Path) -> Result<()> {
//!     config::save_to(&Config::default(), path)
//!         .map_err(Error::from)            // Config errors convert
//!         .with_context(format!("writing {}", path.display()))
//! }
//! ```

use crate::catalog::SearchError;
use crate::config::ConfigError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Catalog search failed
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Configuration could not be saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The search was cancelled before it finished
    #[error("Search cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}
