//! Error types for popcorntv-template.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or rendering templates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The named template does not exist in the source.
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// The template name cannot be mapped to a resource.
    #[error("invalid template name: {0:?}")]
    InvalidName(String),

    /// The template exists but could not be read.
    #[error("failed to read template {name} from {}: {source}", path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A placeholder in the template has no binding.
    #[error("unbound placeholder: {{{{{name}}}}}")]
    Unbound { name: String },
}

impl Error {
    /// Create a template not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create an unbound placeholder error.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::Unbound { name: name.into() }
    }

    /// Whether this error means the template is missing, as opposed to broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
