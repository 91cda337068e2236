//! Error types for recipes.

/// Result type alias using the recipe Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building markup from media records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page template is missing from the template source or cannot be read.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// A record is missing a field the recipe needs, or the field is malformed.
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// The template could not be read or rendered.
    #[error("template error: {0}")]
    Template(popcorntv_template::Error),
}

impl Error {
    /// Create a new InvalidRecord error.
    pub fn invalid_record<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRecord(msg.into())
    }
}

impl From<popcorntv_template::Error> for Error {
    fn from(err: popcorntv_template::Error) -> Self {
        match err {
            popcorntv_template::Error::NotFound { name } => Self::TemplateNotFound(name),
            popcorntv_template::Error::Io { name, path, source } => {
                tracing::warn!(
                    template = %name,
                    path = %path.display(),
                    error = %source,
                    "template exists but could not be read"
                );
                Self::TemplateNotFound(name)
            }
            other => Self::Template(other),
        }
    }
}

impl From<popcorntv_common::Error> for Error {
    fn from(err: popcorntv_common::Error) -> Self {
        match err {
            popcorntv_common::Error::InvalidRecord(reason) => Self::InvalidRecord(reason),
        }
    }
}
