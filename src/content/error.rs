//! Content errors

use std::path::PathBuf;
use thiserror::Error;

/// Why a content document could not be produced.
///
/// The public `Option` lookups collapse all of these into "not found";
/// `ContentRepository::load` keeps them apart.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("no document at {0:?}")]
    NotFound(PathBuf),

    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0:?} is not valid UTF-8")]
    Decode(PathBuf),

    #[error("invalid {format} front-matter: {message}")]
    Frontmatter {
        format: &'static str,
        message: String,
    },
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ContentError::NotFound(path),
            std::io::ErrorKind::InvalidData => ContentError::Decode(path),
            _ => ContentError::Io { path, source },
        }
    }

    pub(crate) fn frontmatter(format: &'static str, message: impl ToString) -> Self {
        ContentError::Frontmatter {
            format,
            message: message.to_string(),
        }
    }

    /// Whether the document simply does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}
