//! Error types for `AacBoard`

use thiserror::Error;

/// The error type for `AacBoard` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from reading or writing a board file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Lookup Errors ====================
    /// The selected image is not shown on the current screen.
    #[error("image '{image}' not found on {scope}")]
    ImageNotFound {
        /// The image identifier that was selected.
        image: String,
        /// The screen that was searched (`home screen` or a topic name).
        scope: String,
    },

    /// A topic name resolved from the home screen has no registered category.
    #[error("category '{name}' not found")]
    CategoryNotFound {
        /// The missing topic name.
        name: String,
    },

    /// An item was added with an empty image identifier, or a topic was
    /// added on the home screen with an empty topic name.
    #[error("image identifier and topic name must not be empty")]
    NullKey,

    /// An image identifier that cannot be stored in a board file: it
    /// contains whitespace, or names a home screen entry and starts with `>`.
    #[error("invalid image identifier {image:?}")]
    InvalidImageId {
        /// The rejected identifier.
        image: String,
    },

    /// Item text or a topic name containing a line break.
    #[error("text must fit on one line: {text:?}")]
    InvalidText {
        /// The rejected text.
        text: String,
    },

    // ==================== Parsing Errors ====================
    /// A board file line could not be split into its two fields.
    #[error("line {line}: {reason}: {content:?}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending line, as read.
        content: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    // ==================== Configuration Errors ====================
    /// The configuration file exists but could not be understood.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl Error {
    /// Whether this error is a failed lookup (an unknown image or topic).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ImageNotFound { .. } | Error::CategoryNotFound { .. })
    }
}

/// A specialized Result type for `AacBoard` operations.
pub type Result<T> = std::result::Result<T, Error>;
