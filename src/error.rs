//! Error types surfaced by the loader.
//!
//! Both [`LoaderError`] kinds are recoverable: the failing operation is
//! aborted, the error is handed to the loader's [`Diagnostics`] sink and
//! returned to the caller. Nothing else in the loader is touched.
//!
//! [`Diagnostics`]: crate::diagnostics::Diagnostics

use thiserror::Error;

/// Error raised by [`Loader`](crate::loader::Loader) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    /// The dependency source handed to `request_module` is neither a valid
    /// list of names nor a callable declaration.
    #[error("invalid module request: {reason}")]
    InvalidArgument { reason: String },

    /// A dependency with this name has already been registered.
    #[error("a dependency with the name \"{name}\" has already been loaded")]
    DuplicateRegistration { name: String },
}

impl LoaderError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        LoaderError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        LoaderError::DuplicateRegistration { name: name.into() }
    }
}

/// Error raised when a callback declaration cannot be read as a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("not a callable declaration: {0}")]
    NotCallable(String),
}

impl From<InferenceError> for LoaderError {
    fn from(err: InferenceError) -> Self {
        LoaderError::invalid_argument(err.to_string())
    }
}

/// Error raised while loading a [`LoaderConfig`](crate::config::LoaderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Error raised by the script front end for a line it cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_the_dependency() {
        let err = LoaderError::duplicate("jquery");
        assert_eq!(
            err.to_string(),
            "a dependency with the name \"jquery\" has already been loaded"
        );
    }

    #[test]
    fn test_inference_error_becomes_invalid_argument() {
        let err: LoaderError = InferenceError::NotCallable("'test'".to_string()).into();
        match err {
            LoaderError::InvalidArgument { reason } => assert!(reason.contains("'test'")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
