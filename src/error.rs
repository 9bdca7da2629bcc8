//! Error types shared by the host builder, the registry and the installer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Stable classification of [`Error`], used instead of matching messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ExtensionUnsupported,
    AlreadyRegistered,
    UnknownOperation,
    InvalidArgument,
    BindingMismatch,
    Config,
}

#[derive(Error, Debug)]
pub enum Error {
    /// The registry has no extension point (older host builds).
    #[error("query builder registry `{registry}` does not support extend")]
    ExtensionUnsupported { registry: String },

    #[error("can't extend query builder with existing operation `{name}`")]
    AlreadyRegistered { name: String },

    /// Raised at call time when an operation was never installed.
    #[error("query builder operation `{name}` does not exist")]
    UnknownOperation { name: String },

    #[error("invalid argument for `{operation}`: {reason}")]
    InvalidArgument { operation: String, reason: String },

    #[error("raw sql `{template}`: {reason}")]
    BindingMismatch { template: String, reason: String },

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ExtensionUnsupported { .. } => ErrorKind::ExtensionUnsupported,
            Self::AlreadyRegistered { .. } => ErrorKind::AlreadyRegistered,
            Self::UnknownOperation { .. } => ErrorKind::UnknownOperation,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::BindingMismatch { .. } => ErrorKind::BindingMismatch,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn invalid_argument(operation: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation: operation.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn binding_mismatch(template: &str, reason: impl Into<String>) -> Self {
        Self::BindingMismatch {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}
