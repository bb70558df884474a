use std::fmt;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Stage of URI normalization at which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriStage {
    Decode,
    Substitute,
    Parse,
}

impl fmt::Display for UriStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UriStage::Decode => "percent-decoding",
            UriStage::Substitute => "variable substitution",
            UriStage::Parse => "re-parsing",
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("env var ${{{name}}} not defined")]
    MissingEnvironmentVariable { name: String },

    #[error("invalid URI ({stage} failed): {source}")]
    InvalidUri {
        stage: UriStage,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("{field}: {message}")]
    Config { field: String, message: String },

    #[error("Missing -i or -r option.")]
    MissingResourceKind,
}

impl Error {
    pub(crate) fn config(field: impl Into<String>, message: impl fmt::Display) -> Self {
        Error::Config {
            field: field.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn invalid_uri(
        stage: UriStage,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Error::InvalidUri {
            stage,
            source: source.into(),
        }
    }
}
