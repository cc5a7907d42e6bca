//! Error types shared by every layer of the scaffolder

use thiserror::Error;

/// A structured document or tree violates a structural invariant
#[derive(Debug, Error)]
pub enum FormatError {
    /// A sequence mixes scalar values and sub-documents
    #[error("sequence under '{key}' mixes scalar values and documents")]
    MixedSequence { key: String },

    /// A value the formatters cannot express (null, nested arrays)
    #[error("unsupported value under '{key}': {reason}")]
    Unsupported { key: String, reason: &'static str },

    /// Two siblings in the same folder share a path
    #[error("duplicate path '{path}' in folder '{parent}'")]
    DuplicatePath { parent: String, path: String },

    #[error("failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// A network collaborator failed to deliver a resource
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to fetch {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    /// HTTP status carried by the error, when the server answered at all
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A variant-selection generator received a value outside its closed set
    #[error("unrecognized {kind}: '{value}'")]
    UnrecognizedVariant { kind: &'static str, value: String },

    #[error("invalid parameter '{name}': {reason}")]
    Parameter { name: &'static str, reason: String },

    #[error("unsupported license type: {0}")]
    UnknownLicense(String),

    #[error("failed to parse parameters: {0}")]
    ParametersFile(#[from] serde_yaml::Error),

    #[error("failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    pub(crate) fn unrecognized(kind: &'static str, value: impl Into<String>) -> Self {
        ScaffoldError::UnrecognizedVariant {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
