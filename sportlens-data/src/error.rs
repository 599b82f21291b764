use reqwest::StatusCode;
use thiserror::Error;

/// Why a classification request produced no label.
///
/// Callers collapse both variants into "no prediction available"; the split
/// only exists for the operator log.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The request could not be completed (DNS, connect, timeout, body read)
    #[error("could not reach classifier at {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered, but not with a label
    #[error("classifier at {url} failed: {failure}")]
    Server { url: String, failure: ServerFailure },
}

impl ClassifyError {
    pub fn is_network(&self) -> bool {
        matches!(self, ClassifyError::Network { .. })
    }

    pub fn server_failure(&self) -> Option<&ServerFailure> {
        match self {
            ClassifyError::Server { failure, .. } => Some(failure),
            ClassifyError::Network { .. } => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerFailure {
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("response is not JSON: {snippet}")]
    InvalidJson { snippet: String },

    #[error("response has no predicted_class")]
    MissingLabel,

    /// The service reported its own error in an otherwise successful response
    #[error("service reported: {message}")]
    Rejected { message: String },
}
