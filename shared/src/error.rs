use thiserror::Error;

/// Failure to read site configuration.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid site configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Failure to hand a contact submission to its backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("no submission backend is configured")]
    BackendUnavailable,
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
}
