//! Errors raised while answering a code hook invocation
//!
//! Every variant is fatal to the invocation. The host service surfaces its own
//! generic failure message, so none of these carry user-facing text.

use thiserror::Error;

use crate::value_objects::InvocationSource;

/// Result alias used throughout the crate
pub type DialogResult<T> = Result<T, DialogError>;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("no response configured for category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid invocation source {invocation_source} for intent {intent}")]
    InvalidInvocationSource {
        intent: String,
        invocation_source: InvocationSource,
    },

    #[error("intent {intent} requires slot {slot}")]
    MissingSlot { intent: String, slot: String },

    #[error("malformed code hook event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    #[error("failed to encode dialog response: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading an alternate response table
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read response table {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid response table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("response table defines no categories")]
    Empty,

    #[error("category '{0}' is defined more than once after case folding")]
    DuplicateCategory(String),
}
