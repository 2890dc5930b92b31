// Copyright (c) 2025-2026 CommentLens Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for CommentLens

use thiserror::Error;

/// Result type alias for CommentLens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CommentLens operations
#[derive(Error, Debug)]
pub enum Error {
    /// Stopword or lemma data could not be loaded. Always fatal at startup.
    #[error("Resource unavailable: {0}")]
    Resource(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The comment source failed while producing comments
    #[error("Comment source unavailable: {0}")]
    SourceUnavailable(String),

    /// The source produced no usable comments; `cause` is the source
    /// failure that ended the fetch, if any
    #[error("No comments fetched from '{identifier}'{}", cause_suffix(.cause))]
    NoComments {
        identifier: String,
        cause: Option<Box<Error>>,
    },

    /// Classifier load or prediction errors
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn cause_suffix(cause: &Option<Box<Error>>) -> String {
    cause
        .as_ref()
        .map(|cause| format!(": {}", cause))
        .unwrap_or_default()
}

impl Error {
    /// Build a resource error that names the file it came from
    pub(crate) fn resource(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Error::Resource(format!("{}: {}", path.display(), reason))
    }
}
