use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Usage(String),

    #[error("no {} results found with pattern '{}'", .resource, .pattern)]
    EmptyResult { resource: String, pattern: String },

    #[error("Candidate row has no identifier to select: \"{}\"", .0)]
    MalformedRow(String),

    #[error("Failed to list {} in namespace `{}`: {}", .resource, .namespace, .source)]
    ListingSpawn {
        resource: String,
        namespace: String,
        source: std::io::Error,
    },

    #[error("Failed to list {} in namespace `{}` ({}): {}", .resource, .namespace, .status, .stderr)]
    ListingExit {
        resource: String,
        namespace: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("error running kubectl action '{}' on resource '{}': {}", .action, .resource, .source)]
    Spawn {
        action: String,
        resource: String,
        source: std::io::Error,
    },

    #[error("error running kubectl action '{}' on resource '{}': {}", .action, .resource, .status)]
    Exit {
        action: String,
        resource: String,
        status: ExitStatus,
    },

    #[error("error running kubectl action '{}' on resource '{}': {}", .action, .resource, .source)]
    Wait {
        action: String,
        resource: String,
        source: std::io::Error,
    },

    #[error("error relaying output of kubectl action '{}' on resource '{}': {}", .action, .resource, .source)]
    Relay {
        action: String,
        resource: String,
        source: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn usage(message: impl std::fmt::Display) -> Self {
        Self::Usage(message.to_string())
    }

    pub fn empty_result(resource: &str, pattern: &str) -> Self {
        Self::EmptyResult {
            resource: resource.to_string(),
            pattern: pattern.to_string(),
        }
    }

    /// Outcomes that are reported to the user but are not failures.
    #[must_use]
    pub fn is_clean_exit(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }
}
