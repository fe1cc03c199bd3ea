use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the mixfreq workspace.
///
/// Configuration and connection failures are fatal for a run; every other
/// variant is expected to surface per series and is isolated by the
/// orchestrator.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MixfreqError {
    /// The panel configuration is unusable (no frequency section, bad start dates).
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or expected data (empty series, bad dates, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// The series source returned an error for a single call.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Name of the source that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A series or resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "series GDPC1".
        what: String,
    },

    /// A single series fetch exceeded the configured timeout.
    #[error("fetch timed out: {id} via {source_name}")]
    FetchTimeout {
        /// Name of the source that timed out.
        source_name: String,
        /// Series identifier being fetched.
        id: String,
    },

    /// The source could not be reached during setup.
    #[error("connection to {source_name} failed: {msg}")]
    Connection {
        /// Name of the source.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The identifier has already been merged into the same frequency panel.
    #[error("duplicate series: {id}")]
    DuplicateSeries {
        /// Offending series identifier.
        id: String,
    },

    /// The native frequency label of a series is not one of the supported frequencies.
    #[error("unknown frequency: {label}")]
    UnknownFrequency {
        /// Label as reported by the source.
        label: String,
    },
}

impl MixfreqError {
    /// Helper: build a `Config` error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source_error(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `FetchTimeout` error.
    pub fn fetch_timeout(source_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self::FetchTimeout {
            source_name: source_name.into(),
            id: id.into(),
        }
    }

    /// Helper: build a `Connection` error.
    pub fn connection(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connection {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if the error aborts a whole run rather than a single series.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Connection { .. })
    }
}
