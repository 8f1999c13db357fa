use thiserror::Error;

/// Unified error type for the sise workspace.
///
/// This wraps capability mismatches, argument and date-input validation
/// errors, provider-tagged upstream failures, not-found conditions, and
/// persistence failures.
#[derive(Debug, Error)]
pub enum SiseError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "candles").
        capability: &'static str,
    },

    /// A date input could not be coerced into a timestamp.
    #[error("invalid date input: {input}")]
    InvalidDate {
        /// The offending input, verbatim.
        input: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with returned or expected data (inconsistent series, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or ticker could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "ticker KRW-BTC".
        what: String,
    },

    /// The persisted series could not be read or written.
    ///
    /// A missing file is not a storage error; stores return an empty series
    /// for it.
    #[error("storage failure at {path}: {msg}")]
    Storage {
        /// Path of the offending file.
        path: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl SiseError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build an `InvalidDate` error from the offending input.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Storage` error for a path and message.
    pub fn storage(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Storage {
            path: path.into(),
            msg: msg.into(),
        }
    }
}
