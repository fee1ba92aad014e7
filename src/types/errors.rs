//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Every
//! failure is returned as data to the caller of `dispatch`; nothing here
//! aborts the process or other in-flight dispatches.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the adapter engine.
///
/// Note that decode mismatches are deliberately absent: a response body that
/// fails to match a tool's declared schema degrades to a raw-text success,
/// it is never an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A required parameter is missing or an argument has the wrong type.
    /// Raised before any network I/O occurs.
    #[error("validation error: {0}")]
    Validation(String),

    /// Dispatch requested a tool name that is not in the registry.
    #[error("unknown tool: {0}")]
    NotFound(String),

    /// The remote API answered with an HTTP error status. The body is
    /// carried verbatim, no decode is attempted.
    #[error("remote api error (status {status}): {body}")]
    RemoteApi { status: u16, body: String },

    /// The caller cancelled the dispatch or its deadline expired while the
    /// request was in flight. Reports as the `Transport` kind.
    #[error("request cancelled: {0}")]
    Cancelled(String),

    /// Network-level failure: DNS, connection refused, TLS, read errors.
    #[error("transport error: {0}")]
    Transport(String),
}

/// The caller-visible failure kind.
///
/// Callers needing machine-distinguishable handling match on this, not on
/// message text. Cancellation is a `Transport` kind with a distinguishable
/// reason (see [`Error::is_cancelled`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    RemoteApi,
    Transport,
}

impl Error {
    /// Classify this error into its caller-visible kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::RemoteApi { .. } => ErrorKind::RemoteApi,
            Error::Cancelled(_) | Error::Transport(_) => ErrorKind::Transport,
        }
    }

    /// True if this failure was caused by caller cancellation or deadline
    /// expiry rather than a lower-level connection error.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled(_))
    }
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn remote_api(status: u16, body: impl Into<String>) -> Self {
        Self::RemoteApi {
            status,
            body: body.into(),
        }
    }

    pub fn cancelled(msg: impl Into<String>) -> Self {
        Self::Cancelled(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Error::Cancelled(format!("deadline exceeded: {err}"));
        }
        // Surface the underlying cause chain, reqwest's Display alone tends
        // to stop at "error sending request".
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Error::Transport(message)
    }
}
