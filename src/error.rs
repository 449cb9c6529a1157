//! Error types for hive-adapter.
//!
//! This module defines domain-specific error types organized by functional area.
//! Every user-visible failure ends up as a [`HiveError`].

use std::fmt;
use thiserror::Error;

/// Top-level error type encompassing all possible errors.
#[derive(Error, Debug)]
pub enum HiveError {
    /// Invalid or incomplete credentials
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    /// Connection-related errors
    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Statement execution errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Native driver error surfaced unchanged
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Errors raised while building or validating credentials.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// `database` was given and differs from `schema`
    #[error(
        "schema: {schema}, database: {database}. On Hive, database must be omitted or have the same value as schema."
    )]
    DatabaseMismatch { schema: String, database: String },

    /// A field the credentials cannot be built without
    #[error("Missing required field '{0}'")]
    MissingField(String),

    /// A field the selected authentication method needs
    #[error("The config '{key}' is required when using the {method} method to connect to Hive")]
    MissingCredential { key: String, method: String },

    /// Authentication method the adapter cannot open connections with
    #[error("Unsupported authentication method '{0}'")]
    UnsupportedAuthMethod(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Connection string parsing error
    #[error("Failed to parse connection string: {0}")]
    ParseError(String),
}

/// Errors related to database connections.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// Failed to establish connection to the database
    #[error("Failed to connect to {host}:{port}: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        message: String,
    },

    /// Operation needs an open connection handle
    #[error("Connection '{0}' is not open")]
    NotOpen(String),
}

/// Errors related to statement execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Statement execution failed; carries the native error message
    #[error("{0}")]
    ExecutionFailed(String),

    /// Placeholder count and binding count disagree
    #[error("Statement has {placeholders} placeholder(s) but {bindings} binding(s) were supplied")]
    PlaceholderMismatch { placeholders: usize, bindings: usize },
}

/// Class of a native driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverErrorKind {
    /// Socket/transport level failure
    Io,
    /// Error reported by the database server
    Database,
    /// Misuse of the driver API
    Programming,
    /// Operational failure such as a lost session
    Operational,
    /// Anything else
    Other,
}

impl fmt::Display for DriverErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O error"),
            Self::Database => write!(f, "database error"),
            Self::Programming => write!(f, "programming error"),
            Self::Operational => write!(f, "operational error"),
            Self::Other => write!(f, "driver error"),
        }
    }
}

/// Error raised by a native driver implementation.
///
/// A driver error may carry no message at all; the connection manager
/// passes such errors through unchanged instead of wrapping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverError {
    pub kind: DriverErrorKind,
    message: Option<String>,
}

impl DriverError {
    pub fn new(kind: DriverErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Error without any message.
    pub fn bare(kind: DriverErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(DriverErrorKind::Io, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(DriverErrorKind::Database, message)
    }

    pub fn programming(message: impl Into<String>) -> Self {
        Self::new(DriverErrorKind::Programming, message)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// I/O-class errors are the ones cancel/close swallow.
    pub fn is_io(&self) -> bool {
        self.kind == DriverErrorKind::Io
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.kind, message),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<std::io::Error> for DriverError {
    fn from(err: std::io::Error) -> Self {
        DriverError::io(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::ParseError(err.to_string())
    }
}

/// Stable error codes reported to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Configuration,
    Connection,
    Query,
    Driver,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Configuration => write!(f, "CONFIGURATION"),
            ErrorCode::Connection => write!(f, "CONNECTION"),
            ErrorCode::Query => write!(f, "QUERY"),
            ErrorCode::Driver => write!(f, "DRIVER"),
        }
    }
}

impl HiveError {
    /// Map to the host-facing error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            HiveError::Config(_) => ErrorCode::Configuration,
            HiveError::Connection(_) => ErrorCode::Connection,
            HiveError::Query(_) => ErrorCode::Query,
            HiveError::Driver(_) => ErrorCode::Driver,
        }
    }
}
