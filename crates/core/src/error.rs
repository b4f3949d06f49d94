//! Error types for the consumer domain layer.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`PackageError`] - Package resolution and decoding errors
//! - [`RequestError`] - Stream request construction errors
//! - [`TransportError`] - Channel and streaming session errors
//! - [`SinkError`] - Errors raised by sink implementations
//! - [`ConsumerError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Package Errors
// =============================================================================

/// Package resolution errors.
///
/// These errors occur while locating the binary package manifest, either
/// on a content-addressed gateway or on the local filesystem, and while
/// decoding it.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Gateway fetch failed before a usable response was received.
    #[error("Package fetch failed for {url}: {message}")]
    Fetch {
        /// Gateway URL that was queried.
        url: String,
        /// Error details.
        message: String,
    },

    /// Gateway answered with a non-success status.
    #[error("Package gateway returned HTTP {status} for {url}")]
    GatewayStatus {
        /// Gateway URL that was queried.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Local package file could not be read.
    #[error("Package read failed for {path}: {message}")]
    Read {
        /// Resolved filesystem path.
        path: String,
        /// Error details.
        message: String,
    },

    /// Package bytes did not decode as a valid manifest.
    #[error("Package decode failed: {0}")]
    Decode(String),
}

// =============================================================================
// Request Errors
// =============================================================================

/// Stream request construction errors.
///
/// Raised before any network activity when the requested configuration
/// cannot produce a valid streaming request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// No output modules were requested.
    #[error("No output modules requested")]
    EmptyOutputModules,

    /// The same output module was requested more than once.
    #[error("Duplicate output module: {0}")]
    DuplicateModule(String),

    /// A requested output module is absent from the package's module graph.
    #[error("Unknown output module '{name}' (package defines: {available})")]
    UnknownModule {
        /// Requested module name.
        name: String,
        /// Comma-separated names present in the package.
        available: String,
    },

    /// The start block token is empty.
    #[error("Missing start block")]
    EmptyStartBlock,

    /// The package carries no module graph at all.
    #[error("Package contains no module graph")]
    MissingModuleGraph,
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Channel construction and streaming session errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Endpoint string could not be turned into a channel target.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Bearer token is not a valid header value.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// TLS configuration was rejected.
    #[error("TLS configuration error: {0}")]
    Tls(String),

    /// The streaming session could not be opened.
    #[error("Session open failed: {0}")]
    SessionOpen(String),

    /// The remote closed the session abnormally mid-stream.
    #[error("Stream interrupted: {0}")]
    Interrupted(String),
}

// =============================================================================
// Sink Errors
// =============================================================================

/// Error raised by a [`crate::ports::Sink`] implementation.
///
/// Sinks are external collaborators, so this is an opaque message rather
/// than an enumeration of causes. The driver records which lifecycle phase
/// raised it (see [`ConsumerError::Sink`]).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SinkError {
    message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Lifecycle phase during which a sink error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkPhase {
    Init,
    ProcessBlock,
    Done,
}

impl std::fmt::Display for SinkPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkPhase::Init => write!(f, "init"),
            SinkPhase::ProcessBlock => write!(f, "process_block"),
            SinkPhase::Done => write!(f, "done"),
        }
    }
}

// =============================================================================
// Consumer Errors
// =============================================================================

/// Top-level consumer orchestration errors.
///
/// This is the main error type returned by
/// [`crate::services::ConsumerService`]. It wraps all lower-level errors
/// and adds consumer-specific variants.
#[derive(Debug, Error)]
pub enum ConsumerError {
    /// Required configuration is absent or unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Package resolution error.
    #[error("Package error: {0}")]
    Package(#[from] PackageError),

    /// Request construction error.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Channel or session-open error.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote closed the stream abnormally; `done` was not invoked.
    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),

    /// A sink lifecycle call failed.
    #[error("Sink error during {phase}: {source}")]
    Sink {
        /// Lifecycle phase that raised the error.
        phase: SinkPhase,
        /// The sink's error.
        source: SinkError,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for consumer operations.
pub type ConsumerResult<T> = Result<T, ConsumerError>;

/// Result type for package resolution.
pub type PackageResult<T> = Result<T, PackageError>;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type for sink implementations.
pub type SinkResult<T> = Result<T, SinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    // Test critique: la chaîne de conversion d'erreurs fonctionne
    // Permet d'utiliser ? à travers les couches
    #[test]
    fn test_error_conversion_chain() {
        let package_err = PackageError::Decode("bad varint".into());
        let consumer_err: ConsumerError = package_err.into();
        assert!(consumer_err.to_string().contains("bad varint"));

        let transport_err = TransportError::SessionOpen("handshake failed".into());
        let consumer_err: ConsumerError = transport_err.into();
        assert!(consumer_err.to_string().contains("handshake failed"));

        let request_err = RequestError::EmptyOutputModules;
        let consumer_err: ConsumerError = request_err.into();
        assert!(consumer_err.to_string().contains("output modules"));
    }

    // Test critique: l'erreur d'un sink garde la phase du cycle de vie,
    // elle ne doit jamais être avalée silencieusement
    #[test]
    fn test_sink_error_keeps_phase() {
        let err = ConsumerError::Sink {
            phase: SinkPhase::ProcessBlock,
            source: SinkError::new("db write failed"),
        };
        let msg = err.to_string();
        assert!(msg.contains("process_block") && msg.contains("db write failed"));
    }

    #[test]
    fn test_unknown_module_lists_available() {
        let err = RequestError::UnknownModule {
            name: "map_prices".into(),
            available: "map_transfers, store_totals".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("map_prices") && msg.contains("map_transfers"));
    }
}
