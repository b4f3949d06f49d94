//! Domain models for package references and stream configuration.
//!
//! These models are transport-agnostic and carry the already-validated
//! values the consumer needs to build a streaming session.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Package Reference
// =============================================================================

/// Location of a binary package manifest.
///
/// A reference is either a content-address identifier resolved through an
/// IPFS-style gateway, or a filesystem path. Classification happens once,
/// at parse time; the resolver never re-guesses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageReference {
    /// Content-address identifier (CIDv0 `Qm…` or CIDv1 `baf…`).
    Ipfs(String),
    /// Filesystem path, resolved against the current working directory
    /// when relative.
    File(PathBuf),
}

impl PackageReference {
    /// Classify a raw reference string.
    ///
    /// Anything that does not look like a content-address identifier is
    /// treated as a filesystem path, mirroring the fallback behavior of
    /// the original consumer.
    pub fn parse(reference: &str) -> Self {
        if is_content_id(reference) {
            Self::Ipfs(reference.to_string())
        } else {
            Self::File(PathBuf::from(reference))
        }
    }
}

impl std::fmt::Display for PackageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ipfs(cid) => write!(f, "ipfs:{cid}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Whether a reference string is a content-address identifier.
///
/// Recognizes CIDv0 (`Qm` + 44 base58 characters) and base32 CIDv1
/// (`baf` prefix). Path-looking strings never match.
fn is_content_id(reference: &str) -> bool {
    const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
    const BASE32: &str = "abcdefghijklmnopqrstuvwxyz234567";

    if reference.len() == 46 && reference.starts_with("Qm") {
        return reference.chars().all(|c| BASE58.contains(c));
    }
    if reference.len() >= 59 && reference.starts_with("baf") {
        return reference.chars().all(|c| BASE32.contains(c));
    }
    false
}

// =============================================================================
// Block Range
// =============================================================================

/// Block range for a streaming session.
///
/// Bounds are opaque tokens handed to the remote service verbatim; the
/// stop bound supports the relative `+N` syntax (offset from start),
/// resolved server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
    /// First block to stream. Required.
    pub start: String,
    /// Last block to stream, absolute or `+N` relative. `None` streams
    /// without an upper bound.
    pub stop: Option<String>,
}

impl BlockRange {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            stop: None,
        }
    }

    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop = Some(stop.into());
        self
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.stop {
            Some(stop) => write!(f, "{}..{}", self.start, stop),
            None => write!(f, "{}..", self.start),
        }
    }
}

// =============================================================================
// Fork Policy
// =============================================================================

/// Fork-filtering policy for a streaming session.
///
/// The consumer only ever requests irreversible blocks: speculative blocks
/// subject to reorganization are filtered out server-side, trading latency
/// for exactly-once-per-block delivery downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForkPolicy {
    #[default]
    IrreversibleOnly,
}
