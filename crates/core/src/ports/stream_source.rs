//! Port trait for the block-streaming transport.
//!
//! This trait defines the interface for opening a server-streamed session.
//! Implementations live in the infrastructure layer (e.g.,
//! `ostinato-transport`).

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use ostinato_proto::v1::{Request, Response};

use crate::error::TransportResult;

/// Lazy, non-restartable sequence of streamed responses.
///
/// Items arrive in the order the remote sends them; an `Err` item means the
/// session ended abnormally and no further items follow.
pub type BlockResponseStream = Pin<Box<dyn Stream<Item = TransportResult<Response>> + Send>>;

/// Port trait for the block-streaming transport.
#[async_trait]
pub trait StreamSource: Send + Sync {
    /// Open a new streaming session for the given request.
    ///
    /// Each call opens a brand-new session; sessions cannot be resumed.
    async fn open_stream(&self, request: Request) -> TransportResult<BlockResponseStream>;
}
