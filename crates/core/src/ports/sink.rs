//! Port trait for block sinks.
//!
//! This is the main extensibility point of the consumer. Integrators
//! implement this trait to receive the streamed responses; the driver in
//! [`crate::services::ConsumerService`] owns the call order.

use async_trait::async_trait;

use ostinato_proto::v1::Response;

use crate::error::SinkResult;

/// Trait for block sinks.
///
/// The driver guarantees, per session:
///
/// - `init` is called exactly once, before the session is opened;
/// - `process_block` is called once per response, in arrival order, and
///   each call is awaited before the next response is pulled;
/// - `done` is called exactly once, only after the remote closed the
///   stream normally and the last `process_block` call has settled.
///
/// A failed call aborts the session; `done` is never invoked after a
/// failure. Responses are handed over as-is, the driver does not inspect
/// their contents.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Called once before any response is consumed.
    ///
    /// Receives the range tokens the session was requested with.
    async fn init(&self, start_block: &str, stop_block: Option<&str>) -> SinkResult<()>;

    /// Called once per streamed response, in arrival order.
    async fn process_block(&self, response: Response) -> SinkResult<()>;

    /// Called once after the stream ended normally.
    async fn done(&self) -> SinkResult<()>;
}
