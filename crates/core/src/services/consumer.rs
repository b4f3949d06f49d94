//! Core consumer service - drives the sink lifecycle over a stream session.
//!
//! One `run` is one session: resolve the package, build the request,
//! initialize the sink, consume the server stream in arrival order, and
//! finish the sink when the remote closes normally. Sessions are never
//! resumed; a second `run` starts from scratch.

use std::sync::Arc;

use futures::StreamExt;
use tracing::{debug, info, instrument, trace};

use ostinato_proto::v1::{Package, Response, response};

use crate::error::{ConsumerError, ConsumerResult, SinkPhase};
use crate::metrics::{
    BlockTimer, record_block_received, record_sink_error, record_stream_interrupted,
};
use crate::models::{BlockRange, ForkPolicy, PackageReference};
use crate::ports::{PackageSource, Sink, StreamSource};
use crate::services::request::build_stream_request;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the consumer service.
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Module outputs to request, in caller order.
    pub output_modules: Vec<String>,
    /// Block range for the session.
    pub range: BlockRange,
    /// Fork-filtering policy.
    pub fork_policy: ForkPolicy,
}

impl ConsumerConfig {
    pub fn new(output_modules: Vec<String>, range: BlockRange) -> Self {
        Self {
            output_modules,
            range,
            fork_policy: ForkPolicy::default(),
        }
    }
}

// =============================================================================
// ConsumerService
// =============================================================================

/// Main consumer service driving one sink per session.
///
/// # Flow
///
/// 1. Resolve the package reference into a manifest
/// 2. Build the streaming request (graph + outputs + range + fork policy)
/// 3. `sink.init` — exactly once, before the session is opened
/// 4. Open the session; hand each response to `sink.process_block`,
///    strictly in arrival order, awaiting each call before pulling the
///    next response
/// 5. `sink.done` — exactly once, only on normal stream end
///
/// Any failure aborts the run: resolver and request errors surface before
/// the sink is touched, an `init` error means the stream is never opened,
/// and a `process_block` error stops consumption without calling `done`.
/// Sink errors carry their lifecycle phase and are never discarded.
///
/// Independent services (or clones of the injected ports) may run
/// concurrently; a service holds no mutable state across runs.
pub struct ConsumerService<P: PackageSource, S: StreamSource> {
    config: ConsumerConfig,
    packages: Arc<P>,
    streams: Arc<S>,
}

impl<P: PackageSource, S: StreamSource> ConsumerService<P, S> {
    pub fn new(config: ConsumerConfig, packages: Arc<P>, streams: Arc<S>) -> Self {
        Self {
            config,
            packages,
            streams,
        }
    }

    /// Resolve `reference` and stream it into `sink`.
    ///
    /// Returns the number of responses delivered on normal completion.
    #[instrument(skip_all, fields(package = %reference, range = %self.config.range))]
    pub async fn run(
        &self,
        reference: &PackageReference,
        sink: &dyn Sink,
    ) -> ConsumerResult<u64> {
        debug!("Resolving package");
        let package = self.packages.resolve(reference).await?;
        self.run_with_package(package, sink).await
    }

    /// Stream an already-resolved package into `sink`.
    pub async fn run_with_package(
        &self,
        package: Package,
        sink: &dyn Sink,
    ) -> ConsumerResult<u64> {
        let request = build_stream_request(
            &package,
            &self.config.output_modules,
            &self.config.range,
            self.config.fork_policy,
        )?;
        debug!(
            graph = request.modules.as_ref().map(|m| m.modules.len()).unwrap_or(0),
            outputs = request.output_modules.len(),
            "Stream request built"
        );

        let range = &self.config.range;
        sink.init(&range.start, range.stop.as_deref())
            .await
            .map_err(|source| {
                record_sink_error("init");
                ConsumerError::Sink {
                    phase: SinkPhase::Init,
                    source,
                }
            })?;

        let mut stream = self.streams.open_stream(request).await?;
        info!(range = %range, "📡 Session opened");

        let mut delivered: u64 = 0;
        while let Some(item) = stream.next().await {
            let response = match item {
                Ok(response) => response,
                Err(e) => {
                    record_stream_interrupted();
                    return Err(ConsumerError::StreamInterrupted(e.to_string()));
                }
            };

            if let Some(number) = block_number(&response) {
                trace!(block = number, "Response received");
            }

            let _timer = BlockTimer::new();
            sink.process_block(response).await.map_err(|source| {
                record_sink_error("process_block");
                ConsumerError::Sink {
                    phase: SinkPhase::ProcessBlock,
                    source,
                }
            })?;

            record_block_received();
            delivered += 1;
        }

        sink.done().await.map_err(|source| {
            record_sink_error("done");
            ConsumerError::Sink {
                phase: SinkPhase::Done,
                source,
            }
        })?;

        info!(blocks = delivered, "🏁 Stream complete");
        Ok(delivered)
    }
}

/// Block number of a data response, if it is one.
fn block_number(response: &Response) -> Option<u64> {
    match &response.message {
        Some(response::Message::Data(data)) => data.clock.as_ref().map(|c| c.number),
        _ => None,
    }
}
