//! Sink logging each streamed response.

use async_trait::async_trait;
use tracing::{debug, info, trace};

use ostinato_core::error::SinkResult;
use ostinato_core::ports::Sink;
use ostinato_proto::v1::{Response, response};

/// Sink that logs block arrivals through `tracing`.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl Sink for LogSink {
    async fn init(&self, start_block: &str, stop_block: Option<&str>) -> SinkResult<()> {
        info!(
            start = start_block,
            stop = stop_block.unwrap_or("-"),
            "🎬 Session starting"
        );
        Ok(())
    }

    async fn process_block(&self, response: Response) -> SinkResult<()> {
        match response.message {
            Some(response::Message::Data(data)) => {
                let (number, id) = data
                    .clock
                    .map(|c| (c.number, c.id))
                    .unwrap_or((0, String::new()));
                info!(
                    block = number,
                    id = %id,
                    outputs = data.outputs.len(),
                    "⛓️  Block received"
                );
            }
            Some(response::Message::Session(session)) => {
                debug!(
                    trace_id = %session.trace_id,
                    start = session.resolved_start_block,
                    "Session acknowledged"
                );
            }
            None => trace!("Empty response"),
        }
        Ok(())
    }

    async fn done(&self) -> SinkResult<()> {
        info!("🏁 Session complete");
        Ok(())
    }
}
