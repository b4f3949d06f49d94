//! Sink appending one JSON object per block to a file.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;
use tracing::{debug, info};

use ostinato_core::error::{SinkError, SinkResult};
use ostinato_core::ports::Sink;
use ostinato_proto::v1::{BlockScopedData, Response, response};

/// One line of output per data block.
#[derive(Debug, Serialize)]
struct BlockRecord {
    number: u64,
    id: String,
    timestamp: Option<DateTime<Utc>>,
    outputs: Vec<OutputRecord>,
}

#[derive(Debug, Serialize)]
struct OutputRecord {
    module: String,
    bytes: usize,
}

impl BlockRecord {
    fn from_data(data: &BlockScopedData) -> Self {
        let (number, id, timestamp) = data
            .clock
            .as_ref()
            .map(|c| {
                (
                    c.number,
                    c.id.clone(),
                    DateTime::from_timestamp_millis(c.timestamp_ms),
                )
            })
            .unwrap_or((0, String::new(), None));

        Self {
            number,
            id,
            timestamp,
            outputs: data
                .outputs
                .iter()
                .map(|o| OutputRecord {
                    module: o.name.clone(),
                    bytes: o.data.len(),
                })
                .collect(),
        }
    }
}

/// Sink writing newline-delimited JSON block records to a file.
///
/// The file is created on `init` (truncating any previous content) and
/// flushed on `done`. Non-data responses are skipped.
pub struct JsonLinesSink {
    path: PathBuf,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Sink for JsonLinesSink {
    async fn init(&self, start_block: &str, stop_block: Option<&str>) -> SinkResult<()> {
        let file = File::create(&self.path).await?;
        *self.writer.lock().await = Some(BufWriter::new(file));
        info!(
            path = %self.path.display(),
            start = start_block,
            stop = stop_block.unwrap_or("-"),
            "📝 Writing block records"
        );
        Ok(())
    }

    async fn process_block(&self, response: Response) -> SinkResult<()> {
        let Some(response::Message::Data(data)) = response.message else {
            return Ok(());
        };

        let mut line = serde_json::to_vec(&BlockRecord::from_data(&data))?;
        line.push(b'\n');

        let mut guard = self.writer.lock().await;
        let writer = guard
            .as_mut()
            .ok_or_else(|| SinkError::new("sink not initialized"))?;
        writer.write_all(&line).await?;
        Ok(())
    }

    async fn done(&self) -> SinkResult<()> {
        let mut guard = self.writer.lock().await;
        if let Some(writer) = guard.as_mut() {
            writer.flush().await?;
        }
        debug!(path = %self.path.display(), "Records flushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ostinato_proto::v1::{Clock, ModuleOutput};

    fn data_response(number: u64) -> Response {
        Response {
            message: Some(response::Message::Data(BlockScopedData {
                clock: Some(Clock {
                    id: format!("blk-{number}"),
                    number,
                    timestamp_ms: 1_700_000_000_000,
                }),
                step: 0,
                cursor: String::new(),
                outputs: vec![ModuleOutput {
                    name: "map_transfers".to_string(),
                    data: vec![0u8; 16],
                    logs: Vec::new(),
                }],
            })),
        }
    }

    // Test critique: N blocs de données produisent exactement N lignes
    // JSON relisibles, dans l'ordre d'arrivée
    #[tokio::test]
    async fn test_writes_one_line_per_data_block() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blocks.jsonl");
        let sink = JsonLinesSink::new(&path);

        sink.init("100", None).await.unwrap();
        for n in 1..=3 {
            sink.process_block(data_response(n)).await.unwrap();
        }
        // Les réponses hors-données sont ignorées
        sink.process_block(Response::default()).await.unwrap();
        sink.done().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let numbers: Vec<u64> = content
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["number"].as_u64().unwrap()
            })
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_process_before_init_fails() {
        let sink = JsonLinesSink::new("/tmp/never-created.jsonl");
        let err = sink.process_block(data_response(1)).await.unwrap_err();
        assert!(err.message().contains("not initialized"));
    }
}
