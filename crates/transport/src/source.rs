//! gRPC stream source adapter.

use async_trait::async_trait;
use futures::TryStreamExt;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tracing::{debug, instrument};

use ostinato_core::error::{TransportError, TransportResult};
use ostinato_core::ports::{BlockResponseStream, StreamSource};
use ostinato_proto::v1::Request;
use ostinato_proto::v1::stream_client::StreamClient;

use crate::channel::{AuthInterceptor, TransportConfig, build_channel};

/// gRPC adapter implementing the StreamSource port.
///
/// Holds one lazy channel; each `open_stream` call issues a fresh
/// server-streaming RPC over it.
pub struct GrpcStreamSource {
    client: StreamClient<InterceptedService<Channel, AuthInterceptor>>,
}

impl GrpcStreamSource {
    /// Build the source from connection parameters. Synchronous: the
    /// channel is created lazily and no I/O happens here.
    #[instrument(skip_all, fields(endpoint = %config.endpoint))]
    pub fn new(config: &TransportConfig) -> TransportResult<Self> {
        let channel = build_channel(config)?;
        let interceptor = AuthInterceptor::new(&config.token)?;
        debug!("Transport ready");

        Ok(Self {
            client: StreamClient::with_interceptor(channel, interceptor),
        })
    }
}

#[async_trait]
impl StreamSource for GrpcStreamSource {
    async fn open_stream(&self, request: Request) -> TransportResult<BlockResponseStream> {
        let mut client = self.client.clone();
        let streaming = client
            .blocks(request)
            .await
            .map_err(|status| TransportError::SessionOpen(status.to_string()))?
            .into_inner();

        let stream =
            streaming.map_err(|status| TransportError::Interrupted(status.to_string()));
        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_source_construction_without_network() {
        let config = TransportConfig {
            endpoint: "localhost:9001".to_string(),
            token: "server_abc123".to_string(),
        };
        assert!(GrpcStreamSource::new(&config).is_ok());
    }
}
