//! Ostinato - block stream consumer.
//!
//! # Usage
//!
//! ```bash
//! # Stream an IPFS-published package, logging each block
//! ostinato QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG --modules map_transfers
//!
//! # Stream a local package into a JSON-lines file
//! ostinato ./pkg.bin --modules map_transfers --start-block 100 --stop-block +10 \
//!     --output blocks.jsonl
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ostinato_core::metrics::init_metrics;
use ostinato_core::models::{BlockRange, PackageReference};
use ostinato_core::ports::Sink;
use ostinato_core::services::{ConsumerConfig, ConsumerService};
use ostinato_package::{DEFAULT_GATEWAY, PackageResolver, ResolverConfig};
use ostinato_sinks::{JsonLinesSink, LogSink};
use ostinato_transport::{DEFAULT_ENDPOINT, GrpcStreamSource, TransportConfig};

/// Ostinato CLI - stream irreversible blocks into a sink.
#[derive(Parser, Debug)]
#[command(name = "ostinato")]
#[command(about = "Ostinato - stream irreversible blocks into a sink")]
#[command(version)]
struct Cli {
    /// Package reference: content-address identifier or filesystem path.
    #[arg(env = "PACKAGE")]
    package: String,

    /// Output modules to request, comma separated.
    #[arg(long, short, env = "MODULES", value_delimiter = ',', required = true)]
    modules: Vec<String>,

    /// First block to stream.
    #[arg(long, env = "START_BLOCK_NUM", default_value = "10000")]
    start_block: String,

    /// Last block to stream, absolute or relative ("+N"). Omit to stream
    /// without an upper bound.
    #[arg(long, env = "STOP_BLOCK_NUM")]
    stop_block: Option<String>,

    /// Bearer token for the streaming service.
    #[arg(long, env = "API_TOKEN", default_value = "")]
    api_token: String,

    /// Streaming service endpoint as host:port.
    #[arg(long, env = "ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Content-addressed gateway base URL.
    #[arg(long, env = "IPFS_GATEWAY", default_value = DEFAULT_GATEWAY)]
    gateway: String,

    /// Write block records to this JSON-lines file instead of logging them.
    #[arg(long)]
    output: Option<std::path::PathBuf>,

    /// Prometheus metrics port.
    #[arg(long, env = "METRICS_PORT", default_value = "9090")]
    metrics_port: u16,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    // Prometheus metrics exporter (optional - failures don't crash the app)
    match format!("0.0.0.0:{}", cli.metrics_port).parse::<std::net::SocketAddr>() {
        Ok(metrics_addr) => {
            match PrometheusBuilder::new()
                .with_http_listener(metrics_addr)
                .install()
            {
                Ok(()) => init_metrics(),
                Err(e) => {
                    warn!(
                        "⚠️  Failed to start metrics exporter: {}. Continuing without metrics.",
                        e
                    );
                }
            }
        }
        Err(e) => {
            warn!(
                "⚠️  Invalid metrics address: {}. Continuing without metrics.",
                e
            );
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // 🚀 STARTUP
    // ─────────────────────────────────────────────────────────────────────────
    info!("🚀 Starting Ostinato");
    debug!(endpoint = %cli.endpoint, "Streaming endpoint");
    debug!(gateway = %cli.gateway, "Package gateway");

    let reference = PackageReference::parse(&cli.package);
    let mut range = BlockRange::new(cli.start_block.clone());
    if let Some(stop) = &cli.stop_block {
        range = range.with_stop(stop.clone());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // 📦 WIRING
    // ─────────────────────────────────────────────────────────────────────────
    let resolver = Arc::new(PackageResolver::new(ResolverConfig {
        gateway: cli.gateway.clone(),
    }));

    let transport_config = TransportConfig {
        endpoint: cli.endpoint.clone(),
        token: cli.api_token.clone(),
    };
    let transport =
        Arc::new(GrpcStreamSource::new(&transport_config).context("Failed to build transport")?);

    let sink: Box<dyn Sink> = match &cli.output {
        Some(path) => {
            info!(path = %path.display(), "📝 Block records go to file");
            Box::new(JsonLinesSink::new(path))
        }
        None => Box::new(LogSink),
    };

    let service = ConsumerService::new(
        ConsumerConfig::new(cli.modules.clone(), range),
        resolver,
        transport,
    );

    // ─────────────────────────────────────────────────────────────────────────
    // ⚡ STREAM
    // ─────────────────────────────────────────────────────────────────────────
    tokio::select! {
        result = service.run(&reference, sink.as_ref()) => {
            let blocks = result.context("Stream session failed")?;
            info!(blocks, "✅ Session finished");
        }
        _ = signal::ctrl_c() => {
            info!("🛑 Interrupted, shutting down");
        }
    }

    Ok(())
}

/// Initialize the tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}
