//! Core domain layer for the Ostinato stream consumer.
//!
//! This crate contains the domain models, port traits (interfaces), and
//! business logic services for the block-stream consumer. It follows
//! hexagonal architecture principles - this is the innermost layer with
//! no dependencies on infrastructure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ostinato (binary)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │ ostinato-package │ ostinato-transport │  ostinato-sinks     │
//! │   (resolver)     │      (gRPC)        │  (reference sinks)  │
//! ├──────────────────┴────────────────────┴─────────────────────┤
//! │                    ostinato-proto                           │
//! │                    (wire types)                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  ostinato-core  ← YOU ARE HERE              │
//! │              (models, ports, services)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`models`] - Domain models (PackageReference, BlockRange, ForkPolicy)
//! - [`ports`] - Interface traits for adapters to implement
//! - [`services`] - Core business logic (ConsumerService, request builder)
//! - [`error`] - Domain error types
//! - [`metrics`] - Prometheus metrics definitions
//!
//! # Key Concepts
//!
//! ## Ports
//!
//! Ports define interfaces that external adapters must implement:
//!
//! - [`ports::PackageSource`] - Resolve a package reference into a manifest
//! - [`ports::StreamSource`] - Open a server-streamed block session
//! - [`ports::Sink`] - Receive the streamed responses
//!
//! ## Sink Lifecycle
//!
//! The consumer drives one sink per session through a fixed lifecycle:
//! `init` exactly once before the session is opened, `process_block` once
//! per response in strict arrival order, `done` exactly once after a
//! normal stream end. Each call is awaited before the driver proceeds, so
//! sink processing speed naturally throttles consumption.
//!
//! ## Consumer Lifecycle
//!
//! 1. Resolve the package reference into a decoded manifest
//! 2. Build the streaming request (module graph, outputs, range,
//!    irreversible-only fork filter)
//! 3. Initialize the sink
//! 4. Open the session and forward responses one at a time
//! 5. Finish the sink when the remote closes the stream

pub mod error;
pub mod metrics;
pub mod models;
pub mod ports;
pub mod services;
