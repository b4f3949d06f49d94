//! Reference sinks for the Ostinato consumer.
//!
//! This crate provides ready-made [`ostinato_core::ports::Sink`]
//! implementations for common consumption patterns:
//!
//! - [`LogSink`] - Log each block through `tracing`
//! - [`JsonLinesSink`] - Append one JSON object per block to a file
//!
//! Integrators with custom delivery targets implement the `Sink` trait
//! directly; these serve as working examples of the lifecycle contract.

mod jsonl;
mod log;

pub use jsonl::JsonLinesSink;
pub use log::LogSink;
