//! gRPC transport for the Ostinato consumer.
//!
//! Implements the [`ostinato_core::ports::StreamSource`] port over an
//! authenticated TLS channel. Channel construction is lazy: no network
//! I/O happens until the first call is issued.

mod channel;
mod source;

pub use channel::{AuthInterceptor, DEFAULT_ENDPOINT, TransportConfig, build_channel};
pub use source::GrpcStreamSource;
