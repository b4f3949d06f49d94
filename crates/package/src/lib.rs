//! Package resolution for the Ostinato consumer.
//!
//! Implements the [`ostinato_core::ports::PackageSource`] port: a package
//! reference is either fetched from a content-addressed HTTPS gateway or
//! read from the local filesystem, then decoded as an `ostinato.v1`
//! package manifest.

mod resolver;

pub use resolver::{DEFAULT_GATEWAY, PackageResolver, ResolverConfig};
