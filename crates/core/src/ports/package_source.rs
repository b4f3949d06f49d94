//! Port trait for package resolution.
//!
//! This trait defines the interface for turning a package reference into
//! a decoded manifest. Implementations live in the infrastructure layer
//! (e.g., `ostinato-package`).

use async_trait::async_trait;

use ostinato_proto::v1::Package;

use crate::error::PackageResult;
use crate::models::PackageReference;

/// Port trait for package resolution.
///
/// Every call re-fetches and re-decodes; implementations do not cache.
#[async_trait]
pub trait PackageSource: Send + Sync {
    /// Resolve a reference into a decoded package manifest.
    async fn resolve(&self, reference: &PackageReference) -> PackageResult<Package>;
}
