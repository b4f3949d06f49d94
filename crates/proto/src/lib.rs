//! Wire types for the `ostinato.v1` streaming protocol.
//!
//! The message and service definitions live in `proto/ostinato/v1/`; the
//! Rust bindings are vendored under `src/generated/` so the workspace builds
//! without a protoc toolchain. Regenerate with `prost-build`/`tonic-build`
//! when the schema changes.

/// Protocol version 1.
pub mod v1 {
    include!("generated/ostinato.v1.rs");
}

use v1::{Module, Package};

impl Package {
    /// Names of all modules in the package's module graph, in definition
    /// order. Empty when the package carries no module graph.
    pub fn module_names(&self) -> Vec<&str> {
        self.modules
            .as_ref()
            .map(|m| m.modules.iter().map(|module| module.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Look up a module definition by name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules
            .as_ref()
            .and_then(|m| m.modules.iter().find(|module| module.name == name))
    }
}
