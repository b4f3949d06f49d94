//! Stream request construction.
//!
//! Turns a decoded package, the caller's output-module selection and a
//! block range into the wire request for one streaming session. All
//! validation that can happen before network activity happens here.

use std::collections::HashSet;

use ostinato_proto::v1::{ForkStep, Package, Request};

use crate::error::RequestError;
use crate::models::{BlockRange, ForkPolicy};

/// Build the streaming request for one session.
///
/// The package's full module graph is embedded so the remote can compute
/// the requested outputs. Output module names must be unique and present
/// in the graph; a violation fails construction instead of being dropped.
/// Range tokens pass through untouched — absolute vs relative stop
/// semantics are resolved server-side.
pub fn build_stream_request(
    package: &Package,
    output_modules: &[String],
    range: &BlockRange,
    fork_policy: ForkPolicy,
) -> Result<Request, RequestError> {
    if range.start.is_empty() {
        return Err(RequestError::EmptyStartBlock);
    }
    if output_modules.is_empty() {
        return Err(RequestError::EmptyOutputModules);
    }

    let modules = package
        .modules
        .clone()
        .filter(|m| !m.modules.is_empty())
        .ok_or(RequestError::MissingModuleGraph)?;

    let known: HashSet<&str> = modules.modules.iter().map(|m| m.name.as_str()).collect();
    let mut seen = HashSet::new();
    for name in output_modules {
        if !seen.insert(name.as_str()) {
            return Err(RequestError::DuplicateModule(name.clone()));
        }
        if !known.contains(name.as_str()) {
            return Err(RequestError::UnknownModule {
                name: name.clone(),
                available: package.module_names().join(", "),
            });
        }
    }

    let fork_steps = match fork_policy {
        ForkPolicy::IrreversibleOnly => vec![ForkStep::Irreversible as i32],
    };

    Ok(Request {
        start_block: range.start.clone(),
        stop_block: range.stop.clone().unwrap_or_default(),
        fork_steps,
        modules: Some(modules),
        output_modules: output_modules.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ostinato_proto::v1::{KindMap, Module, Modules, module};

    fn package_with(names: &[&str]) -> Package {
        Package {
            version: 1,
            modules: Some(Modules {
                modules: names
                    .iter()
                    .map(|name| Module {
                        name: (*name).to_string(),
                        kind: Some(module::Kind::KindMap(KindMap {
                            output_type: "proto:test.Output".to_string(),
                        })),
                        ..Default::default()
                    })
                    .collect(),
                binaries: Vec::new(),
            }),
            package_meta: Vec::new(),
        }
    }

    fn outputs(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_request_embeds_graph_and_preserves_order() {
        let package = package_with(&["A", "B", "C"]);
        let range = BlockRange::new("100").with_stop("+10");

        let request = build_stream_request(
            &package,
            &outputs(&["C", "A"]),
            &range,
            ForkPolicy::IrreversibleOnly,
        )
        .expect("valid request");

        assert_eq!(request.start_block, "100");
        assert_eq!(request.stop_block, "+10");
        assert_eq!(request.output_modules, vec!["C", "A"]);
        // Le graphe complet est embarqué, pas seulement la sélection
        assert_eq!(request.modules.unwrap().modules.len(), 3);
    }

    // Test critique: la session ne doit jamais livrer de blocs spéculatifs
    #[test]
    fn test_fork_steps_irreversible_only() {
        let request = build_stream_request(
            &package_with(&["A"]),
            &outputs(&["A"]),
            &BlockRange::new("1"),
            ForkPolicy::default(),
        )
        .unwrap();
        assert_eq!(request.fork_steps, vec![ForkStep::Irreversible as i32]);
    }

    // Test critique: un module inconnu échoue la construction,
    // il n'est jamais ignoré silencieusement
    #[test]
    fn test_unknown_output_module_is_an_error() {
        let err = build_stream_request(
            &package_with(&["A", "B"]),
            &outputs(&["B", "Z"]),
            &BlockRange::new("1"),
            ForkPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::UnknownModule { ref name, .. } if name == "Z"));
    }

    #[test]
    fn test_duplicate_output_module_is_an_error() {
        let err = build_stream_request(
            &package_with(&["A"]),
            &outputs(&["A", "A"]),
            &BlockRange::new("1"),
            ForkPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::DuplicateModule(ref name) if name == "A"));
    }

    #[test]
    fn test_missing_pieces_fail_construction() {
        let package = package_with(&["A"]);

        let err = build_stream_request(
            &package,
            &outputs(&[]),
            &BlockRange::new("1"),
            ForkPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::EmptyOutputModules));

        let err = build_stream_request(
            &package,
            &outputs(&["A"]),
            &BlockRange::new(""),
            ForkPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::EmptyStartBlock));

        let err = build_stream_request(
            &Package::default(),
            &outputs(&["A"]),
            &BlockRange::new("1"),
            ForkPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RequestError::MissingModuleGraph));
    }
}
