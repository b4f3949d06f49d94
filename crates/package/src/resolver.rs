//! Gateway and filesystem package resolver.

use std::path::Path;

use async_trait::async_trait;
use prost::Message;
use tracing::{debug, instrument};

use ostinato_core::error::{PackageError, PackageResult};
use ostinato_core::metrics::record_package_resolved;
use ostinato_core::models::PackageReference;
use ostinato_core::ports::PackageSource;
use ostinato_proto::v1::Package;

/// Public gateway serving the original consumer's packages.
pub const DEFAULT_GATEWAY: &str = "https://eos.mypinata.cloud";

/// Configuration for the package resolver.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Content-addressed gateway base URL. Identifiers are looked up at
    /// `<gateway>/ipfs/<cid>`.
    pub gateway: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            gateway: DEFAULT_GATEWAY.to_string(),
        }
    }
}

/// Package resolver adapter implementing the PackageSource port.
///
/// Stateless apart from its HTTP client; every resolve re-fetches and
/// re-decodes.
pub struct PackageResolver {
    config: ResolverConfig,
    http: reqwest::Client,
}

impl PackageResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Gateway lookup URL for a content-address identifier.
    fn gateway_url(&self, cid: &str) -> String {
        format!("{}/ipfs/{}", self.config.gateway.trim_end_matches('/'), cid)
    }

    /// Fetch package bytes from the content-addressed gateway.
    #[instrument(skip(self))]
    async fn fetch_remote(&self, cid: &str) -> PackageResult<Vec<u8>> {
        let url = self.gateway_url(cid);
        debug!(%url, "Fetching package from gateway");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PackageError::Fetch {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PackageError::GatewayStatus {
                url,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| PackageError::Fetch {
            url,
            message: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }

    /// Read package bytes from the filesystem, resolving relative paths
    /// against the current working directory.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    async fn read_local(&self, path: &Path) -> PackageResult<Vec<u8>> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        };

        debug!("Reading package file");
        tokio::fs::read(&path)
            .await
            .map_err(|e| PackageError::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }

    fn decode(bytes: &[u8]) -> PackageResult<Package> {
        Package::decode(bytes).map_err(|e| PackageError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PackageSource for PackageResolver {
    async fn resolve(&self, reference: &PackageReference) -> PackageResult<Package> {
        let (bytes, source) = match reference {
            PackageReference::Ipfs(cid) => (self.fetch_remote(cid).await?, "gateway"),
            PackageReference::File(path) => (self.read_local(path).await?, "file"),
        };

        let package = Self::decode(&bytes)?;
        record_package_resolved(source);
        debug!(
            source,
            modules = package.module_names().len(),
            "Package resolved"
        );
        Ok(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use ostinato_proto::v1::{KindMap, Module, Modules, module};

    fn test_package() -> Package {
        Package {
            version: 1,
            modules: Some(Modules {
                modules: vec![Module {
                    name: "map_transfers".to_string(),
                    kind: Some(module::Kind::KindMap(KindMap {
                        output_type: "proto:test.Transfers".to_string(),
                    })),
                    ..Default::default()
                }],
                binaries: Vec::new(),
            }),
            package_meta: Vec::new(),
        }
    }

    fn resolver_with_gateway(gateway: &str) -> PackageResolver {
        PackageResolver::new(ResolverConfig {
            gateway: gateway.to_string(),
        })
    }

    /// One-shot HTTP server answering a single request with `status` and
    /// `body`, returning the request line's path.
    async fn one_shot_gateway(status: &'static str, body: Vec<u8>) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let path = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or_default()
                .to_string();

            let header = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(header.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.ok();
            path
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_gateway_url_substitutes_identifier() {
        let resolver = resolver_with_gateway("https://eos.mypinata.cloud/");
        assert_eq!(
            resolver.gateway_url("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"),
            "https://eos.mypinata.cloud/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG"
        );
    }

    #[tokio::test]
    async fn test_resolve_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pkg.bin");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&test_package().encode_to_vec()).unwrap();

        let resolver = PackageResolver::new(ResolverConfig::default());
        let reference = PackageReference::File(path);

        let package = resolver.resolve(&reference).await.expect("resolve");
        assert_eq!(package.module_names(), vec!["map_transfers"]);
    }

    // Test critique: un binaire tronqué doit remonter une erreur de
    // décodage, jamais un paquet vide
    #[tokio::test]
    async fn test_truncated_file_fails_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pkg.bin");
        let bytes = test_package().encode_to_vec();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let resolver = PackageResolver::new(ResolverConfig::default());
        let err = resolver
            .resolve(&PackageReference::File(path))
            .await
            .unwrap_err();
        assert!(matches!(err, PackageError::Decode(_)));
    }

    #[tokio::test]
    async fn test_missing_file_fails_read() {
        let resolver = PackageResolver::new(ResolverConfig::default());
        let err = resolver
            .resolve(&PackageReference::File("/nonexistent/pkg.bin".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, PackageError::Read { .. }));
    }

    // Test critique: le résolveur interroge exactement l'URL
    // `<gateway>/ipfs/<cid>` et décode la réponse
    #[tokio::test]
    async fn test_resolve_from_gateway() {
        let cid = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
        let (gateway, handle) =
            one_shot_gateway("200 OK", test_package().encode_to_vec()).await;

        let resolver = resolver_with_gateway(&gateway);
        let package = resolver
            .resolve(&PackageReference::Ipfs(cid.to_string()))
            .await
            .expect("resolve");

        assert_eq!(package.module_names(), vec!["map_transfers"]);
        assert_eq!(handle.await.unwrap(), format!("/ipfs/{cid}"));
    }

    // Test critique: une réponse non-2xx échoue sans tenter de décoder
    // le corps
    #[tokio::test]
    async fn test_gateway_error_status_fails_fetch() {
        let (gateway, _handle) =
            one_shot_gateway("404 Not Found", b"not found".to_vec()).await;

        let resolver = resolver_with_gateway(&gateway);
        let err = resolver
            .resolve(&PackageReference::Ipfs(
                "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_string(),
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, PackageError::GatewayStatus { status: 404, .. }));
    }
}
