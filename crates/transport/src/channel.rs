//! Channel construction and call credentials.

use tonic::Status;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use ostinato_core::error::{TransportError, TransportResult};

/// Public reference endpoint of the streaming service.
pub const DEFAULT_ENDPOINT: &str = "eos.firehose.eosnation.io:9001";

/// Connection parameters for the streaming service.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Service endpoint as `host:port`.
    pub endpoint: String,
    /// Bearer token attached to every call. An empty token still produces
    /// a present, empty-valued `authorization` header.
    pub token: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: String::new(),
        }
    }
}

/// Per-call metadata generator injecting the bearer token verbatim.
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    token: MetadataValue<Ascii>,
}

impl AuthInterceptor {
    pub fn new(token: &str) -> TransportResult<Self> {
        let token = MetadataValue::try_from(token)
            .map_err(|e| TransportError::InvalidToken(e.to_string()))?;
        Ok(Self { token })
    }
}

impl Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: tonic::Request<()>) -> Result<tonic::Request<()>, Status> {
        request
            .metadata_mut()
            .insert("authorization", self.token.clone());
        Ok(request)
    }
}

/// Build the lazy TLS channel for a config.
///
/// Encryption is non-optional; the endpoint is always dialed as `https`.
/// The returned channel performs no I/O until the first call.
pub fn build_channel(config: &TransportConfig) -> TransportResult<Channel> {
    let endpoint = Endpoint::from_shared(format!("https://{}", config.endpoint))
        .map_err(|e| TransportError::InvalidEndpoint(e.to_string()))?
        .tls_config(ClientTlsConfig::new().with_native_roots())
        .map_err(|e| TransportError::Tls(e.to_string()))?;

    Ok(endpoint.connect_lazy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interceptor_attaches_token_verbatim() {
        let mut interceptor = AuthInterceptor::new("server_abc123").unwrap();
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        let value = request.metadata().get("authorization").unwrap();
        assert_eq!(value.to_str().unwrap(), "server_abc123");
    }

    // Test critique: un token vide produit quand même l'en-tête
    // authorization, avec une valeur vide - jamais un en-tête absent
    #[test]
    fn test_empty_token_still_sends_header() {
        let mut interceptor = AuthInterceptor::new("").unwrap();
        let request = interceptor.call(tonic::Request::new(())).unwrap();
        let value = request.metadata().get("authorization").unwrap();
        assert_eq!(value.to_str().unwrap(), "");
    }

    #[test]
    fn test_invalid_token_rejected_at_construction() {
        let err = AuthInterceptor::new("token\nwith newline").unwrap_err();
        assert!(matches!(err, TransportError::InvalidToken(_)));
    }

    // La construction est paresseuse: aucun réseau, donc un hôte
    // injoignable passe
    #[tokio::test]
    async fn test_channel_construction_is_lazy() {
        let config = TransportConfig {
            endpoint: "unroutable.invalid:9001".to_string(),
            token: String::new(),
        };
        assert!(build_channel(&config).is_ok());
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = TransportConfig {
            endpoint: "bad endpoint with spaces".to_string(),
            token: String::new(),
        };
        let err = build_channel(&config).unwrap_err();
        assert!(matches!(err, TransportError::InvalidEndpoint(_)));
    }
}
