use aws_sdk_dynamodb::config::endpoint::{Endpoint, EndpointFuture, Params, ResolveEndpoint};
use url::Url;

use crate::dynamodb::ConfigError;

/// Endpoint resolver that pins every request to a fixed URI.
///
/// Used with DynamoDB Local: the SDK's default resolver derives the endpoint from the
/// region, this one ignores the request parameters and returns the override unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEndpoint {
    url: String,
}

impl LocalEndpoint {
    /// Validates `endpoint` as an absolute `http` or `https` URI with a host.
    ///
    /// The original string is kept as-is, so `http://localhost:8000` is not rewritten to
    /// `http://localhost:8000/`.
    pub fn parse(endpoint: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };

        let parsed = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(invalid("expected an absolute URI with a host".to_string()));
        }
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!(
                "unsupported scheme '{}', expected http or https",
                parsed.scheme()
            )));
        }

        Ok(Self {
            url: endpoint.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ResolveEndpoint for LocalEndpoint {
    fn resolve_endpoint<'a>(&'a self, _params: &'a Params) -> EndpointFuture<'a> {
        EndpointFuture::ready(Ok(Endpoint::builder().url(self.url.clone()).build()))
    }
}
