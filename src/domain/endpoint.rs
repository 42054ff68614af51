// Endpoint configuration - validated base URL plus the shared transport
use crate::domain::transport::HttpTransport;
use crate::error::GraphiteError;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Immutable description of one Graphite instance.
///
/// Built once and shared read-only by every [`Graph`](super::graph::Graph)
/// and render call against that instance.
#[derive(Clone)]
pub struct EndpointConfig {
    url: Url,
    base: String,
    transport: Arc<dyn HttpTransport>,
}

impl EndpointConfig {
    pub fn new(raw_url: &str, transport: Arc<dyn HttpTransport>) -> Result<Self, GraphiteError> {
        let url = Url::parse(raw_url).map_err(|e| GraphiteError::InvalidEndpoint {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;

        // A parsed Url always has a scheme; relative inputs already failed above
        let has_host = url.host_str().is_some_and(|host| !host.is_empty());
        if !has_host {
            return Err(GraphiteError::InvalidEndpoint {
                url: raw_url.to_string(),
                reason: "should be an absolute URI containing both scheme and host".to_string(),
            });
        }

        // Url normalizes "http://host" to "http://host/"; render paths are appended to the bare form
        let base = url.as_str().trim_end_matches('/').to_string();

        Ok(Self {
            url,
            base,
            transport,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}
