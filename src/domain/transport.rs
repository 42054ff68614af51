// Transport seam for issuing render requests
use async_trait::async_trait;
use bytes::Bytes;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Status code and fully buffered body of one response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// HTTP client capability shared by every graph built on one endpoint.
///
/// Implementations must be safe to call from concurrent renders. Deadlines,
/// connection reuse and TLS are the implementation's business.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET a fully-formed URL and return the whole body
    async fn get(&self, url: &str) -> Result<HttpResponse, BoxError>;
}
