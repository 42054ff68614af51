// Render service - Use case for fetching and decoding graph data
use crate::application::observer::RenderObserver;
use crate::domain::graph::Graph;
use crate::domain::series::ResultSet;
use crate::error::{body_snippet, GraphiteError};
use crate::infrastructure::tracing_observer::TracingObserver;
use crate::infrastructure::wire::decode_render_body;
use std::sync::Arc;

/// Wire format requested from the render endpoint
pub const RENDER_FORMAT: &str = "json";

const STATUS_OK: u16 = 200;

#[derive(Clone)]
pub struct RenderService {
    observer: Arc<dyn RenderObserver>,
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new(Arc::new(TracingObserver))
    }
}

impl RenderService {
    pub fn new(observer: Arc<dyn RenderObserver>) -> Self {
        Self { observer }
    }

    /// Fetch the graph's current targets and parameters and decode the reply.
    ///
    /// Holds no state between calls. A non-200 status goes to the observer and
    /// decoding proceeds on whatever body came back.
    pub async fn render(&self, graph: &Graph) -> Result<ResultSet, GraphiteError> {
        let url = graph.request_url(RENDER_FORMAT);
        tracing::debug!(url = %url, "Requesting render");

        let response = match graph.config().transport().get(&url).await {
            Ok(response) => response,
            Err(source) => {
                self.observer.request_failed(&url, &*source);
                return Err(GraphiteError::Transport { url, source });
            }
        };

        if response.status != STATUS_OK {
            self.observer.unexpected_status(&url, response.status);
        }

        let result_set = match decode_render_body(&response.body) {
            Ok(result_set) => result_set,
            Err(source) => {
                return Err(GraphiteError::Decode {
                    body: body_snippet(&response.body),
                    url,
                    source,
                });
            }
        };

        tracing::debug!(series = result_set.len(), "Decoded render response");
        Ok(result_set)
    }
}
