// Observer that reports render anomalies through tracing
use crate::application::observer::RenderObserver;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RenderObserver for TracingObserver {
    fn unexpected_status(&self, url: &str, status: u16) {
        tracing::warn!(url, status, "Render endpoint returned non-OK status, decoding body anyway");
    }

    fn request_failed(&self, url: &str, error: &(dyn std::error::Error + 'static)) {
        tracing::error!(url, error = %error, "Failed to request render endpoint");
    }
}
