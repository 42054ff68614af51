// Side channel for non-fatal render anomalies

/// Receives anomalies that do not fail a render on their own.
///
/// A non-200 status is reported here and the body is still decoded, so a
/// service-side error document reaches the caller through the normal path.
pub trait RenderObserver: Send + Sync {
    fn unexpected_status(&self, url: &str, status: u16);

    /// Called before a transport failure is returned to the caller
    fn request_failed(&self, _url: &str, _error: &(dyn std::error::Error + 'static)) {}
}
