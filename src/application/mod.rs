// Application layer - Render use case and its anomaly side channel
pub mod observer;
pub mod render_service;
