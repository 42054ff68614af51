// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod reqwest_transport;
pub mod tracing_observer;
pub mod wire;
