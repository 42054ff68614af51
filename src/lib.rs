//! Client for the Graphite render API.
//!
//! A [`Graph`] collects target expressions and rendering parameters against an
//! [`EndpointConfig`]; [`RenderService`] issues the `/render` request through the
//! configured [`HttpTransport`] and decodes the JSON reply into a [`ResultSet`].
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::observer::RenderObserver;
pub use application::render_service::RenderService;
pub use domain::transport::{BoxError, HttpResponse, HttpTransport};
pub use domain::endpoint::EndpointConfig;
pub use domain::graph::Graph;
pub use domain::series::{DataPoint, ResultSet, Series};
pub use error::{DecodeError, GraphiteError};
pub use infrastructure::reqwest_transport::ReqwestTransport;
pub use infrastructure::tracing_observer::TracingObserver;
