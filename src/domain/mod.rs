// Domain layer - Query model and decoded series
pub mod endpoint;
pub mod graph;
pub mod series;
pub mod transport;
