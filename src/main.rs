// Command-line harness - render the configured targets and print a summary
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use graphite_render::infrastructure::config::{load_render_config, prepare_target};
use graphite_render::{EndpointConfig, Graph, RenderService, ReqwestTransport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let render_config = load_render_config().context("Failed to load render configuration")?;

    // Create transport (infrastructure layer)
    let transport = match render_config.graphite.timeout_secs {
        Some(secs) => ReqwestTransport::with_timeout(Duration::from_secs(secs))
            .context("Failed to build HTTP client")?,
        None => ReqwestTransport::new(),
    };

    let endpoint = EndpointConfig::new(&render_config.graphite.url, Arc::new(transport))?;

    // Build the graph (domain layer)
    let mut graph = Graph::new(Arc::new(endpoint));
    for target in &render_config.query.targets {
        graph.add_target(prepare_target(target, &render_config.query.vars));
    }
    for (key, value) in &render_config.query.parameters {
        graph.set_parameter(key.clone(), value.clone());
    }

    if graph.targets().next().is_none() {
        anyhow::bail!("No targets configured under [query] targets");
    }

    tracing::info!(url = %graph, "Rendering graph");
    let result_set = RenderService::default().render(&graph).await?;

    for series in &result_set {
        match series.latest() {
            Some(point) => println!(
                "{}\t{} points\tlatest {} at {}",
                series.target,
                series.data_points.len(),
                point.value,
                point.time.to_rfc3339()
            ),
            None => println!("{}\tno data", series.target),
        }
    }

    Ok(())
}
