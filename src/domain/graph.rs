// Graph - targets and rendering parameters for one render query
use crate::domain::endpoint::EndpointConfig;
use crate::error::GraphiteError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use url::Url;

const TARGET_KEY: &str = "target";
const FORMAT_KEY: &str = "format";

/// A render query under construction.
///
/// Targets form a set, so adding the same expression twice leaves a single
/// `target=` entry. Parameters are keyed, and the last write wins.
/// The `format` entry is injected per request and never stored here.
#[derive(Debug, Clone)]
pub struct Graph {
    config: Arc<EndpointConfig>,
    targets: BTreeSet<String>,
    parameters: BTreeMap<String, String>,
}

impl Graph {
    pub fn new(config: Arc<EndpointConfig>) -> Self {
        Self {
            config,
            targets: BTreeSet::new(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Add a metric that will be rendered
    pub fn add_target(&mut self, target: impl Into<String>) {
        self.targets.insert(target.into());
    }

    pub fn remove_target(&mut self, target: &str) {
        self.targets.remove(target);
    }

    pub fn has_target(&self, target: &str) -> bool {
        self.targets.contains(target)
    }

    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(String::as_str)
    }

    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(key.into(), value.into());
    }

    pub fn remove_parameter(&mut self, key: &str) {
        self.parameters.remove(key);
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encoded targets and parameters, without the request `format`
    pub fn build_query_string(&self) -> String {
        encode_pairs(self.query_pairs(None))
    }

    /// Display form: `{base}/render/?{query}`
    pub fn build_url(&self) -> String {
        format!("{}/render/?{}", self.config.base_url(), self.build_query_string())
    }

    pub fn parse_url(&self) -> Result<Url, GraphiteError> {
        let raw = self.build_url();
        Url::parse(&raw).map_err(|e| GraphiteError::InvalidEndpoint {
            reason: e.to_string(),
            url: raw,
        })
    }

    /// Request form: `{base}/render?{query}&format={format}`.
    ///
    /// A caller-set `format` parameter is replaced, not duplicated.
    pub fn request_url(&self, format: &str) -> String {
        format!(
            "{}/render?{}",
            self.config.base_url(),
            encode_pairs(self.query_pairs(Some(format)))
        )
    }

    // Pairs sorted by key; values under one key keep their order
    fn query_pairs<'a>(&'a self, format: Option<&'a str>) -> Vec<(&'a str, &'a str)> {
        let mut pairs: Vec<(&str, &str)> =
            self.targets.iter().map(|t| (TARGET_KEY, t.as_str())).collect();

        pairs.extend(
            self.parameters
                .iter()
                .filter(|(k, _)| format.is_none() || k.as_str() != FORMAT_KEY)
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );

        if let Some(format) = format {
            pairs.push((FORMAT_KEY, format));
        }

        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_url())
    }
}

fn encode_pairs(pairs: Vec<(&str, &str)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transport::testing::StubTransport;

    fn graph() -> Graph {
        let config =
            EndpointConfig::new("http://foobar:8282", StubTransport::responding(200, "[]")).unwrap();
        Graph::new(Arc::new(config))
    }

    fn target_count(query: &str) -> usize {
        query.split('&').filter(|pair| pair.starts_with("target=")).count()
    }

    #[test]
    fn test_new_graph_is_empty() {
        let g = graph();
        assert_eq!(g.targets().count(), 0);
        assert_eq!(g.parameters().count(), 0);
        assert_eq!(g.build_query_string(), "");
    }

    #[test]
    fn test_build_url_returns_display_form() {
        let mut g = graph();
        g.add_target("foo.bar");

        assert_eq!(g.build_url(), "http://foobar:8282/render/?target=foo.bar");
        assert_eq!(g.to_string(), g.build_url());
    }

    #[test]
    fn test_parse_url_matches_display_form() {
        let mut g = graph();
        g.add_target("foo.bar");
        g.add_target("servers.{web1,web2}.cpu.*");

        let url = g.parse_url().unwrap();
        assert_eq!(url.as_str(), g.build_url());
    }

    #[test]
    fn test_add_target_is_idempotent() {
        let mut once = graph();
        once.add_target("foo.bar");

        let mut twice = graph();
        twice.add_target("foo.bar");
        twice.add_target("foo.bar");

        assert_eq!(once.build_query_string(), twice.build_query_string());
    }

    #[test]
    fn test_one_target_entry_per_distinct_target() {
        let mut g = graph();
        g.add_target("a.b");
        g.add_target("c.d");
        g.add_target("a.b");
        g.add_target("e.f");
        g.remove_target("c.d");
        g.remove_target("never.added");

        let query = g.build_query_string();
        assert_eq!(target_count(&query), 2);
        assert!(query.split('&').any(|p| p == "target=a.b"));
        assert!(query.split('&').any(|p| p == "target=e.f"));
        assert!(!g.has_target("c.d"));
    }

    #[test]
    fn test_selector_syntax_is_percent_encoded() {
        let mut g = graph();
        g.add_target("servers.{web1,web2}.cpu.*");

        assert_eq!(
            g.build_query_string(),
            "target=servers.%7Bweb1%2Cweb2%7D.cpu.%2A"
        );
    }

    #[test]
    fn test_set_parameter_overwrites() {
        let mut g = graph();
        g.set_parameter("from", "-1h");
        g.set_parameter("from", "-6h");

        assert_eq!(g.parameters().collect::<Vec<_>>(), vec![("from", "-6h")]);
        assert_eq!(g.build_query_string(), "from=-6h");

        g.remove_parameter("from");
        g.remove_parameter("from");
        assert_eq!(g.build_query_string(), "");
    }

    #[test]
    fn test_request_url_injects_json_format() {
        let mut g = graph();
        g.add_target("foo.bar");
        g.set_parameter("from", "-6h");

        assert_eq!(
            g.request_url("json"),
            "http://foobar:8282/render?format=json&from=-6h&target=foo.bar"
        );
        // stored parameters are untouched
        assert_eq!(g.parameters().count(), 1);
        assert!(!g.build_url().contains("format="));
    }

    #[test]
    fn test_request_url_overrides_caller_format() {
        let mut g = graph();
        g.add_target("foo.bar");
        g.set_parameter("format", "png");

        let request = g.request_url("json");
        assert_eq!(request.matches("format=").count(), 1);
        assert!(request.contains("format=json"));
        assert!(g.build_url().contains("format=png"));
    }
}
