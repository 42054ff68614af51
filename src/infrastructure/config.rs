use serde::Deserialize;
use std::collections::HashMap;

const ENV_PREFIX: &str = "GRAPHITE";

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    pub graphite: GraphiteSettings,
    #[serde(default)]
    pub query: QuerySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphiteSettings {
    pub url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct QuerySettings {
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
    /// Values for `${name}` placeholders in targets
    #[serde(default)]
    pub vars: HashMap<String, String>,
}

pub fn load_render_config() -> anyhow::Result<RenderConfig> {
    load_render_config_from("config/graphite")
}

/// Load from `path` (extension optional) with `GRAPHITE__*` overrides
pub fn load_render_config_from(path: &str) -> anyhow::Result<RenderConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn parse_render_config(toml: &str) -> anyhow::Result<RenderConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace template variables in a target expression
pub fn prepare_target(target: &str, vars: &HashMap<String, String>) -> String {
    let mut result = target.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
