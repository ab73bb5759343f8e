use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/monedero.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub session_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            session_path: client::default_session_path().to_string(),
        }
    }
}

/// Layers the TOML file, the `MONEDERO` environment prefix and the CLI
/// overrides, in that order.
pub fn load(
    config_path: Option<&str>,
    base_url: Option<String>,
    session_path: Option<String>,
) -> Result<AppConfig> {
    let config_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("MONEDERO"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = base_url {
        settings.base_url = base_url;
    }
    if let Some(session_path) = session_path {
        settings.session_path = session_path;
    }

    Ok(settings)
}
