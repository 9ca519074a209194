use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::contact::SocialLink;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// The configuration every other source is layered on top of.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATHS_ENV: &str = "FOLIO_CONFIG";

/// Values of the relay settings that have not been replaced yet start with
/// this prefix.
pub const PLACEHOLDER_PREFIX: &str = "YOUR_";

pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_ENV)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<PathBuf>>())
        .unwrap_or_default();
    load_with_override(&paths, &[])
}

/// Loads the default config, then every file in `paths` and finally every
/// inline toml snippet in `overrides`. Later sources take precedence.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    overrides
        .iter()
        .fold(builder, |builder, &source| {
            builder.add_source(File::from_str(source, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    pub relay: RelayConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub location: String,
    pub status_clear_delay: Duration,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    pub endpoint_override: Option<Url>,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub timeout: Duration,
}

impl RelayConfig {
    /// Whether every relay setting has been replaced with a real value.
    pub fn is_provisioned(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .into_iter()
            .all(|value| !value.is_empty() && !value.starts_with(PLACEHOLDER_PREFIX))
    }
}
