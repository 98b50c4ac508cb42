use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 80;
pub const DEFAULT_ROOT: &str = "./static";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `STATICD_CONFIG`
    /// (default `staticd.yaml`); a missing file yields the defaults.
    /// `STATICD_PORT` overrides the port either way.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("STATICD_CONFIG").unwrap_or_else(|_| "staticd.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => serde_yaml::from_str(&text)
                .with_context(|| format!("invalid config file {path}"))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(e).with_context(|| format!("cannot read config file {path}")),
        };

        if let Ok(port) = std::env::var("STATICD_PORT") {
            cfg.port = port.parse().context("STATICD_PORT must be a port number")?;
        }

        Ok(cfg)
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
