use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_LISTEN_ADDR: &str = "localhost:8090";
pub const DEFAULT_DOC_ROOT: &str = "server/static-files";
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 5;

/// Env var naming an optional YAML config file.
pub const CONFIG_PATH_VAR: &str = "SERVER_CONFIG";
pub const LISTEN_VAR: &str = "LISTEN";
pub const DOC_ROOT_VAR: &str = "DOC_ROOT";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// Root folder under which clients may look things up.
    pub doc_root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// "host:port" to bind
    pub listen_addr: String,
    /// Deadline armed before every request read
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            doc_root: PathBuf::from(DEFAULT_DOC_ROOT),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads config from the process environment.
    ///
    /// Starts from defaults, then the YAML file named by `SERVER_CONFIG` if
    /// set, then `LISTEN` and `DOC_ROOT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(addr) = lookup(LISTEN_VAR) {
            cfg.server.listen_addr = addr;
        }
        if let Some(root) = lookup(DOC_ROOT_VAR) {
            cfg.doc_root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.server.read_timeout_secs)
    }

    /// Checks that the document root is an existing directory and the read
    /// timeout is non-zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        let meta = std::fs::metadata(&self.doc_root)
            .with_context(|| format!("doc root {:?} is not accessible", self.doc_root))?;

        if !meta.is_dir() {
            bail!("doc root {:?} is not a directory", self.doc_root);
        }

        if self.server.read_timeout_secs == 0 {
            bail!("read timeout must be greater than zero");
        }

        Ok(())
    }
}
