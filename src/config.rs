use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "wwwserve.yaml";

/// Top-level server configuration, read from YAML with env overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_addr: String,
}

/// What gets served and how.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Content root, relative paths are taken from the working directory
    pub root: PathBuf,
    /// File served for directory requests
    pub index: String,
    /// Methods that are answered instead of rejected with 405
    pub allowed_methods: Vec<String>,
    /// Verbose logging plus `Cache-Control: no-cache` on served files
    pub debug: bool,
    /// Optional deadline for the single request read
    pub read_timeout_ms: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "localhost:8080".to_string(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./www"),
            index: "index.html".to_string(),
            allowed_methods: vec!["GET".to_string()],
            debug: false,
            read_timeout_ms: None,
        }
    }
}

impl Config {
    /// Loads the file named by `CONFIG` (or `wwwserve.yaml`) if it exists,
    /// then applies the `LISTEN` and `ROOT` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut cfg = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(listen_addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = listen_addr;
        }
        if let Ok(root) = std::env::var("ROOT") {
            cfg.content.root = PathBuf::from(root);
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
