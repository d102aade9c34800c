//! Validated, immutable serving configuration.
//!
//! A [`Site`] is built once at startup from [`ContentConfig`] and shared with
//! every connection. It owns the [`ContentRoot`], which performs the
//! path-safety check for request targets.

use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::ContentConfig;
use crate::http::request::Method;

/// Absolute directory that every served path must stay under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    path: PathBuf,
}

impl ContentRoot {
    /// Resolves a configured root to an absolute path.
    ///
    /// Existing directories are canonicalized (symlinks resolved). A root that
    /// does not exist yet is made absolute and normalized lexically.
    pub fn resolve(configured: impl AsRef<Path>) -> std::io::Result<Self> {
        let configured = configured.as_ref();
        let path = match configured.canonicalize() {
            Ok(path) => path,
            Err(_) => normalize(&std::path::absolute(configured)?),
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Joins a request target onto the root, or `None` if the result escapes it.
    ///
    /// `.` and empty segments are dropped and `..` removes the previous
    /// segment. The check runs on the final path, so `/../www/a` is fine when
    /// the root is `/srv/www`. Comparison is per component, so `/srv/wwwevil`
    /// is not under `/srv/www`.
    pub fn join(&self, target: &str) -> Option<PathBuf> {
        if !target.starts_with('/') {
            return None;
        }

        let mut joined = self.path.clone();
        for segment in target.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    joined.pop();
                }
                name => {
                    // a segment may not smuggle in a root or prefix of its own
                    if Path::new(name).components().any(|c| !matches!(c, Component::Normal(_))) {
                        return None;
                    }
                    joined.push(name);
                }
            }
        }

        joined.starts_with(&self.path).then_some(joined)
    }

    /// Whether `target` stays under the root (see [`ContentRoot::join`]).
    pub fn is_safe(&self, target: &str) -> bool {
        self.join(target).is_some()
    }

    /// The root with `target` appended verbatim, `.` and `..` left for the
    /// filesystem to resolve. Only meaningful for targets that passed
    /// [`ContentRoot::is_safe`].
    pub fn on_disk(&self, target: &str) -> PathBuf {
        let mut raw = self.path.as_os_str().to_owned();
        raw.push(target);
        PathBuf::from(raw)
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Everything the request handler needs to know about what it serves.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: ContentRoot,
    pub index: String,
    pub allowed_methods: Vec<Method>,
    pub debug: bool,
    pub read_timeout: Option<Duration>,
}

impl Site {
    pub fn from_config(cfg: &ContentConfig) -> anyhow::Result<Self> {
        let root = ContentRoot::resolve(&cfg.root)
            .map_err(|e| anyhow::anyhow!("resolving content root {}: {}", cfg.root.display(), e))?;

        if !root.path().is_dir() {
            warn!("Content root {} is not a directory, every request will 404", root.path().display());
        }

        if cfg.index.is_empty() || cfg.index.contains('/') || cfg.index == "." || cfg.index == ".." {
            anyhow::bail!("index must be a plain file name, got {:?}", cfg.index);
        }

        let allowed_methods = cfg
            .allowed_methods
            .iter()
            .map(|name| {
                Method::from_str(name)
                    .ok_or_else(|| anyhow::anyhow!("unrecognized method {:?} in allowed_methods", name))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        debug!("Serving {} (index {})", root.path().display(), cfg.index);

        Ok(Self {
            root,
            index: cfg.index.clone(),
            allowed_methods,
            debug: cfg.debug,
            read_timeout: cfg.read_timeout_ms.map(Duration::from_millis),
        })
    }

    /// Whether a recognized method is answered rather than rejected with 405.
    pub fn allows(&self, method: &Method) -> bool {
        self.allowed_methods.contains(method)
    }
}
