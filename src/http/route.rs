//! Routing decision for a single request.
//!
//! [`classify`] walks a fixed decision tree and returns what to do without
//! touching the network. The one filesystem question it asks, "is this a
//! regular file?", goes through a [`Probe`].

use std::path::{Path, PathBuf};

use crate::http::request::Method;
use crate::site::Site;

/// Filesystem existence check used by routing.
pub trait Probe {
    fn is_file(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Filesystem;

impl Probe for Filesystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Method is not an HTTP method at all
    BadRequest,
    /// Known method the site does not answer
    MethodNotAllowed,
    /// Missing trailing slash; carries the `Location` value
    Redirect(String),
    /// Regular file named by the target
    ServeFile(PathBuf),
    /// Index file of the directory named by the target
    ServeIndex(PathBuf),
    NotFound,
}

/// Decides how to answer `method target`.
///
/// Order matters: method checks come first, then the path-safety check,
/// then existence. Unsafe targets are reported as `NotFound`. The served path
/// is the root with the target appended as written.
pub fn classify(method: &str, target: &str, site: &Site, probe: &impl Probe) -> Decision {
    let Some(method) = Method::from_str(method) else {
        return Decision::BadRequest;
    };
    if !site.allows(&method) {
        return Decision::MethodNotAllowed;
    }

    if !site.root.is_safe(target) {
        return Decision::NotFound;
    }

    // Existence is asked of the path as written: `/missing/../a.txt` is not a
    // file when `missing/` does not exist.
    let resolved = site.root.on_disk(target);

    if target.ends_with('/') {
        let index = resolved.join(&site.index);
        if probe.is_file(&index) {
            Decision::ServeIndex(index)
        } else {
            Decision::NotFound
        }
    } else if probe.is_file(&resolved) {
        Decision::ServeFile(resolved)
    } else {
        Decision::Redirect(format!("{target}/"))
    }
}
