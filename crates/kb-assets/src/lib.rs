//! Static asset access for the knowledge base site.
//!
//! Provides a single API for images and stylesheets in both embedded and
//! filesystem modes:
//!
//! - **`embed` feature on**: Assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: Assets are read from an [`AssetDir`] root at
//!   runtime (`static/` next to `kb.toml` by default)

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Embedded static assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../../static"]
#[prefix = ""]
struct Assets;

/// Default asset directory, relative to the project root.
pub const DEFAULT_DIR: &str = "static";

/// Location of the site's static assets.
///
/// With the `embed` feature the compiled-in files are served and `root` is
/// only reported, never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDir {
    root: PathBuf,
}

impl Default for AssetDir {
    fn default() -> Self {
        Self::new(DEFAULT_DIR)
    }
}

impl AssetDir {
    /// Assets read from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory assets are read from in filesystem mode.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get an asset by path (relative to the asset root).
    ///
    /// Returns the file contents if the asset exists, `None` otherwise.
    #[cfg(feature = "embed")]
    pub fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        Assets::get(path).map(|f| f.data)
    }

    /// Get an asset by path (relative to the asset root).
    ///
    /// Returns the file contents if the asset exists, `None` otherwise.
    #[cfg(not(feature = "embed"))]
    pub fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        if !is_safe_path(path) {
            return None;
        }
        std::fs::read(self.root.join(path)).ok().map(Cow::Owned)
    }

    /// Check whether an asset exists without reading it.
    #[cfg(feature = "embed")]
    pub fn exists(&self, path: &str) -> bool {
        Assets::get(path).is_some()
    }

    /// Check whether an asset exists without reading it.
    #[cfg(not(feature = "embed"))]
    pub fn exists(&self, path: &str) -> bool {
        is_safe_path(path) && self.root.join(path).is_file()
    }

    /// All available asset paths, sorted.
    #[cfg(feature = "embed")]
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = Assets::iter().map(Cow::into_owned).collect();
        paths.sort();
        paths
    }

    /// All available asset paths, sorted.
    #[cfg(not(feature = "embed"))]
    pub fn paths(&self) -> Vec<String> {
        walk_dir(&self.root)
    }
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}

/// Reject paths that would escape the asset directory.
#[cfg(not(feature = "embed"))]
fn is_safe_path(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && path.split('/').all(|segment| segment != "..")
}

/// Recursively walk a directory and return paths relative to `base`.
#[cfg(not(feature = "embed"))]
fn walk_dir(base: &Path) -> Vec<String> {
    let mut result = Vec::new();
    walk_dir_inner(base, base, &mut result);
    result.sort();
    result
}

#[cfg(not(feature = "embed"))]
fn walk_dir_inner(base: &Path, dir: &Path, result: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir_inner(base, &path, result);
        } else if let Ok(rel) = path.strip_prefix(base) {
            // Normalize to forward slashes
            result.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}
