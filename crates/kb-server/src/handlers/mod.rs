//! HTTP request handlers.

pub(crate) mod config;
pub(crate) mod features;
pub(crate) mod home;

use md5::{Digest, Md5};

/// Compute a weak-collision `ETag` over the version and body.
pub(crate) fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
