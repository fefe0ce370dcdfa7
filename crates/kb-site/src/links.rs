//! Route resolution for links to documentation pages.

/// Resolves site-relative routes against the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    base_url: String,
    trailing_slash: bool,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self::new("/", false)
    }
}

impl SiteLinks {
    /// Create a resolver for a site mounted at `base_url`.
    ///
    /// A missing leading or trailing `/` on `base_url` is added.
    pub fn new(base_url: &str, trailing_slash: bool) -> Self {
        let trimmed = base_url.trim_matches('/');
        let base_url = if trimmed.is_empty() {
            "/".to_owned()
        } else {
            format!("/{trimmed}/")
        };
        Self {
            base_url,
            trailing_slash,
        }
    }

    /// Base URL of the site, always starting and ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a link target.
    ///
    /// External targets (`http://`, `https://`, `mailto:`) and fragments are
    /// returned unchanged. Everything else is treated as a site route.
    pub fn resolve(&self, target: &str) -> String {
        if is_external(target) || target.starts_with('#') {
            return target.to_owned();
        }

        let route = target.trim_start_matches('/');
        let mut url = format!("{}{route}", self.base_url);
        if self.trailing_slash && !url.ends_with('/') && !has_extension(route) {
            url.push('/');
        }
        url
    }

    /// URL of a static asset. Never gets a trailing slash.
    pub fn asset(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Check whether a link leaves the site.
fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://") || target.starts_with("mailto:")
}

/// Check whether the last path segment looks like a file name.
fn has_extension(route: &str) -> bool {
    let path = route.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}
