//! Classification of loader inputs

use std::borrow::Cow;

/// Where a loader input lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTarget<'a> {
    /// Absolute external URL, used verbatim
    External(&'a str),
    /// Path relative to the extension root
    Relative(&'a str),
}

impl<'a> ImportTarget<'a> {
    /// Classify a path by its `http` prefix
    pub fn classify(path: &'a str) -> Self {
        if path.starts_with("http") {
            ImportTarget::External(path)
        } else {
            ImportTarget::Relative(path)
        }
    }

    /// Expression evaluating to the URL of this target at runtime
    pub fn runtime_reference(&self, url_resolver: &str) -> String {
        match self {
            ImportTarget::External(url) => format!("\"{}\"", url),
            ImportTarget::Relative(path) => format!("{}(\"{}\")", url_resolver, path),
        }
    }

    /// Path usable from the extension root, e.g. in a service worker
    pub fn root_path(&self) -> Cow<'a, str> {
        match *self {
            ImportTarget::External(url) => Cow::Borrowed(url),
            ImportTarget::Relative(path) => Cow::Owned(format!("/{}", path)),
        }
    }
}
