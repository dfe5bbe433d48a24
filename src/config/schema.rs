//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Output naming configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory prepended to every derived loader output name
    #[serde(default)]
    pub dir: String,
}

/// Extension runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Runtime call resolving an extension-relative path to an absolute URL
    #[serde(default = "default_url_resolver")]
    pub url_resolver: String,

    /// File name of the service worker loader
    #[serde(default = "default_service_worker")]
    pub service_worker: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            url_resolver: default_url_resolver(),
            service_worker: default_service_worker(),
        }
    }
}

fn default_url_resolver() -> String {
    "chrome.runtime.getURL".to_string()
}

fn default_service_worker() -> String {
    "serviceWorker.js".to_string()
}

/// HTML bootstrap page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlConfig {
    /// Value of the `lang` attribute on `<html>`
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            lang: default_lang(),
        }
    }
}

fn default_lang() -> String {
    "en".to_string()
}
