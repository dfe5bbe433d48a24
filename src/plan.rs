//! Declarative loader plans
//!
//! A plan lists the loaders to render so the generator can be driven without
//! a bundler, e.g. from the command line.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bundle::{OutputChunk, VirtualFile};
use crate::error::Result;
use crate::loader::{LoaderGenerator, LoaderKind};

/// A single loader request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LoaderRequest {
    /// HTML page hosting module scripts
    Html {
        name: String,
        #[serde(default)]
        scripts: Vec<String>,
    },

    /// Content script loader
    Script {
        name: String,
        #[serde(default)]
        inputs: Vec<String>,
        #[serde(default)]
        inject: bool,
    },

    /// Background service worker loader
    ServiceWorker {
        #[serde(default)]
        inputs: Vec<String>,
    },

    /// Loader for a bundled chunk, skipped when the chunk has no imports
    Chunk {
        name: String,
        chunk: OutputChunk,
        #[serde(default)]
        inject: bool,
    },
}

impl LoaderRequest {
    /// Render this request, `None` when no loader is needed
    pub fn render(&self, generator: &LoaderGenerator) -> Option<VirtualFile> {
        match self {
            LoaderRequest::Html { name, scripts } => Some(generator.html_loader(name, scripts)),
            LoaderRequest::Script { name, inputs, inject } => {
                generator.render(LoaderKind::script(*inject), name, inputs)
            }
            LoaderRequest::ServiceWorker { inputs } => {
                generator.render(LoaderKind::ServiceWorker, "", inputs)
            }
            LoaderRequest::Chunk { name, chunk, inject } => generator.chunk_loader(name, chunk, *inject),
        }
    }
}

/// An ordered list of loader requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderPlan {
    #[serde(default)]
    pub loaders: Vec<LoaderRequest>,
}

impl LoaderPlan {
    /// Parse a plan from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Render every request in plan order
    pub fn render(&self, generator: &LoaderGenerator) -> Vec<VirtualFile> {
        let files: Vec<VirtualFile> = self
            .loaders
            .iter()
            .filter_map(|request| request.render(generator))
            .collect();

        debug!("Rendered {} of {} planned loaders", files.len(), self.loaders.len());

        files
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::LoaderError;

    const PLAN: &str = r#"{
        "loaders": [
            { "kind": "html", "name": "popup", "scripts": ["assets/popup.js"] },
            { "kind": "script", "name": "content.ts", "inputs": ["assets/content.js"] },
            { "kind": "serviceWorker", "inputs": ["assets/background.js"] },
            { "kind": "chunk", "name": "standalone.ts", "chunk": { "fileName": "assets/standalone.js" } },
            {
                "kind": "chunk",
                "name": "src/inject.ts",
                "chunk": { "fileName": "assets/inject.js", "imports": ["assets/vendor.js"] },
                "inject": true
            }
        ]
    }"#;

    #[test]
    fn test_parse_plan() {
        let plan = LoaderPlan::from_json(PLAN).unwrap();

        assert_eq!(plan.loaders.len(), 5);
        assert_eq!(
            plan.loaders[1],
            LoaderRequest::Script {
                name: "content.ts".to_string(),
                inputs: vec!["assets/content.js".to_string()],
                inject: false,
            }
        );
    }

    #[test]
    fn test_render_plan_in_order() {
        let plan = LoaderPlan::from_json(PLAN).unwrap();
        let files = plan.render(&LoaderGenerator::default());

        let names: Vec<&str> = files.iter().map(|file| file.file_name.as_str()).collect();
        assert_eq!(names, vec!["popup.html", "content.js", "serviceWorker.js", "src/inject.js"]);

        assert_eq!(files[2].source, "import \"/assets/background.js\";");
        assert_eq!(files[3].source, "import \"../assets/inject.js\"");
    }

    #[test]
    fn test_empty_plan() {
        let plan = LoaderPlan::from_json("{}").unwrap();
        assert!(plan.render(&LoaderGenerator::default()).is_empty());
    }

    #[test]
    fn test_unknown_kind() {
        let err = LoaderPlan::from_json(r#"{ "loaders": [{ "kind": "sidebar", "name": "x" }] }"#).unwrap_err();
        assert!(matches!(err, LoaderError::Plan(_)));
    }
}
