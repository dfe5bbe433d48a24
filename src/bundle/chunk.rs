//! Output chunks handed over by the bundler

use serde::{Deserialize, Serialize};

/// One unit of already-bundled code
///
/// Paths are output-relative and use forward slashes; they are final and
/// never rewritten here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputChunk {
    /// Output file name of the chunk
    pub file_name: String,

    /// Chunks this chunk statically imports
    #[serde(default)]
    pub imports: Vec<String>,

    /// Chunks this chunk dynamically imports
    #[serde(default)]
    pub dynamic_imports: Vec<String>,
}

impl OutputChunk {
    /// Create a chunk without dependencies
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            imports: Vec::new(),
            dynamic_imports: Vec::new(),
        }
    }

    /// Add a static import edge
    pub fn with_import(mut self, file_name: impl Into<String>) -> Self {
        self.imports.push(file_name.into());
        self
    }

    /// Add a dynamic import edge
    pub fn with_dynamic_import(mut self, file_name: impl Into<String>) -> Self {
        self.dynamic_imports.push(file_name.into());
        self
    }

    /// Whether the chunk depends on any other output file
    pub fn has_dependencies(&self) -> bool {
        !self.imports.is_empty() || !self.dynamic_imports.is_empty()
    }
}
