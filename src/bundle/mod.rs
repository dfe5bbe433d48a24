//! Bundle-facing data: chunks coming in, virtual files going out

mod chunk;

use serde::{Deserialize, Serialize};

pub use chunk::OutputChunk;

/// An in-memory file destined for the final bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualFile {
    /// Output-relative, forward-slash file name
    pub file_name: String,

    /// Script or markup text
    pub source: String,
}

impl VirtualFile {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Size of the source in bytes
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Check if the source is empty
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}
