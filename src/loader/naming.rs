//! Output naming for loader files

use crate::utils::{clean_path, strip_extension, to_slash};

/// Maps a logical script name to its output-relative path (without `.js`)
///
/// The same input must always map to the same output.
pub trait OutputNaming: Send + Sync {
    fn output_file_name(&self, script_file_name: &str) -> String;
}

impl<F> OutputNaming for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn output_file_name(&self, script_file_name: &str) -> String {
        self(script_file_name)
    }
}

/// Default naming: slash-normalized, cleaned, last extension dropped and
/// optionally placed under an output directory
#[derive(Debug, Clone, Default)]
pub struct ExtensionStripNaming {
    dir: String,
}

impl ExtensionStripNaming {
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = clean_path(&to_slash(&dir.into()));
        Self {
            dir: dir.trim_start_matches('/').to_string(),
        }
    }
}

impl OutputNaming for ExtensionStripNaming {
    fn output_file_name(&self, script_file_name: &str) -> String {
        let cleaned = clean_path(&to_slash(script_file_name));
        let stem = strip_extension(cleaned.trim_start_matches('/'));

        if self.dir.is_empty() {
            stem.to_string()
        } else {
            format!("{}/{}", self.dir, stem)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_naming() {
        let naming = ExtensionStripNaming::default();
        assert_eq!(naming.output_file_name("content.ts"), "content");
        assert_eq!(naming.output_file_name("src/content/index.ts"), "src/content/index");
        assert_eq!(naming.output_file_name("./src\\popup.tsx"), "src/popup");
        assert_eq!(naming.output_file_name("/src/options.js"), "src/options");
    }

    #[test]
    fn test_naming_with_dir() {
        let naming = ExtensionStripNaming::new("./assets/");
        assert_eq!(naming.output_file_name("content.ts"), "assets/content");
        assert_eq!(naming.output_file_name("src/content.ts"), "assets/src/content");
    }

    #[test]
    fn test_closure_naming() {
        let naming = |name: &str| format!("custom/{}", name);
        assert_eq!(naming.output_file_name("content"), "custom/content");
    }
}
