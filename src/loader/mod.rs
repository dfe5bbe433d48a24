//! Loader file synthesis
//!
//! Builds the small glue files that make bundled chunks loadable from the
//! execution contexts of a browser extension: content scripts (through a
//! dynamic `import()` or an injected static `import`), the background service
//! worker and HTML pages hosting module scripts.
//!
//! Every builder is a pure function of its inputs and the generator settings.

mod naming;
mod render;
mod target;

use tracing::debug;

use crate::bundle::{OutputChunk, VirtualFile};
use crate::config::Config;

pub use naming::{ExtensionStripNaming, OutputNaming};
pub use target::ImportTarget;

/// Kind of loader an execution context needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderKind {
    /// Standalone script awaiting one dynamic import per input
    DynamicImport,
    /// Static imports meant to be imported directly into the host context
    StaticInject,
    /// The background service worker
    ServiceWorker,
    /// The code runs standalone, no loader is emitted
    None,
}

impl LoaderKind {
    /// Loader kind for a content script
    pub fn script(is_inject: bool) -> Self {
        if is_inject {
            LoaderKind::StaticInject
        } else {
            LoaderKind::DynamicImport
        }
    }

    /// Loader kind for a bundled chunk
    ///
    /// A chunk without any import edges can run on its own.
    pub fn for_chunk(chunk: &OutputChunk, is_inject: bool) -> Self {
        if chunk.has_dependencies() {
            Self::script(is_inject)
        } else {
            LoaderKind::None
        }
    }
}

/// Synthesizes loader files
pub struct LoaderGenerator {
    /// Maps logical script names to output paths
    naming: Box<dyn OutputNaming>,

    /// Runtime call resolving extension-relative paths
    url_resolver: String,

    /// File name of the service worker loader
    service_worker: String,

    /// `lang` attribute of HTML pages
    html_lang: String,
}

impl Default for LoaderGenerator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl LoaderGenerator {
    /// Create a generator from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            naming: Box::new(ExtensionStripNaming::new(config.output.dir.as_str())),
            url_resolver: config.runtime.url_resolver.clone(),
            service_worker: config.runtime.service_worker.clone(),
            html_lang: config.html.lang.clone(),
        }
    }

    /// Replace the output naming convention
    pub fn with_naming(mut self, naming: impl OutputNaming + 'static) -> Self {
        self.naming = Box::new(naming);
        self
    }

    /// Output file name of the script loader for `script_file_name`
    pub fn output_file_name(&self, script_file_name: &str) -> String {
        format!("{}.js", self.naming.output_file_name(script_file_name))
    }

    /// HTML page loading `script_srcs` as module scripts
    pub fn html_loader<S: AsRef<str>>(&self, name: &str, script_srcs: &[S]) -> VirtualFile {
        let file = VirtualFile::new(
            format!("{}.html", name),
            render::html_document(&self.html_lang, non_empty(script_srcs)),
        );
        debug!("Rendered HTML loader {} ({} scripts)", file.file_name, non_empty(script_srcs).count());
        file
    }

    /// Script loader for a content script
    ///
    /// Without inject mode the loader is a standalone script using dynamic
    /// imports; with it the loader holds static imports relative to its own
    /// output location.
    pub fn script_loader<S: AsRef<str>>(
        &self,
        script_file_name: &str,
        input_file_names: &[S],
        is_inject: bool,
    ) -> VirtualFile {
        if is_inject {
            self.static_inject_loader(script_file_name, input_file_names)
        } else {
            self.dynamic_import_loader(script_file_name, input_file_names)
        }
    }

    /// Loader for the background service worker
    pub fn service_worker_loader<S: AsRef<str>>(&self, input_file_names: &[S]) -> VirtualFile {
        let file = VirtualFile::new(
            self.service_worker.clone(),
            render::service_worker_script(non_empty(input_file_names)),
        );
        debug!(
            "Rendered service worker loader {} ({} inputs)",
            file.file_name,
            non_empty(input_file_names).count()
        );
        file
    }

    /// Script loader for a bundled chunk, if it needs one
    ///
    /// Returns `None` when the chunk has no imports at all. Otherwise the
    /// loader loads exactly the chunk's own file.
    pub fn chunk_loader(
        &self,
        content_script_file_name: &str,
        chunk: &OutputChunk,
        is_inject: bool,
    ) -> Option<VirtualFile> {
        let kind = LoaderKind::for_chunk(chunk, is_inject);
        if kind == LoaderKind::None {
            debug!("Chunk {} has no imports, no loader needed", chunk.file_name);
        }
        self.render(kind, content_script_file_name, &[chunk.file_name.as_str()])
    }

    /// Render a loader of the given kind
    ///
    /// `name` is ignored by the service worker loader, whose name is fixed.
    pub fn render<S: AsRef<str>>(&self, kind: LoaderKind, name: &str, inputs: &[S]) -> Option<VirtualFile> {
        match kind {
            LoaderKind::DynamicImport => Some(self.dynamic_import_loader(name, inputs)),
            LoaderKind::StaticInject => Some(self.static_inject_loader(name, inputs)),
            LoaderKind::ServiceWorker => Some(self.service_worker_loader(inputs)),
            LoaderKind::None => None,
        }
    }

    fn dynamic_import_loader<S: AsRef<str>>(&self, script_file_name: &str, inputs: &[S]) -> VirtualFile {
        let file = VirtualFile::new(
            self.output_file_name(script_file_name),
            render::dynamic_import_script(&self.url_resolver, non_empty(inputs)),
        );
        debug!("Rendered dynamic import loader {} ({} inputs)", file.file_name, non_empty(inputs).count());
        file
    }

    fn static_inject_loader<S: AsRef<str>>(&self, script_file_name: &str, inputs: &[S]) -> VirtualFile {
        let file_name = self.output_file_name(script_file_name);
        let source = render::static_inject_script(&file_name, non_empty(inputs));
        debug!("Rendered inject loader {} ({} inputs)", file_name, non_empty(inputs).count());
        VirtualFile::new(file_name, source)
    }
}

/// Drop empty entries, keeping the order of the rest
fn non_empty<S: AsRef<str>>(inputs: &[S]) -> impl Iterator<Item = &str> + '_ {
    inputs.iter().map(AsRef::as_ref).filter(|input| !input.is_empty())
}
