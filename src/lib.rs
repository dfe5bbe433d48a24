//! webext-loader library
//!
//! Synthesizes the loader files that make bundled chunks loadable from a
//! browser extension's content scripts, service worker and pages.

pub mod bundle;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod plan;
pub mod utils;

pub use bundle::{OutputChunk, VirtualFile};
pub use cli::Cli;
pub use config::Config;
pub use error::{LoaderError, Result};
pub use loader::{ImportTarget, LoaderGenerator, LoaderKind, OutputNaming};
pub use plan::{LoaderPlan, LoaderRequest};
