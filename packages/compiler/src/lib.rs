#![deny(clippy::all)]

/**
 * AutoComponent Compiler
 *
 * Extraction and validation of @AutoComponent directives ahead of component
 * code generation.
 */
// Re-export the declaration model for convenience
pub use autocomponent_model as model;

pub mod annotations;
pub mod config;
pub mod perform_extract;

pub use annotations::common::{Diagnostic, DiagnosticsCollector, ErrorCode, Errors};
pub use annotations::component::{ComponentDescriptor, ComponentExtractor, ExtractError};
pub use config::ExtractorOptions;
pub use perform_extract::{discover, extract_all, perform_extract, ExtractionReport, ExtractionRequest};

/// Compiler version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
