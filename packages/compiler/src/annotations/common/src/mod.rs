// Annotations Common Source Module

pub mod diagnostics;
pub mod type_reference;
pub mod util;

// Re-exports
pub use diagnostics::{Diagnostic, DiagnosticsCollector, ErrorCode, Errors};
pub use type_reference::validate_annotation_value;
pub use util::{type_from_annotation, types_from_annotation};
