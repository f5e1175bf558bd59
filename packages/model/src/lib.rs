//! Declaration model for the AutoComponent extractor.
//!
//! This crate describes the read-only view of source declarations that the
//! extraction stage queries: qualified type references, raw annotation values,
//! declarations with their attached annotations, and the `DeclarationModel`
//! query trait implemented by compiler front ends.

pub mod annotation;
pub mod declaration;
pub mod host;
pub mod testing;
pub mod type_ref;


pub use annotation::{AnnotationMirror, AnnotationValue};
pub use declaration::{Declaration, DeclarationId, DeclarationKind};
pub use host::{DeclarationModel, ModelError};
pub use testing::InMemoryModel;
pub use type_ref::TypeRef;
