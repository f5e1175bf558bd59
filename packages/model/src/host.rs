use thiserror::Error;

use crate::annotation::AnnotationMirror;
use crate::declaration::{Declaration, DeclarationId};
use crate::type_ref::TypeRef;

/// Errors raised by declaration model queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown declaration {0}")]
    UnknownDeclaration(DeclarationId),

    #[error("malformed type name `{0}`")]
    MalformedTypeName(String),
}

/// Read-only queries over the declarations of one compilation.
///
/// Implementations are provided by the host compiler front end. Returned
/// references live as long as the model itself, which lets extraction results
/// borrow annotation instances instead of copying them.
pub trait DeclarationModel {
    fn declaration(&self, id: DeclarationId) -> Result<&Declaration, ModelError>;

    /// The declaration that declares `ty`, if it is part of this compilation.
    fn declaration_of_type(&self, ty: &TypeRef) -> Option<DeclarationId>;

    /// Every declaration, in declaration order.
    fn declaration_ids(&self) -> Vec<DeclarationId>;

    /// The directive of kind `kind` attached to `id`, if any.
    fn attached_directive(
        &self,
        id: DeclarationId,
        kind: &TypeRef,
    ) -> Result<Option<&AnnotationMirror>, ModelError> {
        Ok(self.declaration(id)?.find_annotation(kind))
    }

    /// All annotations attached to `id`, in declaration order.
    fn attached_markers(&self, id: DeclarationId) -> Result<&[AnnotationMirror], ModelError> {
        Ok(&self.declaration(id)?.annotations)
    }

    /// Whether the declaration of `marker_type` is itself annotated with
    /// `scope_kind`. Marker types outside this compilation never are.
    fn is_marker_scope_defining(
        &self,
        marker_type: &TypeRef,
        scope_kind: &TypeRef,
    ) -> Result<bool, ModelError> {
        match self.declaration_of_type(marker_type) {
            Some(id) => Ok(self.declaration(id)?.has_annotation(scope_kind)),
            None => Ok(false),
        }
    }
}
