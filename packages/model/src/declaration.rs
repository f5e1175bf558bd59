// Declarations
//
// Type declarations and the annotations attached to them.

use std::fmt;

use serde::Serialize;

use crate::annotation::AnnotationMirror;
use crate::type_ref::TypeRef;

/// Handle to a declaration owned by a `DeclarationModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DeclarationId(pub u32);

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    Class,
    Interface,
    /// An annotation type. Directives placed on an annotation type apply to
    /// every declaration annotated with it.
    Annotation,
}

/// A type declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub id: DeclarationId,
    /// The declared type.
    pub name: TypeRef,
    pub kind: DeclarationKind,
    /// Attached annotations in declaration order.
    pub annotations: Vec<AnnotationMirror>,
}

impl Declaration {
    pub fn new(id: DeclarationId, name: TypeRef, kind: DeclarationKind) -> Self {
        Self {
            id,
            name,
            kind,
            annotations: Vec::new(),
        }
    }

    /// The type this declaration declares.
    pub fn as_type(&self) -> &TypeRef {
        &self.name
    }

    pub fn is_annotation_type(&self) -> bool {
        self.kind == DeclarationKind::Annotation
    }

    /// First attached annotation of the given type.
    pub fn find_annotation(&self, annotation_type: &TypeRef) -> Option<&AnnotationMirror> {
        self.annotations.iter().find(|a| a.is_of(annotation_type))
    }

    pub fn has_annotation(&self, annotation_type: &TypeRef) -> bool {
        self.find_annotation(annotation_type).is_some()
    }
}
