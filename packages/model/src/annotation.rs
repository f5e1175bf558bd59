// Annotations
//
// Raw annotation instances and their field values, as read off a declaration.

use indexmap::IndexMap;
use serde::Serialize;

use crate::host::ModelError;
use crate::type_ref::TypeRef;

/// The raw value of one annotation field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum AnnotationValue {
    /// A class literal that resolved to a real type.
    Type(TypeRef),
    /// A class literal naming a type that does not exist yet, typically one the
    /// current generation pass is about to produce.
    Unresolved(String),
    /// An array value.
    List(Vec<AnnotationValue>),
    String(String),
    Int(i64),
    Bool(bool),
}

impl AnnotationValue {
    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            AnnotationValue::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AnnotationValue]> {
        match self {
            AnnotationValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// Short human-readable description of the value's shape.
    pub fn describe(&self) -> &'static str {
        match self {
            AnnotationValue::Type(_) => "type",
            AnnotationValue::Unresolved(_) => "unresolved reference",
            AnnotationValue::List(_) => "list",
            AnnotationValue::String(_) => "string",
            AnnotationValue::Int(_) => "integer",
            AnnotationValue::Bool(_) => "boolean",
        }
    }
}

impl From<TypeRef> for AnnotationValue {
    fn from(ty: TypeRef) -> Self {
        AnnotationValue::Type(ty)
    }
}

impl From<Vec<TypeRef>> for AnnotationValue {
    fn from(types: Vec<TypeRef>) -> Self {
        AnnotationValue::List(types.into_iter().map(AnnotationValue::Type).collect())
    }
}

/// One annotation instance attached to a declaration.
///
/// Only fields written explicitly at the use site are present in `values`;
/// schema defaults are applied by the reader, not by the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationMirror {
    /// The annotation's own type.
    pub annotation_type: TypeRef,
    /// Explicit field values, in source order.
    pub values: IndexMap<String, AnnotationValue>,
}

impl AnnotationMirror {
    pub fn new(annotation_type: TypeRef) -> Self {
        Self {
            annotation_type,
            values: IndexMap::new(),
        }
    }

    /// Create an annotation instance from a qualified type name.
    pub fn of(annotation_type: &str) -> Result<Self, ModelError> {
        Ok(Self::new(TypeRef::parse(annotation_type)?))
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<AnnotationValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn value(&self, name: &str) -> Option<&AnnotationValue> {
        self.values.get(name)
    }

    pub fn is_of(&self, annotation_type: &TypeRef) -> bool {
        &self.annotation_type == annotation_type
    }
}
