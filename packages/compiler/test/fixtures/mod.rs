//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use autocomponent_compiler::config::options::{DEFAULT_DIRECTIVE_KIND, DEFAULT_SCOPE_ANNOTATION};
use autocomponent_compiler::model::{
    AnnotationMirror, AnnotationValue, DeclarationId, InMemoryModel, TypeRef,
};

pub fn ty(name: &str) -> TypeRef {
    TypeRef::parse(name).unwrap()
}

pub fn types(names: &[&str]) -> AnnotationValue {
    AnnotationValue::List(names.iter().map(|n| AnnotationValue::Type(ty(n))).collect())
}

pub fn unresolved(name: &str) -> AnnotationValue {
    AnnotationValue::Unresolved(name.to_string())
}

/// An empty `@AutoComponent` instance.
pub fn directive() -> AnnotationMirror {
    AnnotationMirror::of(DEFAULT_DIRECTIVE_KIND).unwrap()
}

pub fn marker(name: &str) -> AnnotationMirror {
    AnnotationMirror::of(name).unwrap()
}

pub fn scope_kind() -> TypeRef {
    ty(DEFAULT_SCOPE_ANNOTATION)
}

/// A model that already declares the given scope annotations.
pub fn model_with_scopes(scopes: &[&str]) -> InMemoryModel {
    let mut model = InMemoryModel::new();
    for scope in scopes {
        model.scope_marker(scope, &scope_kind()).unwrap();
    }
    model
}

/// Declare `name` as a class carrying `annotations` in order.
pub fn class_with(model: &mut InMemoryModel, name: &str, annotations: Vec<AnnotationMirror>) -> DeclarationId {
    let id = model.class(name).unwrap();
    for annotation in annotations {
        model.annotate(id, annotation).unwrap();
    }
    id
}

/// Declare `name` as an annotation type carrying `annotations` in order.
pub fn annotation_type_with(
    model: &mut InMemoryModel,
    name: &str,
    annotations: Vec<AnnotationMirror>,
) -> DeclarationId {
    let id = model.annotation_type(name).unwrap();
    for annotation in annotations {
        model.annotate(id, annotation).unwrap();
    }
    id
}
