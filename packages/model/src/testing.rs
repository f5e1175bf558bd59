// In-Memory Declaration Model
//
// A `DeclarationModel` built up by hand, for hosts' tests and fixtures.

use std::collections::HashMap;

use crate::annotation::AnnotationMirror;
use crate::declaration::{Declaration, DeclarationId, DeclarationKind};
use crate::host::{DeclarationModel, ModelError};
use crate::type_ref::TypeRef;

/// Declaration model backed by a vector of declarations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModel {
    declarations: Vec<Declaration>,
    by_type: HashMap<TypeRef, DeclarationId>,
}

impl InMemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type. Declaring the same name twice returns the first id.
    pub fn declare(&mut self, name: &str, kind: DeclarationKind) -> Result<DeclarationId, ModelError> {
        let ty = TypeRef::parse(name)?;
        if let Some(id) = self.by_type.get(&ty) {
            return Ok(*id);
        }

        let id = DeclarationId(self.declarations.len() as u32);
        self.by_type.insert(ty.clone(), id);
        self.declarations.push(Declaration::new(id, ty, kind));
        Ok(id)
    }

    pub fn class(&mut self, name: &str) -> Result<DeclarationId, ModelError> {
        self.declare(name, DeclarationKind::Class)
    }

    pub fn interface(&mut self, name: &str) -> Result<DeclarationId, ModelError> {
        self.declare(name, DeclarationKind::Interface)
    }

    pub fn annotation_type(&mut self, name: &str) -> Result<DeclarationId, ModelError> {
        self.declare(name, DeclarationKind::Annotation)
    }

    /// Attach an annotation instance after any already attached to `id`.
    pub fn annotate(&mut self, id: DeclarationId, mirror: AnnotationMirror) -> Result<(), ModelError> {
        let declaration = self
            .declarations
            .get_mut(id.0 as usize)
            .ok_or(ModelError::UnknownDeclaration(id))?;
        declaration.annotations.push(mirror);
        Ok(())
    }

    /// Declare an annotation type that is itself annotated with `scope_kind`.
    pub fn scope_marker(&mut self, name: &str, scope_kind: &TypeRef) -> Result<DeclarationId, ModelError> {
        let id = self.annotation_type(name)?;
        self.annotate(id, AnnotationMirror::new(scope_kind.clone()))?;
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl DeclarationModel for InMemoryModel {
    fn declaration(&self, id: DeclarationId) -> Result<&Declaration, ModelError> {
        self.declarations
            .get(id.0 as usize)
            .ok_or(ModelError::UnknownDeclaration(id))
    }

    fn declaration_of_type(&self, ty: &TypeRef) -> Option<DeclarationId> {
        self.by_type.get(ty).copied()
    }

    fn declaration_ids(&self) -> Vec<DeclarationId> {
        self.declarations.iter().map(|d| d.id).collect()
    }
}
