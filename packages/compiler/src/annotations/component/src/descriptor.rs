// Component Descriptor
//
// The validated result of reading one @AutoComponent directive.

use autocomponent_model::{AnnotationMirror, DeclarationId, TypeRef};
use serde::Serialize;

/// Everything the emission stage needs to generate one component.
///
/// Built once by `ComponentExtractor::extract` and never mutated afterwards.
/// The scope annotation is borrowed from the declaration model, so a descriptor
/// cannot outlive the model it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor<'m> {
    pub(crate) component_element: DeclarationId,
    pub(crate) target: TypeRef,
    pub(crate) from_template: Option<TypeRef>,
    pub(crate) dependencies: Vec<TypeRef>,
    pub(crate) modules: Vec<TypeRef>,
    pub(crate) superinterfaces: Vec<TypeRef>,
    pub(crate) scope: Option<&'m AnnotationMirror>,
}

impl<'m> ComponentDescriptor<'m> {
    /// The declaration the generated component stands for.
    pub fn component_element(&self) -> DeclarationId {
        self.component_element
    }

    /// The type the component is generated for.
    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    /// Another component whose configuration is copied wholesale.
    pub fn from_template(&self) -> Option<&TypeRef> {
        self.from_template.as_ref()
    }

    pub fn dependencies(&self) -> &[TypeRef] {
        &self.dependencies
    }

    pub fn modules(&self) -> &[TypeRef] {
        &self.modules
    }

    pub fn superinterfaces(&self) -> &[TypeRef] {
        &self.superinterfaces
    }

    /// The scope annotation to copy onto the generated component, if any.
    pub fn scope(&self) -> Option<&'m AnnotationMirror> {
        self.scope
    }

    pub fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }

    /// Whether any dependency, module or superinterface was listed explicitly.
    pub fn has_manual_configuration(&self) -> bool {
        !self.dependencies.is_empty() || !self.modules.is_empty() || !self.superinterfaces.is_empty()
    }
}
