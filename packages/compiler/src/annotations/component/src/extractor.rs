// Component Extractor
//
// Reads an @AutoComponent directive off a declaration, applies defaults and
// validates it into a `ComponentDescriptor`.

use autocomponent_model::{DeclarationId, DeclarationModel, ModelError, TypeRef};
use thiserror::Error;

use super::descriptor::ComponentDescriptor;
use super::scope::ScopeResolver;
use crate::annotations::common::{type_from_annotation, types_from_annotation, ErrorCode, Errors};
use crate::config::ExtractorOptions;

pub const TARGET: &str = "target";
pub const FROM_TEMPLATE: &str = "fromTemplate";
pub const DEPENDENCIES: &str = "dependencies";
pub const MODULES: &str = "modules";
pub const SUPERINTERFACES: &str = "superinterfaces";

/// A directive that could not be read at all.
///
/// Anything attributable to a single field is a diagnostic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("{element} is not annotated with @{directive}")]
    DirectiveNotFound { element: String, directive: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Extracts component descriptors from one declaration model.
pub struct ComponentExtractor<'m, M: ?Sized> {
    model: &'m M,
    directive_kind: TypeRef,
    scopes: ScopeResolver<'m, M>,
    warn_unscoped: bool,
}

impl<'m, M: DeclarationModel + ?Sized> ComponentExtractor<'m, M> {
    pub fn new(model: &'m M, options: &ExtractorOptions) -> Result<Self, ModelError> {
        Ok(Self {
            model,
            directive_kind: options.directive_type()?,
            scopes: ScopeResolver::new(model, options.scope_type()?),
            warn_unscoped: options.warn_unscoped,
        })
    }

    pub fn directive_kind(&self) -> &TypeRef {
        &self.directive_kind
    }

    /// Extract the directive carried by `element` for `component_element`.
    ///
    /// The two are the same declaration unless the directive sits on an
    /// annotation type that is applied to the component. Validation failures go
    /// to `errors` and never fail the call; an `Err` means the directive could
    /// not be read at all, and is itself recorded before returning.
    pub fn extract(
        &self,
        element: DeclarationId,
        component_element: DeclarationId,
        errors: &Errors<'_>,
    ) -> Result<ComponentDescriptor<'m>, ExtractError> {
        self.try_extract(element, component_element, errors)
            .map_err(|err| {
                errors.add_invalid(ErrorCode::UnreadableDirective, err.to_string());
                err
            })
    }

    fn try_extract(
        &self,
        element: DeclarationId,
        component_element: DeclarationId,
        errors: &Errors<'_>,
    ) -> Result<ComponentDescriptor<'m>, ExtractError> {
        let model: &'m M = self.model;
        let component = model.declaration(component_element)?;
        let directive = model
            .attached_directive(element, &self.directive_kind)?
            .ok_or_else(|| ExtractError::DirectiveNotFound {
                element: model
                    .declaration(element)
                    .map(|d| d.name.to_string())
                    .unwrap_or_else(|_| element.to_string()),
                directive: self.directive_kind.simple_name().to_string(),
            })?;

        let target = type_from_annotation(directive, TARGET, errors)
            .unwrap_or_else(|| component.as_type().clone());
        let from_template = type_from_annotation(directive, FROM_TEMPLATE, errors);
        let dependencies = types_from_annotation(directive, DEPENDENCIES, errors);
        let modules = types_from_annotation(directive, MODULES, errors);
        let superinterfaces = types_from_annotation(directive, SUPERINTERFACES, errors);

        // Both configurations are kept; the emission stage picks one.
        if from_template.is_some()
            && (!dependencies.is_empty() || !modules.is_empty() || !superinterfaces.is_empty())
        {
            errors.add_invalid(
                ErrorCode::TemplateWithConfiguration,
                "Cannot have fromTemplate with dependencies/superinterfaces/modules at the same time",
            );
        }

        let scope = self.scopes.find_scope(element, component_element, errors)?;

        let descriptor = ComponentDescriptor {
            component_element,
            target,
            from_template,
            dependencies,
            modules,
            superinterfaces,
            scope,
        };

        if self.warn_unscoped && !descriptor.is_scoped() {
            tracing::warn!(component = %component.name, "component resolves to no scope and will be unscoped");
        }

        tracing::debug!(
            component = %component.name,
            target_type = %descriptor.target,
            dependencies = descriptor.dependencies.len(),
            modules = descriptor.modules.len(),
            superinterfaces = descriptor.superinterfaces.len(),
            scoped = descriptor.is_scoped(),
            "extracted component"
        );

        Ok(descriptor)
    }
}
