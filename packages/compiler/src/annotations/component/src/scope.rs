// Scope Resolution
//
// Finds the single scope annotation that applies to a generated component.

use autocomponent_model::{AnnotationMirror, DeclarationId, DeclarationModel, ModelError, TypeRef};
use smallvec::SmallVec;

use crate::annotations::common::{ErrorCode, Errors};

/// Looks up scope annotations: annotations whose own type is annotated with
/// the scope meta-annotation.
pub struct ScopeResolver<'m, M: ?Sized> {
    model: &'m M,
    scope_kind: TypeRef,
}

impl<'m, M: DeclarationModel + ?Sized> ScopeResolver<'m, M> {
    pub fn new(model: &'m M, scope_kind: TypeRef) -> Self {
        Self { model, scope_kind }
    }

    pub fn scope_kind(&self) -> &TypeRef {
        &self.scope_kind
    }

    /// Resolve the scope of a component.
    ///
    /// `element` carries the directive and is searched first. `component_element`
    /// is only searched when nothing was found on `element` and the two differ,
    /// i.e. when the directive sits on an annotation type applied to the component.
    pub fn find_scope(
        &self,
        element: DeclarationId,
        component_element: DeclarationId,
        errors: &Errors<'_>,
    ) -> Result<Option<&'m AnnotationMirror>, ModelError> {
        let scope = self.find_scope_on(element, errors)?;
        if scope.is_none() && element != component_element {
            return self.find_scope_on(component_element, errors);
        }

        Ok(scope)
    }

    /// Scan one declaration's annotations in declaration order.
    ///
    /// The first scope wins. Every further scope is reported against
    /// `declaration`; the scan never stops early, so each offender is reported.
    pub fn find_scope_on(
        &self,
        declaration: DeclarationId,
        errors: &Errors<'_>,
    ) -> Result<Option<&'m AnnotationMirror>, ModelError> {
        let model: &'m M = self.model;

        let mut scopes: SmallVec<[&'m AnnotationMirror; 2]> = SmallVec::new();
        for marker in model.attached_markers(declaration)? {
            if model.is_marker_scope_defining(&marker.annotation_type, &self.scope_kind)? {
                tracing::trace!(marker = %marker.annotation_type, "found scope annotation");
                scopes.push(marker);
            }
        }

        let Some((first, extra)) = scopes.split_first() else {
            return Ok(None);
        };

        if !extra.is_empty() {
            let site = model.declaration(declaration)?.name.to_string();
            for marker in extra {
                errors.add_invalid_at(
                    site.as_str(),
                    ErrorCode::MultipleScopes,
                    format!(
                        "Class annotated with @AutoComponent cannot have several scopes (@{}): @{} conflicts with @{}.",
                        self.scope_kind.simple_name(),
                        marker.annotation_type.simple_name(),
                        first.annotation_type.simple_name(),
                    ),
                );
            }
        }

        Ok(Some(*first))
    }
}
