//! Perform Extract
//!
//! Discovery of @AutoComponent declarations and the batch extraction entry point.

use autocomponent_model::{DeclarationId, DeclarationModel, ModelError};
use rayon::prelude::*;
use serde::Serialize;

use crate::annotations::common::{Diagnostic, DiagnosticsCollector};
use crate::annotations::component::{ComponentDescriptor, ComponentExtractor, ExtractError};
use crate::config::ExtractorOptions;

/// One component to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    /// Declaration carrying the directive.
    pub element: DeclarationId,
    /// Declaration the generated component represents.
    pub component_element: DeclarationId,
}

impl ExtractionRequest {
    /// Directive placed on the component itself.
    pub fn direct(component_element: DeclarationId) -> Self {
        Self {
            element: component_element,
            component_element,
        }
    }

    /// Directive placed on an annotation type applied to the component.
    pub fn indirect(element: DeclarationId, component_element: DeclarationId) -> Self {
        Self {
            element,
            component_element,
        }
    }

    pub fn is_indirect(&self) -> bool {
        self.element != self.component_element
    }
}

/// Outcome of a whole extraction run.
#[derive(Debug)]
pub struct ExtractionReport<'m> {
    /// Descriptors of every readable directive, in request order.
    pub descriptors: Vec<ComponentDescriptor<'m>>,
    /// Requests whose directive could not be read.
    pub failures: Vec<(ExtractionRequest, ExtractError)>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'m> ExtractionReport<'m> {
    /// Whether any validation failure was collected. Failing the run on it is
    /// up to the caller.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Find every component to extract, in declaration order.
///
/// Annotation types carrying the directive are not components; each
/// non-annotation declaration they are applied to is.
pub fn discover<M>(model: &M, options: &ExtractorOptions) -> Result<Vec<ExtractionRequest>, ModelError>
where
    M: DeclarationModel + ?Sized,
{
    let directive = options.directive_type()?;
    let mut requests = Vec::new();

    for id in model.declaration_ids() {
        let declaration = model.declaration(id)?;
        if declaration.is_annotation_type() {
            continue;
        }

        if model.attached_directive(id, &directive)?.is_some() {
            requests.push(ExtractionRequest::direct(id));
        }

        for annotation in &declaration.annotations {
            let Some(carrier) = model.declaration_of_type(&annotation.annotation_type) else {
                continue;
            };
            if model.declaration(carrier)?.is_annotation_type()
                && model.attached_directive(carrier, &directive)?.is_some()
            {
                requests.push(ExtractionRequest::indirect(carrier, id));
            }
        }
    }

    Ok(requests)
}

/// Extract every request independently.
///
/// Diagnostics are attributed to each request's component declaration. One
/// unreadable directive only fails its own entry.
pub fn extract_all<'m, M>(
    model: &'m M,
    options: &ExtractorOptions,
    requests: &[ExtractionRequest],
    collector: &DiagnosticsCollector,
) -> Result<Vec<Result<ComponentDescriptor<'m>, ExtractError>>, ModelError>
where
    M: DeclarationModel + Sync + ?Sized,
{
    let extractor = ComponentExtractor::new(model, options)?;

    let run = |request: &ExtractionRequest| {
        let site = model
            .declaration(request.component_element)
            .map(|d| d.name.to_string())
            .unwrap_or_else(|_| request.component_element.to_string());
        let errors = collector.scoped(site);
        extractor.extract(request.element, request.component_element, &errors)
    };

    let results: Vec<_> = if options.parallel {
        requests.par_iter().map(run).collect()
    } else {
        requests.iter().map(run).collect()
    };

    Ok(results)
}

/// Discover and extract every component of `model`.
pub fn perform_extract<'m, M>(model: &'m M, options: &ExtractorOptions) -> Result<ExtractionReport<'m>, ModelError>
where
    M: DeclarationModel + Sync + ?Sized,
{
    let requests = discover(model, options)?;
    let collector = DiagnosticsCollector::new();
    let results = extract_all(model, options, &requests, &collector)?;

    let mut descriptors = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (request, result) in requests.into_iter().zip(results) {
        match result {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(err) => failures.push((request, err)),
        }
    }

    let diagnostics = collector.into_diagnostics();
    tracing::info!(
        components = descriptors.len(),
        failures = failures.len(),
        diagnostics = diagnostics.len(),
        "extraction finished"
    );

    Ok(ExtractionReport {
        descriptors,
        failures,
        diagnostics,
    })
}
