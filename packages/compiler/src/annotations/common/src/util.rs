// Common Utilities
//
// Schema-driven readers for directive fields.

use autocomponent_model::{AnnotationMirror, AnnotationValue, TypeRef};

use super::diagnostics::{ErrorCode, Errors};
use super::type_reference::validate_annotation_value;

/// Read a single-type field.
///
/// Returns `None` when the field is absent, set to `void`, or not a genuine
/// type (the latter also records a diagnostic).
pub fn type_from_annotation(
    mirror: &AnnotationMirror,
    member: &str,
    errors: &Errors<'_>,
) -> Option<TypeRef> {
    let value = mirror.value(member)?;
    if !validate_annotation_value(value, member, errors) {
        return None;
    }

    value.as_type().filter(|ty| !ty.is_void()).cloned()
}

/// Read a list-of-types field, keeping declaration order.
///
/// Each entry that is not a genuine type is dropped with its own diagnostic.
/// A nested list cannot be read as a class literal at all; it is reported once
/// and ends extraction of this field.
pub fn types_from_annotation(
    mirror: &AnnotationMirror,
    member: &str,
    errors: &Errors<'_>,
) -> Vec<TypeRef> {
    let values = match mirror.value(member) {
        None => return Vec::new(),
        Some(AnnotationValue::List(values)) => values.as_slice(),
        // A lone class literal is an array of one.
        Some(single) => std::slice::from_ref(single),
    };

    let mut types = Vec::with_capacity(values.len());
    for value in values {
        if let AnnotationValue::List(_) = value {
            errors.add_invalid(
                ErrorCode::InvalidTypeReference,
                format!("{} entries must be class literals, found a nested list", member),
            );
            break;
        }

        if !validate_annotation_value(value, member, errors) {
            continue;
        }

        if let Some(ty) = value.as_type() {
            types.push(ty.clone());
        }
    }

    types
}
