// Type Reference Validation
//
// Rejects directive values that stand in for classes this generation pass has
// not produced yet.

use autocomponent_model::AnnotationValue;

use super::diagnostics::{ErrorCode, Errors};

/// Check that `value` is a genuine type reference.
///
/// A class literal naming a generated class has no type yet while the directive
/// is being read, so it shows up as `AnnotationValue::Unresolved`. Any other
/// non-type value is reported by its shape. Either way one diagnostic is
/// recorded for `member` and the result is `false`.
pub fn validate_annotation_value(value: &AnnotationValue, member: &str, errors: &Errors<'_>) -> bool {
    let message = match value {
        AnnotationValue::Type(_) => return true,
        AnnotationValue::Unresolved(_) => format!(
            "{} cannot reference generated class. Use the class that applies the @AutoComponent annotation.",
            member
        ),
        other => format!("{} must be a class literal, found {}", member, other.describe()),
    };

    errors.add_invalid(ErrorCode::InvalidTypeReference, message);
    false
}
