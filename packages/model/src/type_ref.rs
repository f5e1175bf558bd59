// Type References
//
// Fully qualified type names as they appear in directive values.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::host::ModelError;

static QUALIFIED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
        .expect("qualified name pattern is valid")
});

/// Name of the `void` pseudo-type used as the "unset" value of type fields.
pub const VOID: &str = "void";

/// A reference to a genuine, already-compiled type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    /// Parse a dotted qualified name such as `com.example.AppModule`.
    pub fn parse(name: &str) -> Result<Self, ModelError> {
        let name = name.trim();
        if QUALIFIED_NAME.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(ModelError::MalformedTypeName(name.to_string()))
        }
    }

    pub fn void() -> Self {
        Self(VOID.to_string())
    }

    /// Whether this is the `void` sentinel written as a field's default.
    pub fn is_void(&self) -> bool {
        self.0 == VOID
    }

    pub fn qualified_name(&self) -> &str {
        &self.0
    }

    /// The last segment of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeRef {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
