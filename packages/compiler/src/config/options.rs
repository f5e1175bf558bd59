use serde::Deserialize;
use std::fs;
use std::path::Path;

use autocomponent_model::{ModelError, TypeRef};

/// Annotation that marks a declaration as a component to generate.
pub const DEFAULT_DIRECTIVE_KIND: &str = "autodagger.AutoComponent";

/// Meta-annotation that makes an annotation type a scope.
pub const DEFAULT_SCOPE_ANNOTATION: &str = "javax.inject.Scope";

/// Options controlling directive extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractorOptions {
    /// Qualified name of the component directive.
    pub directive_kind: String,
    /// Qualified name of the meta-annotation that defines scopes.
    pub scope_annotation: String,
    /// Log a warning for components that resolve to no scope.
    pub warn_unscoped: bool,
    /// Extract independent declarations on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            directive_kind: DEFAULT_DIRECTIVE_KIND.to_string(),
            scope_annotation: DEFAULT_SCOPE_ANNOTATION.to_string(),
            warn_unscoped: false,
            parallel: true,
        }
    }
}

impl ExtractorOptions {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let options: ExtractorOptions = serde_json::from_str(content)?;
        // Surface malformed names at load time rather than on first use.
        options.directive_type()?;
        options.scope_type()?;
        Ok(options)
    }

    pub fn directive_type(&self) -> Result<TypeRef, ModelError> {
        TypeRef::parse(&self.directive_kind)
    }

    pub fn scope_type(&self) -> Result<TypeRef, ModelError> {
        TypeRef::parse(&self.scope_annotation)
    }
}
