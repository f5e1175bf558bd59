// AutoComponent Source Module

pub mod descriptor;
pub mod extractor;
pub mod scope;

// Re-exports
pub use descriptor::ComponentDescriptor;
pub use extractor::{
    ComponentExtractor, ExtractError, DEPENDENCIES, FROM_TEMPLATE, MODULES, SUPERINTERFACES, TARGET,
};
pub use scope::ScopeResolver;
