// Diagnostics
//
// Validation failures collected while extracting directives.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// Error codes for extraction diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    /// A field references something that is not a genuine type.
    InvalidTypeReference = 1001,
    /// `fromTemplate` combined with manual configuration.
    TemplateWithConfiguration = 1002,
    /// More than one scope annotation applies to a component.
    MultipleScopes = 1003,
    /// The directive could not be read at all.
    UnreadableDirective = 1004,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AC{:04}", *self as u32)
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Qualified name of the declaration the failure is attributed to.
    pub site: Option<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            site: None,
        }
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn format(&self) -> String {
        match &self.site {
            Some(site) => format!("error {}: {}: {}", self.code, site, self.message),
            None => format!("error {}: {}", self.code, self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Append-only sink shared by every extraction of a run.
///
/// Appends from several threads are serialized; none are lost. Ordering across
/// declarations follows append order and carries no meaning.
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    entries: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, diagnostic: Diagnostic) {
        tracing::debug!(code = %diagnostic.code, site = ?diagnostic.site, "{}", diagnostic.message);
        self.lock().push(diagnostic);
    }

    /// A handle that attributes failures to `site` by default.
    pub fn scoped(&self, site: impl Into<String>) -> Errors<'_> {
        Errors {
            collector: self,
            site: site.into(),
        }
    }

    /// Snapshot of everything collected so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.entries
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        // A panicking appender cannot leave the vector half-written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Collector handle bound to the declaration currently being processed.
#[derive(Debug, Clone)]
pub struct Errors<'c> {
    collector: &'c DiagnosticsCollector,
    site: String,
}

impl<'c> Errors<'c> {
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Record a failure against the current declaration.
    pub fn add_invalid(&self, code: ErrorCode, message: impl Into<String>) {
        self.collector
            .add(Diagnostic::new(code, message).with_site(self.site.clone()));
    }

    /// Record a failure against another declaration.
    pub fn add_invalid_at(&self, site: impl Into<String>, code: ErrorCode, message: impl Into<String>) {
        self.collector.add(Diagnostic::new(code, message).with_site(site));
    }
}
