//! Directive handling
//!
//! `common` holds the diagnostics plumbing and field readers shared by every
//! directive; `component` implements @AutoComponent.

pub mod common;
pub mod component;
