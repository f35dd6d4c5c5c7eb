//! Template catalog, descriptors, and copying
//!
//! This module provides:
//! - The static template catalog and on-disk resolution
//! - Template descriptor parsing (manifest overrides)
//! - Recursive copying of a template's file tree

pub mod catalog;
pub mod copier;
pub mod descriptor;

pub use catalog::{ResolvedTemplate, Template, TemplateCatalog, TemplateKind, TEMPLATE_TREE_DIR};
pub use copier::copy_tree;
pub use descriptor::TemplateDescriptor;
