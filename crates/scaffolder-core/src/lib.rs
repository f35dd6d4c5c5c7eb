//! Scaffolder Core - Shared library for project scaffolding CLIs
//!
//! This library scaffolds a new project directory from a named local template.
//! It is designed to be used by CLI binaries that share the same scaffolding
//! logic but ship different template sets through a [`ProductConfig`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name validation, conflict scanning, template
//!   resolution, tree copying, manifest generation
//! - **Layer 2: Workflow Orchestration** - [`scaffold`] driven through the
//!   [`Prompter`] trait, so custom UIs and tests can supply the answers
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{scaffold, ProjectRequest, TemplateCatalog};
//!
//! let catalog = TemplateCatalog::from_config(&MyConfig);
//! let request = ProjectRequest::from_arg("my-app")?;
//! let done = scaffold(&request, &catalog, &mut MyPrompter)?;
//! println!("wrote {} files", done.materialized.files.len());
//! ```

pub mod conflict;
pub mod error;
pub mod manifest;
pub mod materialize;
pub mod name;
pub mod product;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use conflict::{ConflictEntry, DirectoryConflictReport};
pub use error::{FsErrorKind, Result, ScaffoldError};
pub use manifest::ManifestDocument;
pub use materialize::{materialize, Materialized};
pub use name::{validate_project_name, NameReport};
pub use product::ProductConfig;
pub use scaffold::{scaffold, ProjectRequest, Prompter, Scaffolded};
pub use templates::{ResolvedTemplate, Template, TemplateCatalog, TemplateKind};

#[cfg(feature = "tui")]
pub use tui::run;
