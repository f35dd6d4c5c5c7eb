//! Product configuration trait for CLI binaries
//!
//! Each scaffolding binary implements this trait to describe its identity,
//! the templates it ships and where they live on disk.

use crate::templates::Template;
use std::path::PathBuf;

/// Configuration trait for scaffolding products
///
/// Implementors define:
/// - Product identity (display name, help text)
/// - The static template catalog
/// - Where the template directories are found
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Templates offered for selection, in display order
    fn templates(&self) -> &'static [Template];

    /// Environment variable that overrides the template root directory
    fn template_dir_env(&self) -> &'static str;

    /// Template root used when the environment variable is unset
    fn default_template_dir(&self) -> PathBuf;

    /// Commands to show once the project is created
    fn next_steps(&self, app_name: &str) -> Vec<String>;
}
