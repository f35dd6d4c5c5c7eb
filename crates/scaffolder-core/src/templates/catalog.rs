//! Static template catalog backed by template directories on disk

use super::descriptor::TemplateDescriptor;
use crate::error::{Result, ScaffoldError};
use crate::product::ProductConfig;
use colored::Colorize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Directory inside each template root holding the files to copy
pub const TEMPLATE_TREE_DIR: &str = "template";

/// What a template produces, used to group labels visually
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Application,
    Library,
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Stable key, also the directory name under the template root
    pub id: &'static str,
    /// Label shown in the selection prompt
    pub label: &'static str,
    pub kind: TemplateKind,
}

impl Template {
    /// Label coloured by kind: applications cyan, libraries magenta
    pub fn styled_label(&self) -> String {
        match self.kind {
            TemplateKind::Application => self.label.cyan().to_string(),
            TemplateKind::Library => self.label.magenta().to_string(),
        }
    }
}

/// A template located on disk with its manifest overrides loaded
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub template: Template,
    /// `<template root>/<id>`
    pub root: PathBuf,
    /// `<template root>/<id>/template`
    pub tree_dir: PathBuf,
    pub manifest_overrides: Map<String, Value>,
}

/// The set of templates a product offers
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    root: PathBuf,
    templates: &'static [Template],
}

impl TemplateCatalog {
    pub fn new(root: impl Into<PathBuf>, templates: &'static [Template]) -> Self {
        Self {
            root: root.into(),
            templates,
        }
    }

    /// Catalog for a product, honouring its template directory override
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        let root = std::env::var_os(config.template_dir_env())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| config.default_template_dir());
        Self::new(root, config.templates())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn list(&self) -> &'static [Template] {
        self.templates
    }

    pub fn get(&self, id: &str) -> Option<&'static Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Locate a template on disk and load its descriptor
    pub fn resolve(&self, id: &str) -> Result<ResolvedTemplate> {
        let template = *self.get(id).ok_or_else(|| ScaffoldError::UnknownTemplate {
            id: id.to_string(),
            available: self
                .templates
                .iter()
                .map(|t| t.id)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

        let root = self.root.join(template.id);
        let tree_dir = root.join(TEMPLATE_TREE_DIR);
        if !tree_dir.is_dir() {
            return Err(ScaffoldError::MissingTemplate { path: tree_dir });
        }

        let descriptor = TemplateDescriptor::load(&root)?;

        Ok(ResolvedTemplate {
            template,
            root,
            tree_dir,
            manifest_overrides: descriptor.package,
        })
    }
}
