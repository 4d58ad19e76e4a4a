//! Structure generation.
//! Combines the template catalog, framework options, feature modules and
//! custom folders into one finished layout.

use crate::catalog::{TemplateCatalog, TemplateKey};
use crate::config::Configuration;
use crate::locator::module_containers;
use crate::options::apply_options;
use crate::tree::FolderTree;
use log::{debug, warn};

/// Builds folder layouts from configurations.
///
/// The builder never mutates the catalog; each call works on its own copy
/// of the base layout, so a single builder can serve concurrent callers.
pub struct StructureBuilder<'a> {
    catalog: &'a TemplateCatalog,
}

impl<'a> StructureBuilder<'a> {
    pub fn new(catalog: &'a TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Produces the layout described by `config`.
    ///
    /// # Flow
    /// 1. Copies the base layout for the configuration's template key
    /// 2. Applies the framework options
    /// 3. Adds every feature module to each module container
    /// 4. Creates the custom folders
    pub fn build(&self, config: &Configuration) -> FolderTree {
        let key = TemplateKey::from(config);
        debug!("Building structure for {}", key);

        let mut tree = self.catalog.lookup(&key);
        apply_options(&mut tree, &config.options);
        insert_modules(&mut tree, config);
        insert_custom_folders(&mut tree, &config.custom_folders);
        tree
    }
}

impl Default for StructureBuilder<'static> {
    fn default() -> Self {
        StructureBuilder::new(TemplateCatalog::builtin())
    }
}

/// Builds the layout for `config` from the builtin catalog.
pub fn build(config: &Configuration) -> FolderTree {
    StructureBuilder::default().build(config)
}

fn insert_modules(tree: &mut FolderTree, config: &Configuration) {
    let modules: Vec<&str> = config
        .modules
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    if modules.is_empty() {
        return;
    }

    let containers = module_containers(tree, config);
    if containers.is_empty() {
        warn!(
            "No module folder in the {} layout, skipping modules: {}",
            TemplateKey::from(config),
            modules.join(", ")
        );
        return;
    }

    for path in containers {
        let Some(container) = tree.get_path_mut(&path) else {
            continue;
        };
        debug!("Adding {} module(s) to {}", modules.len(), path.join("/"));
        for name in &modules {
            container.insert(*name, FolderTree::new());
        }
    }
}

/// Splits a custom folder path into trimmed, non-blank segments.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn insert_custom_folders(tree: &mut FolderTree, folders: &[String]) {
    for folder in folders {
        let segments = path_segments(folder);
        if segments.is_empty() {
            continue;
        }
        debug!("Adding custom folder {}", segments.join("/"));
        tree.ensure_path(segments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments() {
        assert_eq!(path_segments(" src / utils//helpers/ "), vec!["src", "utils", "helpers"]);
        assert!(path_segments(" / ").is_empty());
        assert!(path_segments("").is_empty());
    }
}
