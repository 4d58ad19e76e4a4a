//! Feature module placement.
//! Finds the folders that receive one subfolder per feature module. The
//! locator only reports paths; the builder does the inserting.

use crate::config::{Architecture, Configuration, Framework, ProjectType};
use crate::tree::FolderTree;

/// Path of a container folder, relative to the tree root.
pub type ContainerPath = Vec<&'static str>;

/// Application roots of a fullstack monorepo layout.
const FULLSTACK_APPS: [[&str; 2]; 2] = [["apps", "web"], ["apps", "api"]];

const DOMAIN_ROOTS: [&[&str]; 2] = [&["domains"], &["src", "domains"]];

const MODULE_ROOTS: [&[&str]; 2] = [&["modules"], &["src", "modules"]];

/// Places a framework keeps `domains/` besides the top level and `src/`.
fn nested_domain_root(framework: Framework) -> Option<&'static [&'static str]> {
    match framework {
        Framework::Remix => Some(&["app", "domains"]),
        Framework::SvelteKit => Some(&["src", "lib", "domains"]),
        Framework::Angular => Some(&["src", "app", "domains"]),
        _ => None,
    }
}

/// Dedicated container of a feature-oriented layout.
fn feature_root(framework: Framework) -> Option<&'static [&'static str]> {
    match framework {
        Framework::React | Framework::Vue => Some(&["src", "features"]),
        Framework::SvelteKit => Some(&["src", "lib", "modules"]),
        Framework::Remix => Some(&["app", "features"]),
        Framework::Angular => Some(&["src", "app", "features"]),
        _ => None,
    }
}

/// Returns the container folders for feature modules, in insertion order.
///
/// An empty result is valid: the layout simply has no place for modules.
pub fn module_containers(tree: &FolderTree, config: &Configuration) -> Vec<ContainerPath> {
    let exists = |path: &[&'static str]| tree.get_path(path).is_some();
    let mut containers: Vec<ContainerPath> = Vec::new();

    if config.project_type == ProjectType::Fullstack {
        let leaf = match config.architecture {
            Architecture::Domain => "domains",
            _ => "modules",
        };
        for [apps, app] in FULLSTACK_APPS {
            let path = vec![apps, app, leaf];
            if exists(path.as_slice()) {
                containers.push(path);
            }
        }
        return containers;
    }

    if config.architecture == Architecture::Domain {
        let candidates = DOMAIN_ROOTS.into_iter().chain(nested_domain_root(config.framework()));
        for path in candidates {
            if exists(path) {
                containers.push(path.to_vec());
            }
        }
        return containers;
    }

    if config.architecture == Architecture::Feature {
        if let Some(path) = feature_root(config.framework()).filter(|path| exists(*path)) {
            containers.push(path.to_vec());
            return containers;
        }
    }

    for path in MODULE_ROOTS {
        if exists(path) {
            containers.push(path.to_vec());
            break;
        }
    }
    containers
}
