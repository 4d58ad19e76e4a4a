//! Base layouts for every project type, framework and architecture.
//! Lookups always hand out a fresh copy so callers can mutate freely.

use crate::config::{Architecture, Configuration, Framework, ProjectType};
use crate::tree;
use crate::tree::FolderTree;
use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;
use std::fmt;

/// Identifies one base layout, e.g. `frontend_nextjs_feature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub project_type: ProjectType,
    pub framework: Framework,
    pub architecture: Architecture,
}

impl TemplateKey {
    pub fn new(project_type: ProjectType, framework: Framework, architecture: Architecture) -> Self {
        Self { project_type, framework, architecture }
    }
}

impl From<&Configuration> for TemplateKey {
    fn from(config: &Configuration) -> Self {
        Self::new(config.project_type, config.framework(), config.architecture)
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.project_type, self.framework, self.architecture)
    }
}

/// Read-only registry of base layouts with a fallback for unknown keys.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: IndexMap<TemplateKey, FolderTree>,
    fallback: FolderTree,
}

static BUILTIN: Lazy<TemplateCatalog> = Lazy::new(|| {
    let mut catalog = TemplateCatalog::new(Layout::Node.tree(Architecture::Feature));
    for project_type in ProjectType::ALL {
        for framework in Framework::ALL {
            let layout = Layout::for_project(project_type, framework);
            for architecture in Architecture::ALL {
                catalog.register(
                    TemplateKey::new(project_type, framework, architecture),
                    layout.tree(architecture),
                );
            }
        }
    }
    catalog
});

impl TemplateCatalog {
    /// Creates an empty catalog answering every lookup with `fallback`.
    pub fn new(fallback: FolderTree) -> Self {
        Self { templates: IndexMap::new(), fallback }
    }

    /// The catalog shipped with foldergen, covering every key.
    pub fn builtin() -> &'static TemplateCatalog {
        &BUILTIN
    }

    pub fn register(&mut self, key: TemplateKey, tree: FolderTree) -> Option<FolderTree> {
        self.templates.insert(key, tree)
    }

    pub fn contains(&self, key: &TemplateKey) -> bool {
        self.templates.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &TemplateKey> {
        self.templates.keys()
    }

    /// Returns a copy of the layout registered for `key`, or of the fallback.
    pub fn lookup(&self, key: &TemplateKey) -> FolderTree {
        match self.templates.get(key) {
            Some(tree) => tree.clone(),
            None => {
                debug!("No template registered for {}, using fallback", key);
                self.fallback.clone()
            }
        }
    }
}

/// Layout families shared between several template keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    NextFrontend,
    NextBackend,
    React,
    Vue,
    Angular,
    SvelteKit,
    Remix,
    Node,
    Nest,
    Monorepo,
}

impl Layout {
    fn for_project(project_type: ProjectType, framework: Framework) -> Self {
        use Framework::*;
        match (project_type, framework) {
            (ProjectType::Frontend, NextJs) => Layout::NextFrontend,
            (ProjectType::Frontend, React) => Layout::React,
            (ProjectType::Backend, NextJs) => Layout::NextBackend,
            (ProjectType::Backend, React) => Layout::Node,
            (ProjectType::Fullstack, NextJs | React | Node | NestJs) => Layout::Monorepo,
            (_, Vue) => Layout::Vue,
            (_, Angular) => Layout::Angular,
            (_, SvelteKit) => Layout::SvelteKit,
            (_, Remix) => Layout::Remix,
            (_, Node) => Layout::Node,
            (_, NestJs) => Layout::Nest,
        }
    }

    fn tree(self, architecture: Architecture) -> FolderTree {
        use Architecture::*;
        match (self, architecture) {
            (Layout::NextFrontend, Layered) => tree! {
                "app" => {},
                "components" => {},
                "modules" => {},
                "lib" => {},
                "hooks" => {},
                "utils" => {},
                "services" => {},
                "types" => {},
                "styles" => {},
                "public" => {},
            },
            (Layout::NextFrontend, Feature) => tree! {
                "app" => {},
                "components" => {},
                "modules" => {},
                "lib" => {},
                "hooks" => {},
                "types" => {},
                "public" => {},
            },
            (Layout::NextFrontend, Domain) => tree! {
                "app" => {},
                "domains" => {},
                "shared" => { "components" => {}, "hooks" => {}, "utils" => {} },
                "lib" => {},
                "types" => {},
                "public" => {},
            },
            (Layout::NextBackend, Layered) => tree! {
                "app" => { "api" => {}, "layout" => {} },
                "modules" => {},
                "lib" => { "services" => {}, "utils" => {} },
                "types" => {},
                "public" => {},
            },
            (Layout::NextBackend, Feature) => tree! {
                "app" => { "api" => {}, "layout" => {} },
                "modules" => {},
                "lib" => {},
                "types" => {},
                "public" => {},
            },
            (Layout::NextBackend, Domain) => tree! {
                "app" => { "api" => {}, "layout" => {} },
                "domains" => {},
                "lib" => {},
                "types" => {},
                "public" => {},
            },
            (Layout::React, Layered) => tree! {
                "src" => {
                    "components" => {},
                    "pages" => {},
                    "modules" => {},
                    "hooks" => {},
                    "services" => {},
                    "utils" => {},
                    "lib" => {},
                    "assets" => {},
                    "styles" => {},
                },
                "public" => {},
            },
            (Layout::React, Feature) => tree! {
                "src" => {
                    "components" => {},
                    "features" => {},
                    "hooks" => {},
                    "utils" => {},
                    "lib" => {},
                    "assets" => {},
                },
                "public" => {},
            },
            (Layout::React, Domain) => tree! {
                "src" => {
                    "domains" => {},
                    "shared" => { "components" => {}, "hooks" => {}, "utils" => {} },
                    "lib" => {},
                    "assets" => {},
                },
                "public" => {},
            },
            (Layout::Vue, Layered) => tree! {
                "src" => {
                    "components" => {},
                    "views" => {},
                    "modules" => {},
                    "composables" => {},
                    "utils" => {},
                    "router" => {},
                    "assets" => {},
                },
                "public" => {},
            },
            (Layout::Vue, Feature) => tree! {
                "src" => {
                    "components" => {},
                    "features" => {},
                    "composables" => {},
                    "utils" => {},
                    "assets" => {},
                },
                "public" => {},
            },
            (Layout::Vue, Domain) => tree! {
                "src" => {
                    "domains" => {},
                    "shared" => { "components" => {}, "composables" => {}, "utils" => {} },
                    "assets" => {},
                },
                "public" => {},
            },
            (Layout::Angular, Layered) => tree! {
                "src" => {
                    "app" => { "core" => {}, "features" => {}, "shared" => {} },
                    "modules" => {},
                },
                "public" => {},
            },
            (Layout::Angular, Feature) => tree! {
                "src" => {
                    "app" => { "core" => {}, "features" => {}, "shared" => {} },
                },
                "public" => {},
            },
            (Layout::Angular, Domain) => tree! {
                "src" => {
                    "app" => { "core" => {}, "domains" => {}, "shared" => {} },
                },
                "public" => {},
            },
            (Layout::SvelteKit, Layered) => tree! {
                "src" => {
                    "lib" => { "components" => {}, "utils" => {}, "server" => {} },
                    "modules" => {},
                    "routes" => {},
                    "params" => {},
                },
                "static" => {},
                "tests" => {},
            },
            (Layout::SvelteKit, Feature) => tree! {
                "src" => {
                    "lib" => { "components" => {}, "modules" => {}, "server" => {} },
                    "routes" => {},
                    "params" => {},
                },
                "static" => {},
                "tests" => {},
            },
            (Layout::SvelteKit, Domain) => tree! {
                "src" => {
                    "lib" => { "domains" => {}, "shared" => {}, "server" => {} },
                    "routes" => {},
                    "params" => {},
                },
                "static" => {},
                "tests" => {},
            },
            (Layout::Remix, Layered) => tree! {
                "app" => { "routes" => {}, "components" => {}, "utils" => {} },
                "modules" => {},
                "public" => {},
            },
            (Layout::Remix, Feature) => tree! {
                "app" => { "routes" => {}, "components" => {}, "features" => {} },
                "public" => {},
            },
            (Layout::Remix, Domain) => tree! {
                "app" => { "routes" => {}, "domains" => {}, "shared" => {} },
                "public" => {},
            },
            (Layout::Node, Layered) => tree! {
                "src" => {
                    "routes" => {},
                    "controllers" => {},
                    "middleware" => {},
                    "modules" => {},
                    "services" => {},
                    "repositories" => {},
                    "models" => {},
                    "utils" => {},
                    "config" => {},
                },
                "tests" => { "unit" => {}, "integration" => {}, "e2e" => {} },
            },
            (Layout::Node, Feature) => tree! {
                "src" => {
                    "modules" => {},
                    "middleware" => {},
                    "common" => {},
                    "config" => {},
                    "utils" => {},
                },
                "tests" => { "unit" => {}, "integration" => {}, "e2e" => {} },
            },
            (Layout::Node, Domain) => tree! {
                "src" => {
                    "domains" => {},
                    "middleware" => {},
                    "shared" => {},
                    "config" => {},
                    "utils" => {},
                },
                "tests" => { "unit" => {}, "integration" => {}, "e2e" => {} },
            },
            (Layout::Nest, Layered | Feature) => tree! {
                "src" => {
                    "modules" => {},
                    "common" => {
                        "filters" => {},
                        "guards" => {},
                        "interceptors" => {},
                        "decorators" => {},
                    },
                    "config" => {},
                },
                "test" => { "e2e" => {} },
            },
            (Layout::Nest, Domain) => tree! {
                "src" => {
                    "domains" => {},
                    "common" => {
                        "filters" => {},
                        "guards" => {},
                        "interceptors" => {},
                        "decorators" => {},
                    },
                    "config" => {},
                },
                "test" => { "e2e" => {} },
            },
            (Layout::Monorepo, Layered) => tree! {
                "apps" => {
                    "web" => {
                        "components" => {},
                        "modules" => {},
                        "services" => {},
                        "hooks" => {},
                        "utils" => {},
                        "pages" => {},
                    },
                    "api" => {
                        "modules" => {},
                        "controllers" => {},
                        "services" => {},
                        "repositories" => {},
                        "models" => {},
                        "utils" => {},
                    },
                },
                "packages" => { "shared" => {}, "ui" => {} },
            },
            (Layout::Monorepo, Feature) => tree! {
                "apps" => {
                    "web" => { "components" => {}, "modules" => {}, "lib" => {} },
                    "api" => { "modules" => {}, "common" => {}, "config" => {} },
                },
                "packages" => { "shared" => {} },
            },
            (Layout::Monorepo, Domain) => tree! {
                "apps" => {
                    "web" => { "domains" => {}, "shared" => {} },
                    "api" => { "domains" => {}, "shared" => {} },
                },
                "packages" => { "shared" => {}, "domains" => {} },
            },
        }
    }
}
