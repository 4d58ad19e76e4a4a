//! Framework option appliers.
//! Each applier reshapes a freshly copied base layout according to the
//! options of exactly one framework and ignores every other framework.

use crate::config::{
    Framework, FrameworkOptions, NextJsOptions, ReactOptions, ReactStateManagement, TestOptions,
    VueOptions, VueStateManagement,
};
use crate::constants::NEXTJS_SRC_KEYS;
use crate::tree::FolderTree;
use log::debug;

/// Mutates a layout in place based on framework options.
pub type Applier = fn(&mut FolderTree, &FrameworkOptions);

/// Registered appliers, in the order they run.
pub const APPLIERS: [(Framework, Applier); 8] = [
    (Framework::NextJs, apply_nextjs),
    (Framework::React, apply_react),
    (Framework::Node, apply_node),
    (Framework::NestJs, apply_nestjs),
    (Framework::Vue, apply_vue),
    (Framework::Angular, apply_angular),
    (Framework::SvelteKit, apply_sveltekit),
    (Framework::Remix, apply_remix),
];

/// Runs every registered applier against `tree`.
pub fn apply_options(tree: &mut FolderTree, options: &FrameworkOptions) {
    for (framework, applier) in APPLIERS {
        if framework == options.framework() {
            debug!("Applying {} options", framework);
        }
        applier(tree, options);
    }
}

/// Route groups go under `app/`; `use_src_directory` wraps the app folders in `src/`.
pub fn apply_nextjs(tree: &mut FolderTree, options: &FrameworkOptions) {
    let FrameworkOptions::NextJs(NextJsOptions { use_src_directory, route_groups }) = options
    else {
        return;
    };

    if let Some(app) = tree.get_mut("app") {
        for group in route_groups.iter().map(|g| g.trim()).filter(|g| !g.is_empty()) {
            app.ensure_dir(group);
        }
    }

    if *use_src_directory {
        let mut src = tree.remove("src").unwrap_or_default();
        for key in NEXTJS_SRC_KEYS {
            if let Some(subtree) = tree.remove(key) {
                src.insert(key, subtree);
            }
        }
        tree.insert("src", src);
    }
}

/// Adds `store/` or `contexts/` and an opt-in `__tests__/` under `src/`.
pub fn apply_react(tree: &mut FolderTree, options: &FrameworkOptions) {
    let FrameworkOptions::React(ReactOptions { state_management, include_tests }) = options else {
        return;
    };
    let Some(src) = tree.get_mut("src") else {
        return;
    };

    match state_management {
        ReactStateManagement::Redux | ReactStateManagement::Zustand => {
            src.ensure_dir("store");
        }
        ReactStateManagement::Context => {
            src.ensure_dir("contexts");
        }
        ReactStateManagement::None => {}
    }

    if *include_tests == Some(true) {
        src.ensure_dir("__tests__");
    }
}

/// Adds `src/stores/` for Pinia and an opt-in `tests/` tree.
pub fn apply_vue(tree: &mut FolderTree, options: &FrameworkOptions) {
    let FrameworkOptions::Vue(VueOptions { state_management, include_tests }) = options else {
        return;
    };
    let Some(src) = tree.get_mut("src") else {
        return;
    };

    if *state_management == VueStateManagement::Pinia {
        src.ensure_dir("stores");
    }

    if *include_tests == Some(true) {
        let tests = tree.ensure_dir("tests");
        tests.ensure_dir("unit");
        tests.ensure_dir("e2e");
    }
}

/// `e2e/` is present unless tests are turned off.
pub fn apply_angular(tree: &mut FolderTree, options: &FrameworkOptions) {
    let FrameworkOptions::Angular(TestOptions { include_tests }) = options else {
        return;
    };
    if *include_tests == Some(false) {
        tree.remove("e2e");
    } else {
        tree.ensure_dir("e2e");
    }
}

pub fn apply_node(tree: &mut FolderTree, options: &FrameworkOptions) {
    if let FrameworkOptions::Node(TestOptions { include_tests: Some(false) }) = options {
        tree.remove("tests");
    }
}

pub fn apply_nestjs(tree: &mut FolderTree, options: &FrameworkOptions) {
    if let FrameworkOptions::NestJs(TestOptions { include_tests: Some(false) }) = options {
        tree.remove("test");
    }
}

pub fn apply_sveltekit(tree: &mut FolderTree, options: &FrameworkOptions) {
    if let FrameworkOptions::SvelteKit(TestOptions { include_tests: Some(false) }) = options {
        tree.remove("tests");
    }
}

/// Remix has no tests folder unless asked for one.
pub fn apply_remix(tree: &mut FolderTree, options: &FrameworkOptions) {
    let FrameworkOptions::Remix(TestOptions { include_tests }) = options else {
        return;
    };
    match include_tests {
        Some(true) => {
            tree.ensure_dir("tests");
        }
        Some(false) => {
            tree.remove("tests");
        }
        None => {}
    }
}
