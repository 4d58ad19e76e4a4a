//! Common constants used throughout foldergen.

/// Supported configuration file names, in lookup order
pub const CONFIG_FILES: [&str; 3] = ["foldergen.json", "foldergen.yml", "foldergen.yaml"];

/// Prefix prepended to every generated `mkdir` path
pub const DEFAULT_BASE_PATH: &str = ".";

/// Top-level keys moved under `src/` when a Next.js project uses a src directory
pub const NEXTJS_SRC_KEYS: [&str; 11] = [
    "app",
    "components",
    "lib",
    "hooks",
    "utils",
    "services",
    "types",
    "styles",
    "modules",
    "domains",
    "shared",
];

