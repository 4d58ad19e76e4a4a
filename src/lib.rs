//! foldergen generates project folder layouts.
//! A configuration (project type, framework, architecture, feature modules,
//! custom folders and framework options) is turned into a folder tree, and
//! the tree into the `mkdir -p` commands that create it.

/// Folder tree model and the `tree!` literal macro
pub mod tree;

/// Base layouts per project type, framework and architecture
pub mod catalog;

/// Command-line interface module for foldergen
pub mod cli;

/// `mkdir -p` command generation
pub mod commands;

/// Generation configuration and configuration file loading
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Feature module placement
pub mod locator;

/// Logger setup
pub mod logger;

/// Framework-specific layout adjustments
pub mod options;

/// Structure generation orchestration
pub mod builder;

pub use builder::{build, StructureBuilder};
pub use commands::serialize;
pub use config::Configuration;
pub use tree::FolderTree;
