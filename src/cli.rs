//! Command-line interface implementation for foldergen.
//! Provides argument parsing, command-line overrides on top of a loaded
//! configuration, and output rendering.

use clap::{Parser, ValueEnum};
use log::warn;
use std::path::PathBuf;

use crate::commands::serialize;
use crate::config::{
    Architecture, Configuration, Framework, FrameworkOptions, ProjectType, ReactStateManagement,
    VueStateManagement,
};
use crate::constants::DEFAULT_BASE_PATH;
use crate::error::Result;
use crate::tree::FolderTree;

/// State management choices across React and Vue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateManagement {
    None,
    Redux,
    Zustand,
    Context,
    Pinia,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `mkdir -p` commands, one per folder
    #[default]
    Commands,
    /// The folder tree as a JSON object
    Json,
    /// The folder tree as YAML
    Yaml,
}

/// Command-line arguments structure for foldergen.
#[derive(Parser, Debug)]
#[command(author, version, about = "foldergen: project folder structure generator", long_about = None)]
pub struct Args {
    /// Configuration file, or a directory containing foldergen.json / foldergen.yml / foldergen.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project type
    #[arg(short = 't', long, value_enum)]
    pub project_type: Option<ProjectType>,

    /// Framework; switching frameworks resets the framework options
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Architectural style
    #[arg(short, long, value_enum)]
    pub architecture: Option<Architecture>,

    /// Feature module to add (repeatable)
    #[arg(short, long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Extra folder path such as src/utils/helpers (repeatable)
    #[arg(long = "folder", value_name = "PATH")]
    pub folders: Vec<String>,

    /// Next.js: move the app folders under src/
    #[arg(long)]
    pub src_dir: bool,

    /// Next.js: route group to add under app/, e.g. "(marketing)" (repeatable)
    #[arg(long = "route-group", value_name = "GROUP")]
    pub route_groups: Vec<String>,

    /// React / Vue: state management library
    #[arg(long, value_enum)]
    pub state: Option<StateManagement>,

    /// Include (true) or omit (false) the tests folder
    #[arg(long, value_name = "BOOL")]
    pub tests: Option<bool>,

    /// Prefix of every generated path
    #[arg(short, long, default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Commands)]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

impl Args {
    /// Applies the command-line values on top of `config`.
    ///
    /// Option flags that do not exist for the selected framework are
    /// reported and ignored.
    pub fn apply_to(&self, mut config: Configuration) -> Configuration {
        if let Some(project_type) = self.project_type {
            config.project_type = project_type;
        }
        if let Some(architecture) = self.architecture {
            config.architecture = architecture;
        }
        if let Some(framework) = self.framework {
            if framework != config.framework() {
                config.options = FrameworkOptions::defaults(framework);
            }
        }
        config.modules.extend(self.modules.iter().cloned());
        config.custom_folders.extend(self.folders.iter().cloned());

        if self.src_dir || !self.route_groups.is_empty() {
            if let FrameworkOptions::NextJs(options) = &mut config.options {
                options.use_src_directory |= self.src_dir;
                options.route_groups.extend(self.route_groups.iter().cloned());
            } else {
                warn!("--src-dir and --route-group only apply to nextjs, ignoring");
            }
        }

        if let Some(state) = self.state {
            apply_state(&mut config.options, state);
        }

        if let Some(include_tests) = self.tests {
            match config.options.include_tests_mut() {
                Some(option) => *option = Some(include_tests),
                None => warn!("{} has no tests option, ignoring --tests", config.framework()),
            }
        }
        config
    }
}

fn apply_state(options: &mut FrameworkOptions, state: StateManagement) {
    match (options, state) {
        (FrameworkOptions::React(o), StateManagement::None) => {
            o.state_management = ReactStateManagement::None
        }
        (FrameworkOptions::React(o), StateManagement::Redux) => {
            o.state_management = ReactStateManagement::Redux
        }
        (FrameworkOptions::React(o), StateManagement::Zustand) => {
            o.state_management = ReactStateManagement::Zustand
        }
        (FrameworkOptions::React(o), StateManagement::Context) => {
            o.state_management = ReactStateManagement::Context
        }
        (FrameworkOptions::Vue(o), StateManagement::None) => {
            o.state_management = VueStateManagement::None
        }
        (FrameworkOptions::Vue(o), StateManagement::Pinia) => {
            o.state_management = VueStateManagement::Pinia
        }
        (options, state) => warn!(
            "State management {:?} is not available for {}, ignoring",
            state,
            options.framework()
        ),
    }
}

/// Renders a finished layout in the requested format.
///
/// # Errors
/// * `Error::JsonError` / `Error::YamlError` if the tree cannot be serialized
pub fn render(tree: &FolderTree, format: OutputFormat, base_path: &str) -> Result<String> {
    match format {
        OutputFormat::Commands => Ok(serialize(tree, base_path)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tree)?),
    }
}
