//! Generation configuration.
//! Describes what layout to generate: project type, framework, architecture,
//! feature modules, custom folders and the selected framework's options.
//! Configurations can be loaded from `foldergen.json`, `foldergen.yml` or
//! `foldergen.yaml`.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use clap::ValueEnum;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Frontend,
    Fullstack,
    Backend,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] =
        [ProjectType::Frontend, ProjectType::Fullstack, ProjectType::Backend];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Frontend => "frontend",
            ProjectType::Fullstack => "fullstack",
            ProjectType::Backend => "backend",
        }
    }

    /// Frameworks selectable for this project type.
    ///
    /// The order is part of the contract: when a configuration names a
    /// framework that is not allowed, the first entry is used instead.
    pub fn allowed_frameworks(&self) -> &'static [Framework] {
        match self {
            ProjectType::Frontend => &[
                Framework::NextJs,
                Framework::React,
                Framework::Vue,
                Framework::Angular,
            ],
            ProjectType::Fullstack => &Framework::ALL,
            ProjectType::Backend => &[Framework::NextJs, Framework::Node, Framework::NestJs],
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    #[value(name = "nextjs")]
    NextJs,
    React,
    Vue,
    Angular,
    #[value(name = "sveltekit")]
    SvelteKit,
    Remix,
    Node,
    #[value(name = "nestjs")]
    NestJs,
}

impl Framework {
    pub const ALL: [Framework; 8] = [
        Framework::NextJs,
        Framework::React,
        Framework::Vue,
        Framework::Angular,
        Framework::SvelteKit,
        Framework::Remix,
        Framework::Node,
        Framework::NestJs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::NextJs => "nextjs",
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::SvelteKit => "sveltekit",
            Framework::Remix => "remix",
            Framework::Node => "node",
            Framework::NestJs => "nestjs",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Layered,
    #[default]
    Feature,
    Domain,
}

impl Architecture {
    pub const ALL: [Architecture; 3] =
        [Architecture::Layered, Architecture::Feature, Architecture::Domain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Layered => "layered",
            Architecture::Feature => "feature",
            Architecture::Domain => "domain",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Next.js options: src directory and route groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NextJsOptions {
    #[serde(alias = "useSrcDirectory")]
    pub use_src_directory: bool,
    #[serde(alias = "routeGroups")]
    pub route_groups: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactStateManagement {
    #[default]
    None,
    Redux,
    Zustand,
    Context,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReactOptions {
    #[serde(alias = "stateManagement")]
    pub state_management: ReactStateManagement,
    #[serde(alias = "includeTests")]
    pub include_tests: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VueStateManagement {
    #[default]
    None,
    Pinia,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VueOptions {
    #[serde(alias = "stateManagement")]
    pub state_management: VueStateManagement,
    #[serde(alias = "includeTests")]
    pub include_tests: Option<bool>,
}

/// Options for frameworks whose only switch is the test directory.
///
/// `None` means "not specified"; each framework decides its own default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TestOptions {
    #[serde(alias = "includeTests")]
    pub include_tests: Option<bool>,
}

/// The selected framework together with its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkOptions {
    NextJs(NextJsOptions),
    React(ReactOptions),
    Vue(VueOptions),
    Angular(TestOptions),
    SvelteKit(TestOptions),
    Remix(TestOptions),
    Node(TestOptions),
    NestJs(TestOptions),
}

impl FrameworkOptions {
    /// Default options for `framework`.
    pub fn defaults(framework: Framework) -> Self {
        match framework {
            Framework::NextJs => FrameworkOptions::NextJs(NextJsOptions::default()),
            Framework::React => FrameworkOptions::React(ReactOptions::default()),
            Framework::Vue => FrameworkOptions::Vue(VueOptions::default()),
            Framework::Angular => FrameworkOptions::Angular(TestOptions::default()),
            Framework::SvelteKit => FrameworkOptions::SvelteKit(TestOptions::default()),
            Framework::Remix => FrameworkOptions::Remix(TestOptions::default()),
            Framework::Node => FrameworkOptions::Node(TestOptions::default()),
            Framework::NestJs => FrameworkOptions::NestJs(TestOptions::default()),
        }
    }

    pub fn framework(&self) -> Framework {
        match self {
            FrameworkOptions::NextJs(_) => Framework::NextJs,
            FrameworkOptions::React(_) => Framework::React,
            FrameworkOptions::Vue(_) => Framework::Vue,
            FrameworkOptions::Angular(_) => Framework::Angular,
            FrameworkOptions::SvelteKit(_) => Framework::SvelteKit,
            FrameworkOptions::Remix(_) => Framework::Remix,
            FrameworkOptions::Node(_) => Framework::Node,
            FrameworkOptions::NestJs(_) => Framework::NestJs,
        }
    }

    /// The tests switch, for every framework that has one.
    pub fn include_tests_mut(&mut self) -> Option<&mut Option<bool>> {
        match self {
            FrameworkOptions::NextJs(_) => None,
            FrameworkOptions::React(o) => Some(&mut o.include_tests),
            FrameworkOptions::Vue(o) => Some(&mut o.include_tests),
            FrameworkOptions::Angular(o)
            | FrameworkOptions::SvelteKit(o)
            | FrameworkOptions::Remix(o)
            | FrameworkOptions::Node(o)
            | FrameworkOptions::NestJs(o) => Some(&mut o.include_tests),
        }
    }
}

impl Default for FrameworkOptions {
    fn default() -> Self {
        FrameworkOptions::defaults(Framework::default())
    }
}

/// Everything the structure builder needs to produce a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    pub project_type: ProjectType,
    pub architecture: Architecture,
    pub options: FrameworkOptions,
    /// Feature module names, in insertion order. Duplicates are kept.
    pub modules: Vec<String>,
    /// Slash-delimited folder paths created from the tree root.
    pub custom_folders: Vec<String>,
}

impl Configuration {
    pub fn new(project_type: ProjectType, framework: Framework, architecture: Architecture) -> Self {
        Self {
            project_type,
            architecture,
            options: FrameworkOptions::defaults(framework),
            modules: Vec::new(),
            custom_folders: Vec::new(),
        }
    }

    pub fn framework(&self) -> Framework {
        self.options.framework()
    }

    /// Ensures the framework is allowed for the project type.
    ///
    /// A disallowed framework is replaced with the first allowed one and
    /// its options are reset to that framework's defaults.
    pub fn normalize(mut self) -> Self {
        let allowed = self.project_type.allowed_frameworks();
        if !allowed.contains(&self.framework()) {
            let fallback = allowed[0];
            warn!(
                "Framework {} is not available for {} projects, using {}",
                self.framework(),
                self.project_type,
                fallback
            );
            self.options = FrameworkOptions::defaults(fallback);
        }
        self
    }
}

/// Per-framework option records as written in configuration files.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OptionsFile {
    nextjs: NextJsOptions,
    react: ReactOptions,
    vue: VueOptions,
    angular: TestOptions,
    sveltekit: TestOptions,
    remix: TestOptions,
    node: TestOptions,
    nestjs: TestOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    #[serde(alias = "projectType")]
    project_type: ProjectType,
    framework: Framework,
    architecture: Architecture,
    modules: Vec<String>,
    #[serde(alias = "customFolders")]
    custom_folders: Vec<String>,
    options: OptionsFile,
}

impl ConfigFile {
    fn into_configuration(self) -> Configuration {
        let OptionsFile { nextjs, react, vue, angular, sveltekit, remix, node, nestjs } =
            self.options;
        // Only the selected framework's record survives.
        let options = match self.framework {
            Framework::NextJs => FrameworkOptions::NextJs(nextjs),
            Framework::React => FrameworkOptions::React(react),
            Framework::Vue => FrameworkOptions::Vue(vue),
            Framework::Angular => FrameworkOptions::Angular(angular),
            Framework::SvelteKit => FrameworkOptions::SvelteKit(sveltekit),
            Framework::Remix => FrameworkOptions::Remix(remix),
            Framework::Node => FrameworkOptions::Node(node),
            Framework::NestJs => FrameworkOptions::NestJs(nestjs),
        };
        Configuration {
            project_type: self.project_type,
            architecture: self.architecture,
            options,
            modules: self.modules,
            custom_folders: self.custom_folders,
        }
    }
}

/// Reads a configuration file.
///
/// # Arguments
/// * `path` - A configuration file, or a directory searched for one of `CONFIG_FILES`
///
/// # Errors
/// * `Error::ConfigError` if `path` is a directory without a configuration file
/// * `Error::IoError` if the file cannot be read
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if path.is_dir() {
        for file in CONFIG_FILES {
            let config_path = path.join(file);
            if config_path.exists() {
                debug!("Loading configuration from {}", config_path.display());
                return Ok(std::fs::read_to_string(&config_path)?);
            }
        }
        return Err(Error::ConfigError(format!(
            "No configuration file found in {} (tried: {})",
            path.display(),
            CONFIG_FILES.join(", ")
        )));
    }

    debug!("Loading configuration from {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Configuration> {
    let file: ConfigFile = match serde_json::from_str(content) {
        Ok(file) => file,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))?,
    };
    Ok(file.into_configuration())
}

/// Loads and parses the configuration at `path`.
pub fn get_config<P: AsRef<Path>>(path: P) -> Result<Configuration> {
    let content = load_config(path)?;
    parse_config(&content)
}
