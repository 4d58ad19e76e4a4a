use foldergen::config::{
    get_config, parse_config, Architecture, Configuration, Framework, FrameworkOptions,
    NextJsOptions, ProjectType, ReactOptions, ReactStateManagement, TestOptions,
};
use foldergen::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_json_with_camel_case_field_names() {
    let content = r#"{
        "projectType": "frontend",
        "framework": "react",
        "architecture": "feature",
        "modules": ["auth", "billing"],
        "customFolders": ["src/utils/helpers"],
        "options": {
            "react": { "stateManagement": "redux", "includeTests": true },
            "vue": { "stateManagement": "pinia" }
        }
    }"#;
    let config = parse_config(content).unwrap();

    assert_eq!(config.project_type, ProjectType::Frontend);
    assert_eq!(config.framework(), Framework::React);
    assert_eq!(config.architecture, Architecture::Feature);
    assert_eq!(config.modules, vec!["auth", "billing"]);
    assert_eq!(config.custom_folders, vec!["src/utils/helpers"]);
    assert_eq!(
        config.options,
        FrameworkOptions::React(ReactOptions {
            state_management: ReactStateManagement::Redux,
            include_tests: Some(true),
        })
    );
}

#[test]
fn test_parse_yaml() {
    let content = r#"
project_type: backend
framework: node
architecture: layered
modules:
  - auth
options:
  node:
    include_tests: false
  nextjs:
    use_src_directory: true
"#;
    let config = parse_config(content).unwrap();

    assert_eq!(config.project_type, ProjectType::Backend);
    assert_eq!(config.options, FrameworkOptions::Node(TestOptions { include_tests: Some(false) }));
    assert!(config.custom_folders.is_empty());
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config, Configuration::default());
    assert_eq!(config.framework(), Framework::NextJs);
    assert_eq!(config.architecture, Architecture::Feature);
    assert_eq!(config.options, FrameworkOptions::NextJs(NextJsOptions::default()));
}

#[test]
fn test_unknown_framework_is_rejected() {
    assert!(matches!(parse_config("framework: svelte"), Err(Error::ConfigError(_))));
}

#[test]
fn test_get_config_from_directory() {
    let temp_dir = TempDir::new().unwrap();

    match get_config(temp_dir.path()) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("No configuration file found")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }

    fs::write(temp_dir.path().join("foldergen.yaml"), "framework: vue\n").unwrap();
    fs::write(temp_dir.path().join("foldergen.json"), r#"{"framework": "remix"}"#).unwrap();

    // foldergen.json is looked up first.
    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.framework(), Framework::Remix);
}

#[test]
fn test_get_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("layout.yml");
    fs::write(&path, "project_type: fullstack\nframework: sveltekit\n").unwrap();

    let config = get_config(&path).unwrap();
    assert_eq!(config.project_type, ProjectType::Fullstack);
    assert_eq!(config.framework(), Framework::SvelteKit);

    assert!(matches!(
        get_config(temp_dir.path().join("missing.yml")),
        Err(Error::IoError(_))
    ));
}

#[test]
fn test_normalize_picks_first_allowed_framework() {
    let mut config = Configuration::new(ProjectType::Backend, Framework::React, Architecture::Layered);
    config.options = FrameworkOptions::React(ReactOptions {
        state_management: ReactStateManagement::Context,
        include_tests: Some(true),
    });
    config.modules = vec!["auth".into()];

    let normalized = config.normalize();
    assert_eq!(normalized.framework(), Framework::NextJs);
    assert_eq!(normalized.options, FrameworkOptions::defaults(Framework::NextJs));
    assert_eq!(normalized.modules, vec!["auth"]);
}

#[test]
fn test_normalize_keeps_allowed_framework() {
    let mut config = Configuration::new(ProjectType::Backend, Framework::NestJs, Architecture::Domain);
    config.options = FrameworkOptions::NestJs(TestOptions { include_tests: Some(false) });

    assert_eq!(config.clone().normalize(), config);

    let fullstack = Configuration::new(ProjectType::Fullstack, Framework::Remix, Architecture::Feature);
    assert_eq!(fullstack.clone().normalize(), fullstack);

    let frontend = Configuration::new(ProjectType::Frontend, Framework::Node, Architecture::Feature);
    assert_eq!(frontend.normalize().framework(), Framework::NextJs);
}
