use clap::Parser;
use foldergen::build;
use foldergen::cli::{render, Args, OutputFormat};
use foldergen::config::{
    Configuration, Framework, FrameworkOptions, NextJsOptions, ProjectType, ReactOptions,
    ReactStateManagement, TestOptions,
};
use foldergen::tree;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("foldergen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(parsed.config.is_none());
    assert!(parsed.project_type.is_none());
    assert_eq!(parsed.base_path, ".");
    assert_eq!(parsed.format, OutputFormat::Commands);
    assert!(!parsed.verbose);
    assert!(parsed.tests.is_none());
}

#[test]
fn test_short_flags() {
    let args = make_args(&[
        "-c", "./foldergen.yml", "-t", "backend", "-f", "nestjs", "-a", "domain", "-m", "auth",
        "-b", "my-app", "-o", "out.sh", "-v",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config, Some(PathBuf::from("./foldergen.yml")));
    assert_eq!(parsed.project_type, Some(ProjectType::Backend));
    assert_eq!(parsed.framework, Some(Framework::NestJs));
    assert_eq!(parsed.modules, vec!["auth"]);
    assert_eq!(parsed.base_path, "my-app");
    assert_eq!(parsed.output, Some(PathBuf::from("out.sh")));
    assert!(parsed.verbose);
}

#[test]
fn test_unknown_framework() {
    assert!(Args::try_parse_from(make_args(&["--framework", "svelte"])).is_err());
    assert!(Args::try_parse_from(make_args(&["--framework", "sveltekit"])).is_ok());
}

#[test]
fn test_tests_flag_requires_bool() {
    assert!(Args::try_parse_from(make_args(&["--tests", "maybe"])).is_err());
    let parsed = Args::try_parse_from(make_args(&["--tests", "false"])).unwrap();
    assert_eq!(parsed.tests, Some(false));
}

#[test]
fn test_overrides_build_expected_structure() {
    let args = make_args(&[
        "-t", "backend", "-f", "nestjs", "-a", "domain", "-m", "auth", "-m", "billing", "--tests",
        "false",
    ]);
    let config = Args::try_parse_from(args).unwrap().apply_to(Configuration::default());

    assert_eq!(config.project_type, ProjectType::Backend);
    assert_eq!(config.options, FrameworkOptions::NestJs(TestOptions { include_tests: Some(false) }));

    let layout = build(&config);
    assert!(!layout.contains("test"));
    assert!(layout.get_path(&["src", "domains", "auth"]).is_some());
    assert!(layout.get_path(&["src", "domains", "billing"]).is_some());
}

#[test]
fn test_framework_switch_resets_options() {
    let mut base = Configuration::new(ProjectType::Frontend, Framework::React, Default::default());
    base.options = FrameworkOptions::React(ReactOptions {
        state_management: ReactStateManagement::Redux,
        include_tests: Some(true),
    });

    let args = Args::try_parse_from(make_args(&["-f", "nextjs", "--route-group", "(shop)"])).unwrap();
    let config = args.apply_to(base);

    assert_eq!(
        config.options,
        FrameworkOptions::NextJs(NextJsOptions {
            use_src_directory: false,
            route_groups: vec!["(shop)".to_string()],
        })
    );
}

#[test]
fn test_foreign_option_flags_are_ignored() {
    let args = Args::try_parse_from(make_args(&["-f", "node", "--src-dir", "--state", "pinia"]))
        .unwrap();
    let config = args.apply_to(Configuration::default());

    assert_eq!(config.options, FrameworkOptions::defaults(Framework::Node));
}

#[test]
fn test_state_flag_for_react() {
    let args = Args::try_parse_from(make_args(&["-f", "react", "--state", "context"])).unwrap();
    let config = args.apply_to(Configuration::default());

    let layout = build(&config);
    assert!(layout.get_path(&["src", "contexts"]).is_some());
}

#[test]
fn test_render_formats() {
    let layout = tree! { "app" => {}, "src" => { "components" => {} } };

    let commands = render(&layout, OutputFormat::Commands, ".").unwrap();
    assert_eq!(commands.lines().count(), 3);

    let json = render(&layout, OutputFormat::Json, ".").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({"app": {}, "src": {"components": {}}}));

    let yaml = render(&layout, OutputFormat::Yaml, ".").unwrap();
    assert!(yaml.contains("components: {}"));
}
