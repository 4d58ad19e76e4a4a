use foldergen::catalog::{TemplateCatalog, TemplateKey};
use foldergen::config::{Architecture, Framework, ProjectType};
use foldergen::tree;

fn key(project_type: ProjectType, framework: Framework, architecture: Architecture) -> TemplateKey {
    TemplateKey::new(project_type, framework, architecture)
}

#[test]
fn test_builtin_covers_every_key() {
    let catalog = TemplateCatalog::builtin();
    assert_eq!(catalog.keys().count(), 72);
    for project_type in ProjectType::ALL {
        for framework in Framework::ALL {
            for architecture in Architecture::ALL {
                let key = key(project_type, framework, architecture);
                assert!(catalog.contains(&key), "{}", key);
                assert!(!catalog.lookup(&key).is_empty(), "{}", key);
            }
        }
    }
}

#[test]
fn test_lookup_returns_a_copy() {
    let catalog = TemplateCatalog::builtin();
    let key = key(ProjectType::Backend, Framework::Node, Architecture::Layered);

    let mut first = catalog.lookup(&key);
    first.remove("tests");
    first.ensure_path(["src", "modules", "auth"]);

    let second = catalog.lookup(&key);
    assert!(second.contains("tests"));
    assert!(second.get_path(&["src", "modules"]).unwrap().is_empty());
}

#[test]
fn test_shared_layouts() {
    let catalog = TemplateCatalog::builtin();

    let backend_react = catalog.lookup(&key(ProjectType::Backend, Framework::React, Architecture::Domain));
    let backend_node = catalog.lookup(&key(ProjectType::Backend, Framework::Node, Architecture::Domain));
    assert_eq!(backend_react, backend_node);

    let fullstack = catalog.lookup(&key(ProjectType::Fullstack, Framework::NestJs, Architecture::Feature));
    assert_eq!(
        fullstack,
        tree! {
            "apps" => {
                "web" => { "components" => {}, "modules" => {}, "lib" => {} },
                "api" => { "modules" => {}, "common" => {}, "config" => {} },
            },
            "packages" => { "shared" => {} },
        }
    );
}

#[test]
fn test_layout_key_order() {
    let catalog = TemplateCatalog::builtin();
    let layout = catalog.lookup(&key(ProjectType::Frontend, Framework::NextJs, Architecture::Feature));
    assert_eq!(
        layout.keys().collect::<Vec<_>>(),
        ["app", "components", "modules", "lib", "hooks", "types", "public"]
    );
}

#[test]
fn test_fallback_for_unregistered_key() {
    let mut catalog = TemplateCatalog::new(tree! { "src" => { "modules" => {} } });
    let registered = key(ProjectType::Frontend, Framework::React, Architecture::Feature);
    catalog.register(registered, tree! { "app" => {} });

    assert_eq!(catalog.lookup(&registered), tree! { "app" => {} });
    let missing = key(ProjectType::Backend, Framework::Vue, Architecture::Domain);
    assert!(!catalog.contains(&missing));
    assert_eq!(catalog.lookup(&missing), tree! { "src" => { "modules" => {} } });
}
