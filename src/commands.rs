//! Shell command output.
//! Turns a folder tree into `mkdir -p "<path>"` lines, parents first.

use crate::tree::FolderTree;

/// Returns one `mkdir -p` command per folder, depth first in key order.
///
/// # Arguments
/// * `tree` - Layout to flatten
/// * `base_path` - Prefix of every path; an empty prefix yields relative paths
pub fn commands(tree: &FolderTree, base_path: &str) -> Vec<String> {
    let mut commands = Vec::new();
    traverse(tree, base_path, &mut commands);
    commands
}

/// Newline-joined [`commands`], ready to paste into a shell.
pub fn serialize(tree: &FolderTree, base_path: &str) -> String {
    commands(tree, base_path).join("\n")
}

fn traverse(tree: &FolderTree, path: &str, commands: &mut Vec<String>) {
    for (name, child) in tree.iter() {
        let child_path = if path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", path, name)
        };
        commands.push(format!("mkdir -p \"{}\"", quote(&child_path)));
        if !child.is_leaf() {
            traverse(child, &child_path, commands);
        }
    }
}

/// Escapes characters that keep their meaning inside double quotes.
fn quote(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len());
    for c in path.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}
