//! Folder tree model.
//! A `FolderTree` maps folder names to their child trees; a tree with no
//! children is a leaf folder. Files are never represented.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered, recursive directory layout.
///
/// Keys keep their insertion order, which is the order folders are rendered
/// and serialized in. Equality ignores ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderTree(IndexMap<String, FolderTree>);

impl FolderTree {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A leaf is a folder without subfolders.
    pub fn is_leaf(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FolderTree> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FolderTree> {
        self.0.get_mut(name)
    }

    /// Follows `path` from this node, returning the node at its end.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&FolderTree> {
        let mut node = self;
        for segment in path {
            node = node.0.get(segment.as_ref())?;
        }
        Some(node)
    }

    pub fn get_path_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut FolderTree> {
        let mut node = self;
        for segment in path {
            node = node.0.get_mut(segment.as_ref())?;
        }
        Some(node)
    }

    /// Inserts `child` under `name`, replacing any previous subtree.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, child: FolderTree) -> Option<FolderTree> {
        self.0.insert(name.into(), child)
    }

    /// Returns the child folder `name`, creating an empty one if missing.
    /// An existing subtree is never touched.
    pub fn ensure_dir(&mut self, name: impl Into<String>) -> &mut FolderTree {
        self.0.entry(name.into()).or_default()
    }

    /// Walks `segments` from this node, creating every missing folder on the way.
    pub fn ensure_path<I, S>(&mut self, segments: I) -> &mut FolderTree
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = self;
        for segment in segments {
            node = node.ensure_dir(segment);
        }
        node
    }

    /// Removes `name` and returns its subtree. Sibling order is preserved.
    pub fn remove(&mut self, name: &str) -> Option<FolderTree> {
        self.0.shift_remove(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FolderTree)> {
        self.0.iter().map(|(name, child)| (name.as_str(), child))
    }
}

/// Builds a [`FolderTree`] literal.
///
/// ```
/// use foldergen::tree;
///
/// let layout = tree! {
///     "src" => { "components" => {}, "hooks" => {} },
///     "public" => {},
/// };
/// assert_eq!(layout.keys().collect::<Vec<_>>(), ["src", "public"]);
/// ```
#[macro_export]
macro_rules! tree {
    () => {
        $crate::tree::FolderTree::new()
    };
    ($($name:literal => { $($inner:tt)* }),+ $(,)?) => {{
        let mut tree = $crate::tree::FolderTree::new();
        $( tree.insert($name, $crate::tree!($($inner)*)); )+
        tree
    }};
}
