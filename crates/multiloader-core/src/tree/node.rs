//! File/folder tree nodes and the builder that keeps sibling paths unique

use crate::error::FormatError;

/// Contents of a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Text(text) => text.as_bytes(),
            FileContent::Binary(bytes) => bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Binary(_) => None,
        }
    }
}

impl From<String> for FileContent {
    fn from(value: String) -> Self {
        FileContent::Text(value)
    }
}

impl From<&str> for FileContent {
    fn from(value: &str) -> Self {
        FileContent::Text(value.to_string())
    }
}

impl From<Vec<u8>> for FileContent {
    fn from(value: Vec<u8>) -> Self {
        FileContent::Binary(value)
    }
}

/// An entry of the composed project layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        path: String,
        content: FileContent,
    },
    Folder {
        path: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn file(path: impl Into<String>, content: impl Into<FileContent>) -> Self {
        TreeNode::File {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn folder(path: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode::Folder {
            path: path.into(),
            children,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::File { path, .. } | TreeNode::Folder { path, .. } => path,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Folder { children, .. } => children,
        }
    }

    /// Relative paths of every file below this node, depth-first
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_file_paths(std::slice::from_ref(self), "", &mut paths);
        paths
    }
}

/// Relative paths of every file in a forest, depth-first
pub fn file_paths(forest: &[TreeNode]) -> Vec<String> {
    let mut paths = Vec::new();
    collect_file_paths(forest, "", &mut paths);
    paths
}

fn collect_file_paths(nodes: &[TreeNode], prefix: &str, out: &mut Vec<String>) {
    for node in nodes {
        let full = join(prefix, node.path());
        match node {
            TreeNode::File { .. } => out.push(full),
            TreeNode::Folder { children, .. } => collect_file_paths(children, &full, out),
        }
    }
}

/// Look up a node by slash-separated path
pub fn find<'a>(forest: &'a [TreeNode], path: &str) -> Option<&'a TreeNode> {
    let (head, rest) = match path.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };
    let node = forest.iter().find(|n| n.path() == head)?;
    match rest {
        Some(rest) if !rest.is_empty() => find(node.children(), rest),
        _ => Some(node),
    }
}

fn join(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", prefix, path)
    }
}

/// Builds an ordered forest from slash-separated paths
///
/// Intermediate folders are created on first use and reused afterwards.
/// Adding a file where a sibling of the same name already exists is a
/// [`FormatError::DuplicatePath`].
#[derive(Debug, Default)]
pub struct TreeBuilder {
    label: String,
    nodes: Vec<TreeNode>,
}

impl TreeBuilder {
    /// `label` names the folder being built in error messages
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            nodes: Vec::new(),
        }
    }

    /// Add a file, creating parent folders as needed
    pub fn file(
        &mut self,
        path: &str,
        content: impl Into<FileContent>,
    ) -> Result<&mut Self, FormatError> {
        let (parents, name) = split_path(path);
        let siblings = descend(&mut self.nodes, &self.label, &parents)?;
        insert(siblings, &parent_label(&self.label, &parents), TreeNode::file(name, content))?;
        Ok(self)
    }

    /// Add an (initially empty) folder; existing folders are reused
    pub fn dir(&mut self, path: &str) -> Result<&mut Self, FormatError> {
        let (parents, name) = split_path(path);
        let siblings = descend(&mut self.nodes, &self.label, &parents)?;
        insert(siblings, &parent_label(&self.label, &parents), TreeNode::folder(name, Vec::new()))?;
        Ok(self)
    }

    /// Attach a prebuilt subtree at the top level, merging into an existing folder
    pub fn node(&mut self, node: TreeNode) -> Result<&mut Self, FormatError> {
        insert(&mut self.nodes, &self.label, node)?;
        Ok(self)
    }

    pub fn build(self) -> Vec<TreeNode> {
        self.nodes
    }

    /// Wrap the built children into a folder named after the label
    pub fn into_folder(self) -> TreeNode {
        TreeNode::folder(self.label, self.nodes)
    }
}

fn split_path(path: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let name = segments.pop().unwrap_or("");
    (segments, name)
}

fn parent_label(label: &str, parents: &[&str]) -> String {
    parents.iter().fold(label.to_string(), |acc, segment| join(&acc, segment))
}

/// Walk (and create) the folders along `parents`, returning the innermost children
fn descend<'a>(
    mut nodes: &'a mut Vec<TreeNode>,
    label: &str,
    parents: &[&str],
) -> Result<&'a mut Vec<TreeNode>, FormatError> {
    let mut current = label.to_string();
    for segment in parents {
        let index = match nodes.iter().position(|n| n.path() == *segment) {
            Some(index) => index,
            None => {
                nodes.push(TreeNode::folder(*segment, Vec::new()));
                nodes.len() - 1
            }
        };
        nodes = match &mut nodes[index] {
            TreeNode::Folder { children, .. } => children,
            TreeNode::File { .. } => {
                return Err(FormatError::DuplicatePath {
                    parent: current,
                    path: segment.to_string(),
                })
            }
        };
        current = join(&current, segment);
    }
    Ok(nodes)
}

/// Insert a node among siblings; folders with the same name merge recursively
fn insert(siblings: &mut Vec<TreeNode>, parent: &str, node: TreeNode) -> Result<(), FormatError> {
    let existing = siblings.iter().position(|n| n.path() == node.path());
    match (existing, node) {
        (None, node) => {
            siblings.push(node);
            Ok(())
        }
        (Some(index), TreeNode::Folder { path, children }) => match &mut siblings[index] {
            TreeNode::Folder {
                children: existing_children,
                ..
            } => {
                let label = join(parent, &path);
                for child in children {
                    insert(existing_children, &label, child)?;
                }
                Ok(())
            }
            TreeNode::File { .. } => Err(FormatError::DuplicatePath {
                parent: parent.to_string(),
                path,
            }),
        },
        (Some(_), node) => Err(FormatError::DuplicatePath {
            parent: parent.to_string(),
            path: node.path().to_string(),
        }),
    }
}
