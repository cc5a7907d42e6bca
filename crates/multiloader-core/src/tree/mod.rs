//! Project layout as an in-memory tree

mod compose;
mod node;

pub use compose::Composer;
pub use node::{file_paths, find, FileContent, TreeBuilder, TreeNode};
